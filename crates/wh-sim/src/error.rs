use thiserror::Error;

use wh_behavior::ProtocolError;
use wh_core::{CoreError, Tick};
use wh_grid::GridError;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(#[from] CoreError),

    #[error("invalid layout: {0}")]
    Layout(String),

    #[error("no free cell found for {what} after {attempts} attempts")]
    PlacementExhausted { what: &'static str, attempts: u32 },

    #[error("grid error: {0}")]
    Grid(#[from] GridError),

    #[error("consistency violation at {tick}: {source}")]
    Protocol {
        tick:   Tick,
        #[source]
        source: ProtocolError,
    },

    #[error("simulation halted by an earlier failed tick")]
    Halted,
}

pub type SimResult<T> = Result<T, SimError>;
