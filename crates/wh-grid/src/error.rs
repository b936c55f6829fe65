//! Grid error type.

use thiserror::Error;

use wh_core::Coord;

use crate::Occupant;

/// Errors produced by `wh-grid`.
#[derive(Debug, Error)]
pub enum GridError {
    #[error("grid dimensions must be non-zero, got {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("coordinate {0} is outside the grid")]
    OutOfBounds(Coord),

    #[error("{0} is already placed on the grid")]
    AlreadyPlaced(Occupant),

    #[error("{0} is not on the grid")]
    NotPlaced(Occupant),
}

pub type GridResult<T> = Result<T, GridError>;
