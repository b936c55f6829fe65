use thiserror::Error;

use wh_claims::ClaimError;
use wh_core::{BoxId, RobotId};
use wh_grid::{GridError, Occupant};

/// A broken reservation-protocol invariant.  Aborts the tick.
#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("{cargo} follows {robot}, but the carrier ledger has no target for it")]
    MissingTarget { cargo: BoxId, robot: RobotId },

    #[error("{0} reached the advance phase without deciding")]
    Undecided(Occupant),

    #[error(transparent)]
    Claim(#[from] ClaimError),

    #[error(transparent)]
    Grid(#[from] GridError),
}

pub type ProtocolResult<T> = Result<T, ProtocolError>;
