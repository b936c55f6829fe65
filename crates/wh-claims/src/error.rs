//! Claim-protocol violations.
//!
//! None of these can happen while agents follow the reservation protocol.
//! When one does, the tick is aborted and the scheduler halts so the state
//! that produced it can be inspected.

use thiserror::Error;

use wh_core::{BoxId, Coord, RobotId};

#[derive(Debug, Error)]
pub enum ClaimError {
    #[error("{robot} already carries {cargo}")]
    DuplicateCarrier { robot: RobotId, cargo: BoxId },

    #[error("{0} has no carried box in the ledger")]
    MissingCarrier(RobotId),

    #[error("{cargo} is already carried by {robot}")]
    CargoAlreadyCarried { cargo: BoxId, robot: RobotId },

    #[error("box at {at} already claimed for pickup by {by}")]
    AlreadyClaimed { at: Coord, by: RobotId },

    #[error("{0} is not a drop zone")]
    UnknownDropZone(Coord),

    #[error("drop zone at {0} is full")]
    DropZoneFull(Coord),
}

pub type ClaimResult<T> = Result<T, ClaimError>;
