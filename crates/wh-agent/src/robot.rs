//! Robot state.

use wh_core::{Coord, RobotId};

use crate::{Pending, RobotIndicator};

/// A mobile unit that searches for boxes and carries them to drop zones.
#[derive(Debug, Clone)]
pub struct Robot {
    pub id: RobotId,

    /// Committed position.  Only changes in the Advance phase.
    pub coord: Coord,

    /// Carrying exactly one box.  Becomes `true` one Advance after a pickup
    /// claim, once the box has attached itself.
    pub carrying: bool,

    /// Floor coordinate of a box this robot is heading for.
    pub objective: Option<Coord>,

    /// Floor coordinate of the box claimed during the current Decide phase,
    /// awaiting confirmation from the box.
    pub pending_pickup: Option<Coord>,

    /// Cells moved by random walk or objective pursuit.
    pub moves: u64,

    pub display: RobotIndicator,

    /// Written by Decide, consumed by Advance.
    pub pending: Option<Pending<RobotIndicator>>,
}

impl Robot {
    pub fn new(id: RobotId, coord: Coord) -> Self {
        Self {
            id,
            coord,
            carrying:       false,
            objective:      None,
            pending_pickup: None,
            moves:          0,
            display:        RobotIndicator::Idle,
            pending:        None,
        }
    }
}
