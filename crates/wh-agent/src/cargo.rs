//! Box state.
//!
//! Named `CargoBox` to stay clear of `std::boxed::Box`.

use wh_core::{BoxId, Coord, RobotId};

use crate::{CargoIndicator, Pending};

/// Life cycle of a box.
///
/// ```text
/// Waiting ──(pickup claim found)──▶ Attached(robot) ──(target is a drop zone)──▶ Locked
/// ```
///
/// `Locked` is terminal: the box never moves again.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CargoState {
    /// On the floor, not yet claimed by any robot.
    #[default]
    Waiting,
    /// Following its carrier.
    Attached(RobotId),
    /// Delivered into a drop zone.
    Locked,
}

/// A passive item waiting to be delivered.
#[derive(Debug, Clone)]
pub struct CargoBox {
    pub id: BoxId,

    /// Committed position.  Frozen once `state == Locked`.
    pub coord: Coord,

    pub state: CargoState,

    /// Ticks spent moving with a carrier.
    pub moves: u64,

    pub display: CargoIndicator,

    /// Written by Decide, consumed by Advance.
    pub pending: Option<Pending<CargoIndicator>>,
}

impl CargoBox {
    pub fn new(id: BoxId, coord: Coord) -> Self {
        Self {
            id,
            coord,
            state:   CargoState::Waiting,
            moves:   0,
            display: CargoIndicator::Resting,
            pending: None,
        }
    }

    /// The robot carrying this box, if any.
    #[inline]
    pub fn owner(&self) -> Option<RobotId> {
        match self.state {
            CargoState::Attached(robot) => Some(robot),
            _ => None,
        }
    }

    #[inline]
    pub fn is_carried(&self) -> bool {
        self.owner().is_some()
    }

    #[inline]
    pub fn is_locked(&self) -> bool {
        self.state == CargoState::Locked
    }
}
