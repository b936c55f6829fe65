//! Decide-phase output buffers.
//!
//! Every agent writes its intended next cell and display state into a
//! `Pending` during Decide.  Nothing outside the agent observes it until the
//! Advance phase applies it, which is what makes a tick "simultaneous".

use wh_core::Coord;

/// What a robot looks like to an outside observer.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RobotIndicator {
    #[default]
    Idle,
    Carrying,
}

/// What a box looks like to an outside observer.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CargoIndicator {
    #[default]
    Resting,
    Carried,
}

/// An agent's buffered next state.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Pending<D> {
    pub next:    Coord,
    pub display: D,
}

impl<D> Pending<D> {
    #[inline]
    pub fn new(next: Coord, display: D) -> Self {
        Self { next, display }
    }
}
