//! The `TwoPhaseAgent` trait.

use wh_grid::Occupant;

use crate::{AdvanceContext, DecideContext, ProtocolResult};

/// An agent activated once per tick in two phases.
///
/// `decide` computes the next state from the pre-tick grid and buffers it;
/// `advance` commits the buffer.  The scheduler calls `advance` only after
/// every agent has decided, so no agent reacts to another's move within the
/// same tick.
pub trait TwoPhaseAgent {
    /// How this agent appears on the grid.
    fn occupant(&self) -> Occupant;

    fn decide(&mut self, ctx: &mut DecideContext<'_>) -> ProtocolResult<()>;

    fn advance(&mut self, ctx: &mut AdvanceContext<'_>) -> ProtocolResult<()>;
}
