//! Box Decide/Advance.
//!
//! A waiting box looks for a pickup claim on its floor cell.  An attached
//! box moves to whatever target its carrier last wrote in the ledger, and
//! locks for good when that target is a drop zone.

use tracing::trace;

use wh_agent::{CargoBox, CargoIndicator, CargoState, Pending};
use wh_grid::Occupant;

use crate::{AdvanceContext, DecideContext, ProtocolError, ProtocolResult, TwoPhaseAgent};

impl TwoPhaseAgent for CargoBox {
    fn occupant(&self) -> Occupant {
        Occupant::Cargo(self.id)
    }

    fn decide(&mut self, ctx: &mut DecideContext<'_>) -> ProtocolResult<()> {
        let pending = match self.state {
            CargoState::Locked => Pending::new(self.coord, CargoIndicator::Resting),

            CargoState::Waiting => match ctx.board.pickups.take(self.coord) {
                Some(claim) => {
                    ctx.board.carriers.record(claim.robot, self.id, claim.handoff)?;
                    self.state = CargoState::Attached(claim.robot);
                    trace!(tick = %ctx.tick, cargo = %self.id, robot = %claim.robot, "attached");
                    Pending::new(claim.handoff, CargoIndicator::Carried)
                }
                None => Pending::new(self.coord, CargoIndicator::Resting),
            },

            CargoState::Attached(robot) => {
                let target = ctx
                    .board
                    .carriers
                    .target(robot)
                    .ok_or(ProtocolError::MissingTarget { cargo: self.id, robot })?;
                self.moves += 1;
                if ctx.grid.is_drop_zone(target) {
                    ctx.board.carriers.release(robot);
                    self.state = CargoState::Locked;
                    trace!(tick = %ctx.tick, cargo = %self.id, zone = %target, "locked");
                    Pending::new(target, CargoIndicator::Resting)
                } else {
                    Pending::new(target, CargoIndicator::Carried)
                }
            }
        };
        self.pending = Some(pending);
        Ok(())
    }

    fn advance(&mut self, ctx: &mut AdvanceContext<'_>) -> ProtocolResult<()> {
        let Pending { next, display } =
            self.pending.take().ok_or(ProtocolError::Undecided(self.occupant()))?;
        ctx.grid.move_to(self.occupant(), next)?;
        self.coord = next;
        self.display = display;
        Ok(())
    }
}
