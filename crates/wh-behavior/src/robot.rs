//! Robot Decide/Advance.
//!
//! A Decide pass, in order:
//!
//! 1. Drop an objective whose box has been collected by someone else.
//! 2. Survey the four orthogonal neighbors.
//! 3. Reserve the first neighboring floor box nobody reserved this tick.
//! 4. Loaded: relay the sighted box to the broadcast queue, then deliver to
//!    an adjacent drop zone with room, or step toward the nearest one.
//! 5. Idle: claim the sighted box (waiting one tick for it to attach), else
//!    pursue an objective (popping one from the broadcast queue if needed),
//!    else random-walk.

use tracing::trace;

use wh_agent::{Pending, Robot, RobotIndicator};
use wh_claims::ReservationTable;
use wh_core::Coord;
use wh_grid::{CellContent, Occupant};

use crate::{AdvanceContext, DecideContext, ProtocolError, ProtocolResult, TwoPhaseAgent};

type Survey = [(Coord, CellContent)];

impl TwoPhaseAgent for Robot {
    fn occupant(&self) -> Occupant {
        Occupant::Robot(self.id)
    }

    fn decide(&mut self, ctx: &mut DecideContext<'_>) -> ProtocolResult<()> {
        if self.objective.is_some_and(|goal| ctx.board.pickups.was_collected(goal)) {
            self.objective = None;
        }

        let around = ctx.survey(self.coord)?;
        let sighted = reserve_sighted_box(&around, &mut ctx.board.reserved_boxes);

        let next = if self.carrying {
            decide_loaded(self, ctx, &around, sighted)?
        } else {
            decide_idle(self, ctx, &around, sighted)?
        };

        let display = if self.carrying { RobotIndicator::Carrying } else { RobotIndicator::Idle };
        self.pending = Some(Pending::new(next, display));
        Ok(())
    }

    fn advance(&mut self, ctx: &mut AdvanceContext<'_>) -> ProtocolResult<()> {
        let Pending { next, display } =
            self.pending.take().ok_or(ProtocolError::Undecided(self.occupant()))?;
        ctx.grid.move_to(self.occupant(), next)?;
        self.coord = next;
        self.display = display;

        // The box confirms a pickup by recording itself under this robot.
        if self.pending_pickup.take().is_some() && ctx.board.carriers.get(self.id).is_some() {
            self.carrying = true;
            self.display = RobotIndicator::Carrying;
        }
        Ok(())
    }
}

fn decide_loaded(
    robot:   &mut Robot,
    ctx:     &mut DecideContext<'_>,
    around:  &Survey,
    sighted: Option<Coord>,
) -> ProtocolResult<Coord> {
    if let Some(at) = sighted {
        if ctx.board.broadcast.announce(at) {
            trace!(tick = %ctx.tick, robot = %robot.id, box_at = %at, "relayed sighting");
        }
    }

    let open_zone = around.iter().find_map(|&(c, content)| {
        let has_room = content == CellContent::DropZone
            && ctx.board.drop_zones.get(c).is_some_and(|z| z.has_room());
        has_room.then_some(c)
    });
    if let Some(zone) = open_zone {
        let fill = ctx.board.drop_zones.deliver(zone)?;
        ctx.board.carriers.retarget(robot.id, zone)?;
        robot.carrying = false;
        trace!(tick = %ctx.tick, robot = %robot.id, zone = %zone, fill, "delivered");
        return Ok(robot.coord);
    }

    let board = &*ctx.board;
    let step = closest_free(around, &board.reserved_cells, |c| {
        board.drop_zones.nearest_with_room(c).map(|(_, d)| d)
    });
    let next = match step {
        Some(c) => {
            ctx.board.reserved_cells.claim(c);
            c
        }
        None => robot.coord,
    };
    // The box follows whatever target is written here, staying included.
    ctx.board.carriers.retarget(robot.id, next)?;
    Ok(next)
}

fn decide_idle(
    robot:   &mut Robot,
    ctx:     &mut DecideContext<'_>,
    around:  &Survey,
    sighted: Option<Coord>,
) -> ProtocolResult<Coord> {
    if let Some(at) = sighted {
        if let Some(old) = robot.objective.take() {
            if old != at && !ctx.board.pickups.was_collected(old) {
                ctx.board.broadcast.requeue(old);
            }
        }
        ctx.board.pickups.claim(at, robot.id, robot.coord)?;
        robot.pending_pickup = Some(at);
        trace!(tick = %ctx.tick, robot = %robot.id, box_at = %at, "claimed box");
        return Ok(robot.coord);
    }

    if robot.objective.is_none() {
        robot.objective = ctx.board.broadcast.pop();
        if let Some(goal) = robot.objective {
            trace!(tick = %ctx.tick, robot = %robot.id, goal = %goal, "took broadcast objective");
        }
    }

    let step = match robot.objective {
        Some(goal) => {
            closest_free(around, &ctx.board.reserved_cells, |c| Some(c.distance(goal)))
        }
        None => {
            let mut order = around.to_vec();
            ctx.rngs.get_mut(robot.id).shuffle(&mut order);
            order
                .into_iter()
                .find(|&(c, content)| content.is_empty() && !ctx.board.reserved_cells.is_claimed(&c))
                .map(|(c, _)| c)
        }
    };

    Ok(match step {
        Some(c) => {
            ctx.board.reserved_cells.claim(c);
            robot.moves += 1;
            c
        }
        None => robot.coord,
    })
}

/// Reserve the first neighboring floor box not yet reserved this tick.
fn reserve_sighted_box(around: &Survey, reserved: &mut ReservationTable<Coord>) -> Option<Coord> {
    around
        .iter()
        .filter(|&&(_, content)| content == CellContent::Box)
        .map(|&(c, _)| c)
        .find(|&c| reserved.claim(c))
}

/// The empty, unreserved neighbor with the lowest `score`.  Ties go to the
/// earlier neighbor; cells scored `None` are skipped.
fn closest_free(
    around:    &Survey,
    reserved:  &ReservationTable<Coord>,
    mut score: impl FnMut(Coord) -> Option<f64>,
) -> Option<Coord> {
    let mut best: Option<(Coord, f64)> = None;
    for &(c, content) in around {
        if !content.is_empty() || reserved.is_claimed(&c) {
            continue;
        }
        let Some(d) = score(c) else { continue };
        if best.is_none_or(|(_, b)| d < b) {
            best = Some((c, d));
        }
    }
    best.map(|(c, _)| c)
}
