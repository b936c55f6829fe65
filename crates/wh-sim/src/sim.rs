//! The `Sim` struct and its tick loop.

use tracing::{debug, info, warn};

use wh_agent::{AgentRngs, AgentStore};
use wh_behavior::{AdvanceContext, DecideContext, ProtocolResult, TwoPhaseAgent};
use wh_claims::ClaimBoard;
use wh_core::{Tick, WarehouseConfig};
use wh_grid::Grid;

use crate::{
    BoxView, DropZoneView, RobotView, SimError, SimObserver, SimResult, Snapshot, TickSummary,
};

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The tick scheduler.
///
/// Owns the grid, the claim board, and every agent.  Create via
/// [`SimBuilder`][crate::SimBuilder].
pub struct Sim {
    /// Run parameters.  Robot and box counts reflect what was placed.
    pub config: WarehouseConfig,

    /// Positions as of the last completed tick.
    pub grid: Grid,

    /// Drop zones, reservations, broadcast queue, and ownership ledgers.
    pub board: ClaimBoard,

    pub agents: AgentStore,

    /// Per-robot RNGs, kept apart from `agents` for the split borrow in
    /// the Decide phase.
    pub rngs: AgentRngs,

    pub(crate) tick:   Tick,
    pub(crate) halted: bool,
}

/// Everything a tick can mutate, captured before it runs.  A failed tick
/// is rolled back to this state.
struct Checkpoint {
    grid:   Grid,
    board:  ClaimBoard,
    agents: AgentStore,
    rngs:   AgentRngs,
}

impl Sim {
    // ── Stepping ──────────────────────────────────────────────────────────

    /// Advance one tick and return the tick counter.
    ///
    /// In the terminal state this is a no-op returning the unchanged
    /// counter.
    ///
    /// # Errors
    ///
    /// [`SimError::Protocol`] if an agent breaks the claim protocol.  The
    /// tick is rolled back, the `Sim` is halted, and every later call
    /// returns [`SimError::Halted`].
    pub fn step(&mut self) -> SimResult<Tick> {
        if self.halted {
            return Err(SimError::Halted);
        }
        if self.is_terminal() {
            return Ok(self.tick);
        }

        let tick = self.tick.next();
        let checkpoint = self.checkpoint();
        if let Err(source) = self.process_tick(tick) {
            self.restore(checkpoint);
            self.halted = true;
            warn!(%tick, error = %source, "tick failed, halting");
            return Err(SimError::Protocol { tick, source });
        }
        self.tick = tick;

        if self.is_terminal() {
            info!(%tick, delivered = self.board.drop_zones.delivered(), "all drop zones full");
        }
        Ok(tick)
    }

    /// Step until terminal, settled, or `config.max_ticks` ticks have run.
    /// Returns the final tick.
    ///
    /// Calls observer hooks at every tick boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<Tick> {
        let limit = Tick(self.config.max_ticks);
        while self.tick < limit && !self.is_terminal() && !self.is_settled() {
            self.observed_step(observer)?;
        }
        if !self.is_terminal() && !self.is_settled() {
            info!(tick = %self.tick, "tick limit reached");
        }
        observer.on_sim_end(self.tick, &self.snapshot());
        Ok(self.tick)
    }

    /// Run up to `n` ticks from the current position, stopping early in the
    /// terminal state.  Ignores `config.max_ticks`.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<Tick> {
        for _ in 0..n {
            if self.is_terminal() {
                break;
            }
            self.observed_step(observer)?;
        }
        Ok(self.tick)
    }

    fn observed_step<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        observer.on_tick_start(self.tick.next());
        let tick = self.step()?;
        observer.on_tick_end(tick, &self.summary());
        let every = self.config.output_interval_ticks;
        if every > 0 && tick.0.is_multiple_of(every) {
            observer.on_snapshot(tick, &self.snapshot());
        }
        Ok(())
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn process_tick(&mut self, tick: Tick) -> ProtocolResult<()> {
        // ── Decide: robots first, so carried boxes see fresh targets ──────
        let mut ctx = DecideContext::new(tick, &self.grid, &mut self.board, &mut self.rngs);
        for robot in &mut self.agents.robots {
            robot.decide(&mut ctx)?;
        }
        for cargo in &mut self.agents.boxes {
            cargo.decide(&mut ctx)?;
        }

        // ── Advance ───────────────────────────────────────────────────────
        let mut ctx = AdvanceContext::new(&mut self.grid, &self.board);
        for robot in &mut self.agents.robots {
            robot.advance(&mut ctx)?;
        }
        for cargo in &mut self.agents.boxes {
            cargo.advance(&mut ctx)?;
        }

        self.board.clear_reservations();
        debug!(
            %tick,
            delivered = self.board.drop_zones.delivered(),
            carrying = self.agents.carrying_count(),
            queued = self.board.broadcast.len(),
            open_pickups = self.board.pickups.open_len(),
            "tick complete"
        );
        Ok(())
    }

    fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            grid:   self.grid.clone(),
            board:  self.board.clone(),
            agents: self.agents.clone(),
            rngs:   self.rngs.clone(),
        }
    }

    fn restore(&mut self, checkpoint: Checkpoint) {
        let Checkpoint { grid, board, agents, rngs } = checkpoint;
        self.grid = grid;
        self.board = board;
        self.agents = agents;
        self.rngs = rngs;
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// Ticks completed so far.
    #[inline]
    pub fn tick(&self) -> Tick {
        self.tick
    }

    /// `true` once every drop zone is full.  Never reverts.
    pub fn is_terminal(&self) -> bool {
        self.board.drop_zones.all_full()
    }

    /// `true` once every box is locked into a drop zone.  Reached without
    /// [`is_terminal`][Self::is_terminal] when the box count is not a
    /// multiple of the drop-zone capacity.
    pub fn is_settled(&self) -> bool {
        self.agents.all_locked()
    }

    /// `true` after a failed tick.
    pub fn is_halted(&self) -> bool {
        self.halted
    }

    pub fn total_robot_moves(&self) -> u64 {
        self.agents.total_robot_moves()
    }

    pub fn robots(&self) -> Vec<RobotView> {
        self.agents.robots.iter().map(RobotView::from).collect()
    }

    pub fn boxes(&self) -> Vec<BoxView> {
        self.agents.boxes.iter().map(BoxView::from).collect()
    }

    pub fn drop_zones(&self) -> Vec<DropZoneView> {
        self.board.drop_zones.zones().iter().map(DropZoneView::from).collect()
    }

    pub fn summary(&self) -> TickSummary {
        TickSummary {
            tick:              self.tick,
            robot_moves:       self.total_robot_moves(),
            delivered:         self.board.drop_zones.delivered(),
            queued_broadcasts: self.board.broadcast.len(),
            carrying:          self.agents.carrying_count(),
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            tick:       self.tick,
            robots:     self.robots(),
            boxes:      self.boxes(),
            drop_zones: self.drop_zones(),
        }
    }
}
