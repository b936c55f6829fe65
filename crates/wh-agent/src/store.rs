//! Core agent storage: `AgentStore` (robot and box state) and `AgentRngs`
//! (per-robot RNG).
//!
//! # Why two structs?
//!
//! A robot's Decide needs `&mut Robot` and its own `AgentRng` together while
//! the scheduler iterates the store.  Keeping RNGs in a separate `AgentRngs`
//! lets the scheduler lend them through the Decide context, where a robot
//! looks up its own by id:
//!
//! ```ignore
//! let mut ctx = DecideContext::new(tick, &grid, &mut board, &mut rngs);
//! for robot in &mut store.robots {
//!     robot.decide(&mut ctx)?; // ctx.rngs.get_mut(robot.id) inside
//! }
//! ```

use wh_core::{AgentRng, BoxId, RobotId};

use crate::{CargoBox, Robot};

// ── AgentRngs ─────────────────────────────────────────────────────────────────

/// Per-robot deterministic RNG state, indexed by `RobotId`.
#[derive(Clone)]
pub struct AgentRngs {
    pub inner: Vec<AgentRng>,
}

impl AgentRngs {
    /// Allocate and seed `count` per-robot RNGs from `global_seed`.
    pub(crate) fn new(count: usize, global_seed: u64) -> Self {
        let inner = (0..count as u32)
            .map(|i| AgentRng::new(global_seed, RobotId(i)))
            .collect();
        Self { inner }
    }

    /// Mutable reference to one robot's RNG.
    #[inline]
    pub fn get_mut(&mut self, robot: RobotId) -> &mut AgentRng {
        &mut self.inner[robot.index()]
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

// ── AgentStore ────────────────────────────────────────────────────────────────

/// All robots and boxes of one simulation.
///
/// `robots[i].id == RobotId(i)` and `boxes[i].id == BoxId(i)`; the id is the
/// index.  Agents are created once and never removed.
#[derive(Clone)]
pub struct AgentStore {
    pub robots: Vec<Robot>,
    pub boxes:  Vec<CargoBox>,
}

impl AgentStore {
    #[inline]
    pub fn robot(&self, id: RobotId) -> Option<&Robot> {
        self.robots.get(id.index())
    }

    #[inline]
    pub fn cargo(&self, id: BoxId) -> Option<&CargoBox> {
        self.boxes.get(id.index())
    }

    pub fn robot_count(&self) -> usize {
        self.robots.len()
    }

    pub fn box_count(&self) -> usize {
        self.boxes.len()
    }

    /// Sum of every robot's move counter.
    pub fn total_robot_moves(&self) -> u64 {
        self.robots.iter().map(|r| r.moves).sum()
    }

    /// Robots currently carrying a box.
    pub fn carrying_count(&self) -> usize {
        self.robots.iter().filter(|r| r.carrying).count()
    }

    /// `true` once every box is locked into a drop zone.
    pub fn all_locked(&self) -> bool {
        self.boxes.iter().all(CargoBox::is_locked)
    }
}
