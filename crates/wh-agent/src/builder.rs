//! Fluent builder for constructing `AgentStore` + `AgentRngs` in one step.
//!
//! # Usage
//!
//! ```rust
//! use wh_agent::AgentStoreBuilder;
//! use wh_core::Coord;
//!
//! let (store, rngs) = AgentStoreBuilder::new(/*seed=*/ 42)
//!     .robot(Coord::new(2, 2))
//!     .robot(Coord::new(4, 2))
//!     .cargo(Coord::new(3, 3))
//!     .build();
//!
//! assert_eq!(store.robot_count(), 2);
//! assert_eq!(store.box_count(),   1);
//! assert_eq!(rngs.len(),          2);
//! ```

use wh_core::{BoxId, Coord, RobotId};

use crate::{AgentRngs, AgentStore, CargoBox, Robot};

/// Fluent builder for [`AgentStore`] + [`AgentRngs`].
///
/// Ids are assigned in call order, robots and boxes counting independently
/// from zero.  The builder does not check placement; `wh-sim` validates
/// positions against the grid before building.
pub struct AgentStoreBuilder {
    seed:   u64,
    robots: Vec<Coord>,
    boxes:  Vec<Coord>,
}

impl AgentStoreBuilder {
    pub fn new(seed: u64) -> Self {
        Self { seed, robots: Vec::new(), boxes: Vec::new() }
    }

    /// Add a robot starting at `at`.
    pub fn robot(mut self, at: Coord) -> Self {
        self.robots.push(at);
        self
    }

    /// Add a box starting at `at`.
    pub fn cargo(mut self, at: Coord) -> Self {
        self.boxes.push(at);
        self
    }

    /// Add one robot per coordinate.
    pub fn robots(mut self, at: impl IntoIterator<Item = Coord>) -> Self {
        self.robots.extend(at);
        self
    }

    /// Add one box per coordinate.
    pub fn boxes(mut self, at: impl IntoIterator<Item = Coord>) -> Self {
        self.boxes.extend(at);
        self
    }

    /// Construct `AgentStore` and `AgentRngs`.
    pub fn build(self) -> (AgentStore, AgentRngs) {
        let robots = self
            .robots
            .iter()
            .enumerate()
            .map(|(i, &at)| Robot::new(RobotId(i as u32), at))
            .collect::<Vec<_>>();
        let boxes = self
            .boxes
            .iter()
            .enumerate()
            .map(|(i, &at)| CargoBox::new(BoxId(i as u32), at))
            .collect();

        let rngs = AgentRngs::new(robots.len(), self.seed);
        (AgentStore { robots, boxes }, rngs)
    }
}
