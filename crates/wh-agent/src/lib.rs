//! `wh-agent`: robot and box state for the warehouse simulation.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`pending`] | `Pending<D>` buffer, `RobotIndicator`, `CargoIndicator`   |
//! | [`robot`]   | `Robot`                                                   |
//! | [`cargo`]   | `CargoBox`, `CargoState`                                  |
//! | [`store`]   | `AgentStore` (all robots and boxes), `AgentRngs`          |
//! | [`builder`] | `AgentStoreBuilder` (fluent construction)                 |
//!
//! This crate is pure data.  The Decide/Advance logic that mutates these
//! structs lives in `wh-behavior`.

pub mod builder;
pub mod cargo;
pub mod pending;
pub mod robot;
pub mod store;


pub use builder::AgentStoreBuilder;
pub use cargo::{CargoBox, CargoState};
pub use pending::{CargoIndicator, Pending, RobotIndicator};
pub use robot::Robot;
pub use store::{AgentRngs, AgentStore};
