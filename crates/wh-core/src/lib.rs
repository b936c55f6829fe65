//! `wh-core`: foundational types for the warehouse simulation.
//!
//! This crate is a dependency of every other `wh-*` crate.  It has no `wh-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `RobotId`, `BoxId`, `DropZoneId`                      |
//! | [`coord`]       | `Coord`, straight-line distance                       |
//! | [`time`]        | `Tick`                                                |
//! | [`rng`]         | `AgentRng` (per-robot), `SimRng` (placement)          |
//! | [`config`]      | `WarehouseConfig` and its validation                  |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod coord;
pub mod error;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{DROP_ZONE_CAPACITY, SPAWN_MARGIN, WarehouseConfig};
pub use coord::Coord;
pub use error::{CoreError, CoreResult};
pub use ids::{BoxId, DropZoneId, RobotId};
pub use rng::{AgentRng, SimRng};
pub use time::Tick;
