//! `wh-sim`: tick scheduler for the warehouse simulation.
//!
//! # Tick loop
//!
//! ```text
//! step():
//!   if every drop zone is full → no-op (terminal state is sticky)
//!   tick += 1
//!   ① Decide  : robots by ascending id, then boxes by ascending id,
//!                all reading the pre-tick grid; claims go to the ClaimBoard
//!   ② Advance : apply every pending move to the grid
//!   ③ Clear   : drop this tick's cell and box reservations
//! ```
//!
//! A protocol violation during ① or ② aborts the tick and halts the `Sim`;
//! every later `step()` returns [`SimError::Halted`].
//!
//! # Cargo features
//!
//! | Feature   | Effect                                              |
//! |-----------|-----------------------------------------------------|
//! | `serde`   | `Serialize`/`Deserialize` on views and config       |
//! | `fx-hash` | FxHash instead of SipHash in the claim tables       |
//!
//! # Quick-start
//!
//! ```rust
//! use wh_core::WarehouseConfig;
//! use wh_sim::{NoopObserver, SimBuilder};
//!
//! let config = WarehouseConfig { width: 12, height: 12, box_count: 5, ..Default::default() };
//! let mut sim = SimBuilder::new(config).build().unwrap();
//! sim.run(&mut NoopObserver).unwrap();
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod placement;
pub mod sim;
pub mod view;

#[cfg(test)]
mod tests;

pub use builder::{Layout, SimBuilder};
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver, TickSummary};
pub use placement::MAX_PLACEMENT_ATTEMPTS;
pub use sim::Sim;
pub use view::{BoxView, DropZoneView, RobotView, Snapshot};
