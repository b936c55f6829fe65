//! `wh-behavior`: the per-tick coordination protocol.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                       |
//! |-------------|----------------------------------------------------------------|
//! | [`context`] | `DecideContext<'a>`, `AdvanceContext<'a>`                      |
//! | [`agent`]   | `TwoPhaseAgent` trait                                          |
//! | [`robot`]   | Robot Decide/Advance: search, claim, carry, deliver, relay     |
//! | [`cargo`]   | Box Decide/Advance: attach to a claimant, follow, lock         |
//! | [`error`]   | `ProtocolError`, `ProtocolResult<T>`                           |
//!
//! # Design notes
//!
//! One tick runs in two phases, driven by `wh-sim`:
//!
//! 1. **Decide** (sequential, robots by ascending id then boxes by ascending
//!    id): each agent reads the grid as it stood before the tick and writes
//!    a `Pending` next state.  The only shared state it may change is the
//!    `ClaimBoard`, so later agents see earlier claims but never earlier
//!    moves.
//!
//! 2. **Advance**: every pending state is applied to the grid.
//!
//! Robots decide first so a carried box can read the target its carrier
//! wrote in the same tick.

pub mod agent;
pub mod cargo;
pub mod context;
pub mod error;
pub mod robot;


pub use agent::TwoPhaseAgent;
pub use context::{AdvanceContext, DecideContext};
pub use error::{ProtocolError, ProtocolResult};
