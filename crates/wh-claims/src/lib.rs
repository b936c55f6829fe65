//! `wh-claims`: the shared coordination state agents consult while deciding.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                     |
//! |-----------------|--------------------------------------------------------------|
//! | [`drop_zone`]   | `DropZoneRegistry`, `DropZone`: fill counters and the all-full predicate |
//! | [`reservation`] | `ReservationTable<T>`: per-tick claim-if-absent sets        |
//! | [`broadcast`]   | `BroadcastQueue`: relayed box sightings                     |
//! | [`ledger`]      | `CarrierLedger` (where each carried box goes next), `PickupClaims` (boxes claimed but still on the floor) |
//! | [`board`]       | `ClaimBoard`: everything above, owned by one simulation     |
//! | [`error`]       | `ClaimError`, `ClaimResult<T>`                               |
//!
//! # Tick discipline
//!
//! Everything here may be mutated during the Decide phase; it is the only
//! state agents share while the grid is frozen.  The two reservation tables
//! are cleared by the scheduler after every Advance phase.  The ledgers, the
//! broadcast queue, and the registry persist across ticks.
//!
//! # Cargo features
//!
//! | Feature   | Effect                                                 |
//! |-----------|--------------------------------------------------------|
//! | `fx-hash` | FxHash instead of SipHash for every claim table.       |

pub mod board;
pub mod broadcast;
pub mod drop_zone;
pub mod error;
pub mod ledger;
pub mod reservation;

#[cfg(test)]
mod tests;

pub use board::ClaimBoard;
pub use broadcast::BroadcastQueue;
pub use drop_zone::{DropZone, DropZoneRegistry};
pub use error::{ClaimError, ClaimResult};
pub use ledger::{CarrierEntry, CarrierLedger, PickupClaim, PickupClaims};
pub use reservation::ReservationTable;

// ── Hash container selection ──────────────────────────────────────────────────

#[cfg(feature = "fx-hash")]
pub(crate) type Map<K, V> = rustc_hash::FxHashMap<K, V>;
#[cfg(not(feature = "fx-hash"))]
pub(crate) type Map<K, V> = std::collections::HashMap<K, V>;

#[cfg(feature = "fx-hash")]
pub(crate) type Set<T> = rustc_hash::FxHashSet<T>;
#[cfg(not(feature = "fx-hash"))]
pub(crate) type Set<T> = std::collections::HashSet<T>;
