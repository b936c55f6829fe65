//! `wh-grid`: the spatial surface the agents live on.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`grid`]    | `Grid` (dense cell storage), `Occupant`                     |
//! | [`content`] | `CellContent`: closed classification of a neighbor cell    |
//! | [`error`]   | `GridError`, `GridResult<T>`                                |
//!
//! The grid only stores occupancy.  It knows nothing about reservations,
//! fill counts, or agent state; `wh-claims` and `wh-agent` own those.

pub mod content;
pub mod error;
pub mod grid;


pub use content::CellContent;
pub use error::{GridError, GridResult};
pub use grid::{Grid, Occupant};

// ── Hash container selection ──────────────────────────────────────────────────

#[cfg(feature = "fx-hash")]
pub(crate) type Map<K, V> = rustc_hash::FxHashMap<K, V>;
#[cfg(not(feature = "fx-hash"))]
pub(crate) type Map<K, V> = std::collections::HashMap<K, V>;
