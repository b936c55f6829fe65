//! Shared error type for configuration problems.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant via `#[from]`.

use thiserror::Error;

use crate::Coord;

/// The top-level error type for `wh-core`.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Invalid grid dimensions, counts, or layout.  Fatal: the simulation
    /// cannot start.
    #[error("configuration error: {0}")]
    Config(String),

    #[error("coordinate {coord} outside {width}x{height} grid")]
    OutOfBounds {
        coord:  Coord,
        width:  u32,
        height: u32,
    },
}

/// Shorthand result type for `wh-core`.
pub type CoreResult<T> = Result<T, CoreError>;
