//! Top-level simulation configuration.

use crate::{CoreError, CoreResult};

/// Number of boxes a drop zone accepts before it is full.
pub const DROP_ZONE_CAPACITY: u8 = 5;

/// Robots and boxes spawn in `[SPAWN_MARGIN, dim - SPAWN_MARGIN - 1)` on
/// each axis, keeping them off the walls where drop zones live.
pub const SPAWN_MARGIN: u32 = 2;

/// Smallest width/height for which the spawn band is non-empty.
const MIN_DIMENSION: u32 = 2 * SPAWN_MARGIN + 2;

/// Simulation configuration.
///
/// Typically loaded from a JSON file by the application crate (with the
/// `serde` feature) and passed to `SimBuilder`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WarehouseConfig {
    /// Grid width in cells.
    pub width: u32,

    /// Grid height in cells.
    pub height: u32,

    /// Number of robots.  The reference layout uses 5.
    pub robot_count: u32,

    /// Number of boxes.  Drop-zone count is `ceil(box_count / 5)`.
    pub box_count: u32,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Upper bound for `Sim::run`.  The scheduler itself never stops on
    /// this; it only stops on the all-full predicate.
    pub max_ticks: u64,

    /// Emit an agent snapshot every N ticks.  0 disables snapshots.
    pub output_interval_ticks: u64,
}

impl Default for WarehouseConfig {
    fn default() -> Self {
        Self {
            width:                 28,
            height:                28,
            robot_count:           5,
            box_count:             20,
            seed:                  42,
            max_ticks:             10_000,
            output_interval_ticks: 1,
        }
    }
}

impl WarehouseConfig {
    /// Number of drop zones derived from the box count.
    #[inline]
    pub fn drop_zone_count(&self) -> u32 {
        self.box_count.div_ceil(DROP_ZONE_CAPACITY as u32)
    }

    /// Number of cells in the interior spawn band.
    pub fn spawn_cells(&self) -> u64 {
        let span = |dim: u32| dim.saturating_sub(2 * SPAWN_MARGIN + 1) as u64;
        span(self.width) * span(self.height)
    }

    /// Reject configurations the simulation cannot start from.
    pub fn validate(&self) -> CoreResult<()> {
        if self.width < MIN_DIMENSION || self.height < MIN_DIMENSION {
            return Err(CoreError::Config(format!(
                "grid must be at least {MIN_DIMENSION}x{MIN_DIMENSION}, got {}x{}",
                self.width, self.height
            )));
        }
        if self.box_count == 0 {
            return Err(CoreError::Config("box_count must be positive".into()));
        }
        if self.robot_count == 0 {
            return Err(CoreError::Config("robot_count must be positive".into()));
        }
        let agents = self.robot_count as u64 + self.box_count as u64;
        if agents > self.spawn_cells() {
            return Err(CoreError::Config(format!(
                "{agents} robots and boxes do not fit in {} spawn cells",
                self.spawn_cells()
            )));
        }
        // Corners hold four zones; the rest go on wall cells outside the
        // corner margins.
        let wall_slots = 2 * self.width.saturating_sub(2 * SPAWN_MARGIN + 1) as u64
            + 2 * self.height.saturating_sub(2 * SPAWN_MARGIN + 1) as u64;
        if self.drop_zone_count() as u64 > 4 + wall_slots {
            return Err(CoreError::Config(format!(
                "{} drop zones do not fit on the walls of a {}x{} grid",
                self.drop_zone_count(),
                self.width,
                self.height
            )));
        }
        Ok(())
    }
}
