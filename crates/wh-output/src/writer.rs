//! The `OutputWriter` trait implemented by backend writers.

use crate::{AgentSnapshotRow, DropZoneRow, OutputResult, TickSummaryRow};

/// A sink for simulation output.
///
/// Errors never reach the simulation: [`SimOutputObserver`][crate::SimOutputObserver]
/// stores the first one for [`take_error`][crate::SimOutputObserver::take_error].
pub trait OutputWriter {
    /// Write a batch of agent snapshots.
    fn write_snapshots(&mut self, rows: &[AgentSnapshotRow]) -> OutputResult<()>;

    /// Write one tick summary row.
    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()>;

    /// Write the final drop-zone fill levels.
    fn write_drop_zones(&mut self, rows: &[DropZoneRow]) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
