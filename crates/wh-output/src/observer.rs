//! `SimOutputObserver<W>`: bridges `SimObserver` to an `OutputWriter`.

use wh_core::Tick;
use wh_sim::{SimObserver, Snapshot, TickSummary};

use crate::row::{AgentKind, AgentSnapshotRow, DropZoneRow, TickSummaryRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes agent snapshots, tick summaries, and final
/// drop-zone fills to any [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

fn snapshot_rows(snap: &Snapshot) -> Vec<AgentSnapshotRow> {
    let robots = snap.robots.iter().map(|r| AgentSnapshotRow {
        kind:   AgentKind::Robot,
        id:     r.id.0,
        tick:   snap.tick.0,
        x:      r.coord.x,
        y:      r.coord.y,
        loaded: r.carrying,
    });
    let boxes = snap.boxes.iter().map(|b| AgentSnapshotRow {
        kind:   AgentKind::Box,
        id:     b.id.0,
        tick:   snap.tick.0,
        x:      b.coord.x,
        y:      b.coord.y,
        loaded: b.carried,
    });
    robots.chain(boxes).collect()
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_tick_end(&mut self, tick: Tick, summary: &TickSummary) {
        let row = TickSummaryRow {
            tick:              tick.0,
            robot_moves:       summary.robot_moves,
            delivered:         summary.delivered,
            queued_broadcasts: summary.queued_broadcasts as u64,
            carrying:          summary.carrying as u64,
        };
        let result = self.writer.write_tick_summary(&row);
        self.store_err(result);
    }

    fn on_snapshot(&mut self, _tick: Tick, snapshot: &Snapshot) {
        let rows = snapshot_rows(snapshot);
        if !rows.is_empty() {
            let result = self.writer.write_snapshots(&rows);
            self.store_err(result);
        }
    }

    fn on_sim_end(&mut self, _final_tick: Tick, snapshot: &Snapshot) {
        let rows: Vec<DropZoneRow> = snapshot
            .drop_zones
            .iter()
            .map(|z| DropZoneRow { id: z.id.0, x: z.coord.x, y: z.coord.y, fill: z.fill })
            .collect();
        let result = self.writer.write_drop_zones(&rows);
        self.store_err(result);
        let result = self.writer.finish();
        self.store_err(result);
    }
}
