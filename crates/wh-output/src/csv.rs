//! CSV output backend.
//!
//! Creates three files in the configured output directory:
//! - `agent_snapshots.csv`
//! - `tick_summaries.csv`
//! - `drop_zones.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::{AgentSnapshotRow, DropZoneRow, OutputResult, TickSummaryRow};
use crate::writer::OutputWriter;

/// Writes simulation output to three CSV files.
pub struct CsvWriter {
    snapshots:  Writer<File>,
    summaries:  Writer<File>,
    drop_zones: Writer<File>,
    finished:   bool,
}

impl CsvWriter {
    /// Open (or create) the CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut snapshots = Writer::from_path(dir.join("agent_snapshots.csv"))?;
        snapshots.write_record(["kind", "id", "tick", "x", "y", "loaded"])?;

        let mut summaries = Writer::from_path(dir.join("tick_summaries.csv"))?;
        summaries.write_record(["tick", "robot_moves", "delivered", "queued_broadcasts", "carrying"])?;

        let mut drop_zones = Writer::from_path(dir.join("drop_zones.csv"))?;
        drop_zones.write_record(["id", "x", "y", "fill"])?;

        Ok(Self {
            snapshots,
            summaries,
            drop_zones,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_snapshots(&mut self, rows: &[AgentSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.snapshots.write_record(&[
                row.kind.as_str().to_owned(),
                row.id.to_string(),
                row.tick.to_string(),
                row.x.to_string(),
                row.y.to_string(),
                (row.loaded as u8).to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.tick.to_string(),
            row.robot_moves.to_string(),
            row.delivered.to_string(),
            row.queued_broadcasts.to_string(),
            row.carrying.to_string(),
        ])?;
        Ok(())
    }

    fn write_drop_zones(&mut self, rows: &[DropZoneRow]) -> OutputResult<()> {
        for row in rows {
            self.drop_zones.write_record(&[
                row.id.to_string(),
                row.x.to_string(),
                row.y.to_string(),
                row.fill.to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.snapshots.flush()?;
        self.summaries.flush()?;
        self.drop_zones.flush()?;
        Ok(())
    }
}
