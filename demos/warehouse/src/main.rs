//! warehouse: robots clearing a warehouse floor into drop zones.
//!
//! ```text
//! warehouse [config.json] [output-dir]
//! ```
//!
//! Without a config file the default 28×28 floor with 5 robots and 20 boxes
//! is used.  Fields missing from the file keep their defaults.  CSV output
//! goes to `output/warehouse` unless another directory is given.  Set
//! `RUST_LOG=debug` for per-tick logs.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use wh_core::{Tick, WarehouseConfig};
use wh_output::{CsvWriter, OutputWriter, SimOutputObserver};
use wh_sim::{SimBuilder, SimObserver, Snapshot, TickSummary};

const DEFAULT_OUTPUT_DIR: &str = "output/warehouse";
const PROGRESS_EVERY:     u64  = 500;

// ── Observer wrapper to count rows and report progress ────────────────────────

struct ProgressObserver<W: OutputWriter> {
    inner:         SimOutputObserver<W>,
    snapshot_rows: usize,
    summary_rows:  usize,
}

impl<W: OutputWriter> ProgressObserver<W> {
    fn new(inner: SimOutputObserver<W>) -> Self {
        Self { inner, snapshot_rows: 0, summary_rows: 0 }
    }
}

impl<W: OutputWriter> SimObserver for ProgressObserver<W> {
    fn on_tick_end(&mut self, tick: Tick, summary: &TickSummary) {
        self.summary_rows += 1;
        if tick.0.is_multiple_of(PROGRESS_EVERY) {
            info!(
                %tick,
                delivered = summary.delivered,
                carrying = summary.carrying,
                queued = summary.queued_broadcasts,
                "progress"
            );
        }
        self.inner.on_tick_end(tick, summary);
    }

    fn on_snapshot(&mut self, tick: Tick, snapshot: &Snapshot) {
        self.snapshot_rows += snapshot.robots.len() + snapshot.boxes.len();
        self.inner.on_snapshot(tick, snapshot);
    }

    fn on_sim_end(&mut self, final_tick: Tick, snapshot: &Snapshot) {
        self.inner.on_sim_end(final_tick, snapshot);
    }
}

fn load_config(path: Option<&str>) -> Result<WarehouseConfig> {
    let Some(path) = path else {
        return Ok(WarehouseConfig::default());
    };
    let text = fs::read_to_string(path).with_context(|| format!("reading {path}"))?;
    serde_json::from_str(&text).with_context(|| format!("parsing {path}"))
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();
    let config = load_config(args.get(1).map(String::as_str))?;
    let out_dir = PathBuf::from(args.get(2).map(String::as_str).unwrap_or(DEFAULT_OUTPUT_DIR));

    println!("=== warehouse: pickup and delivery ===");
    println!(
        "Floor: {}x{}  |  Robots: {}  |  Boxes: {}  |  Drop zones: {}  |  Seed: {}",
        config.width,
        config.height,
        config.robot_count,
        config.box_count,
        config.drop_zone_count(),
        config.seed
    );
    println!();

    // 1. Build sim (validates config and places everything).
    let mut sim = SimBuilder::new(config).build()?;

    // 2. Set up output.
    fs::create_dir_all(&out_dir)?;
    let writer = CsvWriter::new(&out_dir)?;
    let mut obs = ProgressObserver::new(SimOutputObserver::new(writer));

    // 3. Run.
    let t0 = Instant::now();
    let last = sim.run(&mut obs)?;
    let elapsed = t0.elapsed();

    if let Some(e) = obs.inner.take_error() {
        eprintln!("output error: {e}");
    }

    // 4. Summary.
    let outcome = if sim.is_terminal() {
        "all drop zones full"
    } else if sim.is_settled() {
        "all boxes delivered"
    } else {
        "tick limit reached"
    };
    println!("Simulation stopped at {last} ({outcome}) in {:.3} s", elapsed.as_secs_f64());
    println!("  robot moves         : {}", sim.total_robot_moves());
    println!("  agent_snapshots.csv : {} rows", obs.snapshot_rows);
    println!("  tick_summaries.csv  : {} rows", obs.summary_rows);
    println!();

    // 5. Drop-zone table.
    println!("{:<10} {:<10} {:<6}", "Zone", "Cell", "Fill");
    println!("{}", "-".repeat(28));
    for zone in sim.drop_zones() {
        println!("{:<10} {:<10} {:<6}", zone.id.0, zone.coord.to_string(), zone.fill);
    }
    println!();

    // 6. Final state as JSON, the shape an API layer would serve.
    println!("{}", serde_json::to_string_pretty(&sim.snapshot())?);

    Ok(())
}
