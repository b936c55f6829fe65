//! Simulation observer trait for progress reporting and data collection.

use wh_core::Tick;

use crate::Snapshot;

/// Aggregate counters at the end of one tick.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TickSummary {
    pub tick:              Tick,
    /// Sum of every robot's move counter so far.
    pub robot_moves:       u64,
    /// Boxes delivered into drop zones so far.
    pub delivered:         u32,
    /// Sightings waiting in the broadcast queue.
    pub queued_broadcasts: usize,
    /// Robots currently carrying a box.
    pub carrying:          usize,
}

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// tick loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl SimObserver for ProgressPrinter {
///     fn on_tick_end(&mut self, tick: Tick, summary: &TickSummary) {
///         if tick.0 % self.interval == 0 {
///             println!("{tick}: {} delivered", summary.delivered);
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called before the tick is processed.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called after the tick's Advance phase.
    fn on_tick_end(&mut self, _tick: Tick, _summary: &TickSummary) {}

    /// Called every `config.output_interval_ticks` ticks with the full
    /// agent state.
    fn on_snapshot(&mut self, _tick: Tick, _snapshot: &Snapshot) {}

    /// Called once when `run` stops, with the final state.
    fn on_sim_end(&mut self, _final_tick: Tick, _snapshot: &Snapshot) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
