//! Simulation observer trait for progress reporting and data collection.

use sky_core::{Shipment, Tick};
use sky_movement::TickSummary;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// tick loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — delivery counter
///
/// ```rust,ignore
/// #[derive(Default)]
/// struct DeliveryCounter { delivered: usize }
///
/// impl SimObserver for DeliveryCounter {
///     fn on_tick_end(&mut self, _tick: Tick, summary: &TickSummary) {
///         self.delivered += summary.delivered;
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called for each shipment created this tick, before it is stored.
    fn on_order(&mut self, _shipment: &Shipment) {}

    /// Called at the end of each tick with the movement pass's counters.
    ///
    /// On ticks where the movement cadence did not fire the summary is all
    /// zeroes.
    fn on_tick_end(&mut self, _tick: Tick, _summary: &TickSummary) {}

    /// Called once after the final tick completes.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
