//! Simulation time model.
//!
//! # Design
//!
//! Time is represented as a monotonically increasing `Tick` counter.  The
//! mapping to wall-clock time is held in `SimClock`:
//!
//!   wall_time = start_unix_secs + tick * tick_duration_secs
//!
//! Using an integer tick as the canonical time unit means all cadence
//! arithmetic is exact (no floating-point drift) and comparisons are O(1).
//! Movement, order generation, and consumer generation each fire on their own
//! tick cadence (see [`SimConfig`]) instead of on independent wall-clock
//! timers, which guarantees a single writer per shipment per tick.

use std::fmt;

use crate::error::CoreError;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
///
/// Stored as `u64` to avoid overflow: at one tick per second a u64 lasts
/// ~585 billion years.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }

    /// `true` if `self` falls on the given cadence (tick 0 always does).
    #[inline]
    pub fn is_due(self, interval_ticks: u64) -> bool {
        interval_ticks > 0 && self.0.is_multiple_of(interval_ticks)
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl std::ops::Sub for Tick {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Tick) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Converts between tick counts and Unix wall-clock seconds.
///
/// `SimClock` is cheap to copy and intentionally holds no heap data.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// Unix timestamp (seconds since epoch) of tick 0.
    pub start_unix_secs: i64,
    /// How many real seconds one tick represents.
    pub tick_duration_secs: u32,
    /// The current tick — advanced by `SimClock::advance()` each iteration.
    pub current_tick: Tick,
}

impl SimClock {
    /// Create a clock starting at `start_unix_secs` with the given resolution.
    pub fn new(start_unix_secs: i64, tick_duration_secs: u32) -> Self {
        Self {
            start_unix_secs,
            tick_duration_secs,
            current_tick: Tick::ZERO,
        }
    }

    /// Advance the clock by one tick.
    #[inline]
    pub fn advance(&mut self) {
        self.current_tick = Tick(self.current_tick.0 + 1);
    }

    /// Elapsed simulated seconds since tick 0.
    #[inline]
    pub fn elapsed_secs(&self) -> i64 {
        self.current_tick.0 as i64 * self.tick_duration_secs as i64
    }

    /// Current Unix timestamp corresponding to `current_tick`.
    #[inline]
    pub fn current_unix_secs(&self) -> i64 {
        self.start_unix_secs + self.elapsed_secs()
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (+{}s)", self.current_tick, self.elapsed_secs())
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
///
/// Typically constructed by the application crate and passed to the
/// simulation builder.  The reference cadences mirror the original deployed
/// network (orders slightly more often than movement, consumers rarely), but
/// all of them are tunable.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Unix timestamp for tick 0.
    pub start_unix_secs: i64,

    /// Seconds per tick.
    pub tick_duration_secs: u32,

    /// Total ticks to simulate.
    pub total_ticks: u64,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Progress-percent added to each in-transit shipment per movement pass.
    /// Reference value: 5 (a shipment crosses its route in 20 passes).
    pub step_percent: u8,

    /// Run the movement engine every N ticks.
    pub movement_interval_ticks: u64,

    /// Generate a new order every N ticks.
    pub order_interval_ticks: u64,

    /// Register a new consumer every N ticks, up to `max_consumers`.
    pub consumer_interval_ticks: u64,

    /// Stop registering consumers once the base reaches this size.
    pub max_consumers: usize,
}

impl SimConfig {
    /// The tick at which the simulation ends (exclusive upper bound).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.total_ticks)
    }

    /// Construct a `SimClock` pre-configured for this run.
    pub fn make_clock(&self) -> SimClock {
        SimClock::new(self.start_unix_secs, self.tick_duration_secs)
    }

    /// Reject configurations the engine cannot run sensibly.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.step_percent == 0 || self.step_percent > 100 {
            return Err(CoreError::Config(format!(
                "step_percent must be in 1..=100, got {}",
                self.step_percent
            )));
        }
        if self.movement_interval_ticks == 0 {
            return Err(CoreError::Config(
                "movement_interval_ticks must be at least 1".into(),
            ));
        }
        if self.tick_duration_secs == 0 {
            return Err(CoreError::Config(
                "tick_duration_secs must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            start_unix_secs:          0,
            tick_duration_secs:       1,
            total_ticks:              100,
            seed:                     42,
            step_percent:             5,
            movement_interval_ticks:  1,
            order_interval_ticks:     1,
            consumer_interval_ticks:  5,
            max_consumers:            150,
        }
    }
}
