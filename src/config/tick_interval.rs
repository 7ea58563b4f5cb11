// SPDX-License-Identifier: MPL-2.0
//! Tick interval domain type.
//!
//! Wraps the countdown timer resolution in milliseconds and keeps it inside
//! the supported range.

use super::defaults::{DEFAULT_TICK_INTERVAL_MS, MAX_TICK_INTERVAL_MS, MIN_TICK_INTERVAL_MS};
use std::time::Duration;

/// Interval between two countdown ticks.
///
/// # Example
///
/// ```
/// use iced_alerts::config::TickInterval;
///
/// let interval = TickInterval::new(250);
/// assert_eq!(interval.value(), 250);
///
/// // Values outside range are clamped
/// let too_fast = TickInterval::new(1);
/// assert_eq!(too_fast.value(), 10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickInterval(u64);

impl TickInterval {
    /// Creates a new tick interval, clamping to valid range.
    #[must_use]
    pub fn new(millis: u64) -> Self {
        Self(millis.clamp(MIN_TICK_INTERVAL_MS, MAX_TICK_INTERVAL_MS))
    }

    /// Returns the value in milliseconds.
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }

    /// Returns the interval as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }

    /// Converts a wall-clock lifetime into a number of ticks, rounding up so
    /// that a non-zero lifetime never becomes zero ticks.
    #[must_use]
    pub fn ticks_for(self, lifetime: Duration) -> u32 {
        self.checked_ticks_for(lifetime).unwrap_or(u32::MAX)
    }

    /// Like [`TickInterval::ticks_for`], but returns `None` when the tick
    /// count does not fit in a `u32`.
    #[must_use]
    pub fn checked_ticks_for(self, lifetime: Duration) -> Option<u32> {
        let ticks = lifetime.as_millis().div_ceil(u128::from(self.0));
        u32::try_from(ticks).ok()
    }
}

impl Default for TickInterval {
    fn default() -> Self {
        Self(DEFAULT_TICK_INTERVAL_MS)
    }
}
