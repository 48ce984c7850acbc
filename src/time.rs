//! Monotonic clock abstraction used by the timer engine.
//!
//! The engine only ever needs "how many milliseconds passed between two
//! readings", so the traits stay small enough to wrap `embassy_time`, a HAL
//! SysTick counter, or a mock clock in tests.

/// Source of monotonic instants.
pub trait TimeSource<I: TimeInstant> {
    /// Returns the current time instant.
    fn now(&self) -> I;
}

/// Trait abstraction for duration types.
pub trait TimeDuration: Copy + PartialEq {
    /// Converts duration to milliseconds.
    fn as_millis(&self) -> u64;

    /// Creates duration from milliseconds.
    fn from_millis(millis: u64) -> Self;
}

/// Trait abstraction for instant types.
///
/// The clock must not wrap within the device's operational lifetime.
pub trait TimeInstant: Copy {
    /// Duration type for this instant.
    type Duration: TimeDuration;

    /// Calculates duration since an earlier instant.
    fn duration_since(&self, earlier: Self) -> Self::Duration;
}

/// Milliseconds elapsed from `earlier` to `now`.
#[inline]
pub(crate) fn millis_between<I: TimeInstant>(earlier: I, now: I) -> u64 {
    now.duration_since(earlier).as_millis()
}
