//! Core types shared by the engine, the input aggregator and the renderer.

/// One minute in milliseconds; the unit of every duration adjustment.
pub const MINUTE_MS: u64 = 60_000;

/// Whether elapsed time is currently accruing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EngineState {
    /// Stopped. The display previews the configured duration.
    Inactive,

    /// Running in the mode chosen at start.
    Active,
}

/// Counting direction of an active session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CountMode {
    /// No duration configured, time counts up without bound.
    CountUp,

    /// Counts the configured duration down to zero.
    CountDown,
}

/// High-level input event produced by the aggregator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// Start when inactive, stop when active.
    Toggle,

    /// Remove one minute from the duration.
    Decrease,

    /// Add one minute to the duration.
    Increase,
}

/// State change applied by the engine during a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Transition {
    /// Inactive -> Active.
    Started(CountMode),

    /// Active -> Inactive on request. Carries the total accumulated time.
    Stopped { elapsed_ms: u64 },

    /// Countdown reached zero; the engine stopped and reset itself.
    Expired,

    /// Duration changed while inactive; accumulated time was reset.
    DurationChanged { duration_ms: u64 },

    /// Explicit reset to inactive with no accumulated time.
    Reset,
}

impl core::fmt::Display for Transition {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Transition::Started(CountMode::CountUp) => write!(f, "timer activated (counting up)"),
            Transition::Started(CountMode::CountDown) => {
                write!(f, "timer activated (counting down)")
            }
            Transition::Stopped { elapsed_ms } => {
                write!(f, "timer stopped after {} ms", elapsed_ms)
            }
            Transition::Expired => write!(f, "timer expired, timer reset"),
            Transition::Reset => write!(f, "timer reset"),
            Transition::DurationChanged { duration_ms } => {
                write!(
                    f,
                    "timer reset, duration {} min",
                    duration_ms / MINUTE_MS
                )
            }
        }
    }
}
