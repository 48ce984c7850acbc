//! Timer state machine.
//!
//! Provides [`TimerEngine`], which owns the duration, the accumulated active
//! time and the current session, and advances them once per tick from the
//! aggregated input. Every write to engine state goes through a single
//! transition function matching on (phase, trigger).

use crate::input::TickInput;
use crate::time::{TimeInstant, millis_between};
use crate::types::{CountMode, EngineState, Event, MINUTE_MS, Transition};

/// Engine phase. The session start only exists while active.
#[derive(Debug, Clone, Copy)]
enum Phase<I> {
    Inactive,
    Active { mode: CountMode, session_start: I },
}

/// Cause of a transition.
#[derive(Debug, Clone, Copy)]
enum Trigger {
    Event(Event),
    /// Latched remote duration, applied every idle tick.
    RemoteMinutes(u32),
    /// Countdown reached zero.
    Expire,
    Reset,
}

/// Result of one engine tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EngineStep {
    /// Value to show, in milliseconds.
    pub displayed_ms: u64,

    /// Reportable transition applied this tick, if any.
    pub transition: Option<Transition>,
}

/// Countdown/count-up timer state machine.
///
/// Starts `Inactive` with a zero duration. A start with zero duration counts
/// up; any other duration counts down and stops on its own at zero.
#[derive(Debug, Clone)]
pub struct TimerEngine<I: TimeInstant> {
    phase: Phase<I>,
    duration_ms: u64,
    cumulative_ms: u64,
    boot: I,
}

impl<I: TimeInstant> TimerEngine<I> {
    /// Creates an inactive engine. `boot` anchors the idle color phase.
    pub fn new(boot: I) -> Self {
        Self {
            phase: Phase::Inactive,
            duration_ms: 0,
            cumulative_ms: 0,
            boot,
        }
    }

    /// Advances the engine by one tick.
    ///
    /// Applies the latched remote duration (idle only), then the tick's event,
    /// then checks for countdown expiry. At most one start or stop happens.
    pub fn step(&mut self, input: TickInput, now: I) -> EngineStep {
        let mut transition = None;

        if let Some(minutes) = input.remote_minutes {
            transition = self.apply(Trigger::RemoteMinutes(minutes), now);
        }

        if let Some(event) = input.event {
            if let Some(applied) = self.apply(Trigger::Event(event), now) {
                transition = Some(applied);
            }
        }

        // Computed before expiry so the expiry tick still shows zero.
        let displayed_ms = self.displayed_ms(now);
        if self.mode() == Some(CountMode::CountDown) && displayed_ms == 0 {
            transition = self.apply(Trigger::Expire, now);
        }

        #[cfg(feature = "defmt")]
        if let Some(applied) = transition {
            defmt::info!("{} (showing {} ms)", applied, displayed_ms);
        }

        EngineStep {
            displayed_ms,
            transition,
        }
    }

    /// Starts when inactive, stops when active.
    pub fn toggle(&mut self, now: I) -> Option<Transition> {
        self.apply(Trigger::Event(Event::Toggle), now)
    }

    /// Returns to `Inactive` and clears the accumulated time. Keeps the
    /// duration.
    pub fn reset(&mut self, now: I) -> Option<Transition> {
        self.apply(Trigger::Reset, now)
    }

    fn apply(&mut self, trigger: Trigger, now: I) -> Option<Transition> {
        match (self.phase, trigger) {
            (Phase::Inactive, Trigger::Event(Event::Toggle)) => {
                let mode = if self.duration_ms == 0 {
                    CountMode::CountUp
                } else {
                    CountMode::CountDown
                };
                self.phase = Phase::Active {
                    mode,
                    session_start: now,
                };
                Some(Transition::Started(mode))
            }
            (Phase::Active { session_start, .. }, Trigger::Event(Event::Toggle)) => {
                self.stop(session_start, now);
                Some(Transition::Stopped {
                    elapsed_ms: self.cumulative_ms,
                })
            }
            (Phase::Active { session_start, .. }, Trigger::Expire) => {
                self.stop(session_start, now);
                self.clear_elapsed();
                Some(Transition::Expired)
            }
            (Phase::Inactive, Trigger::Event(Event::Decrease)) => {
                self.set_duration(self.duration_ms.saturating_sub(MINUTE_MS));
                Some(Transition::DurationChanged {
                    duration_ms: self.duration_ms,
                })
            }
            (Phase::Inactive, Trigger::Event(Event::Increase)) => {
                let increased = self.duration_ms.checked_add(MINUTE_MS);
                self.set_duration(increased.unwrap_or(self.duration_ms));
                Some(Transition::DurationChanged {
                    duration_ms: self.duration_ms,
                })
            }
            (Phase::Inactive, Trigger::RemoteMinutes(minutes)) => {
                let previous = self.duration_ms;
                self.set_duration(u64::from(minutes) * MINUTE_MS);
                (previous != self.duration_ms).then_some(Transition::DurationChanged {
                    duration_ms: self.duration_ms,
                })
            }
            (_, Trigger::Reset) => {
                self.phase = Phase::Inactive;
                self.clear_elapsed();
                Some(Transition::Reset)
            }
            (Phase::Active { .. }, Trigger::Event(Event::Decrease | Event::Increase))
            | (Phase::Active { .. }, Trigger::RemoteMinutes(_))
            | (Phase::Inactive, Trigger::Expire) => None,
        }
    }

    fn stop(&mut self, session_start: I, now: I) {
        self.cumulative_ms = self
            .cumulative_ms
            .saturating_add(millis_between(session_start, now));
        self.phase = Phase::Inactive;
    }

    fn set_duration(&mut self, duration_ms: u64) {
        self.duration_ms = duration_ms;
        self.clear_elapsed();
    }

    fn clear_elapsed(&mut self) {
        self.cumulative_ms = 0;
    }

    /// Value the display should show at `now`, clamped at zero.
    pub fn displayed_ms(&self, now: I) -> u64 {
        match self.phase {
            Phase::Inactive => self.duration_ms,
            Phase::Active {
                mode: CountMode::CountDown,
                session_start,
            } => self
                .duration_ms
                .saturating_sub(millis_between(session_start, now))
                .saturating_sub(self.cumulative_ms),
            Phase::Active {
                mode: CountMode::CountUp,
                session_start,
            } => millis_between(session_start, now).saturating_add(self.cumulative_ms),
        }
    }

    /// Returns the current engine state.
    pub fn state(&self) -> EngineState {
        match self.phase {
            Phase::Inactive => EngineState::Inactive,
            Phase::Active { .. } => EngineState::Active,
        }
    }

    /// Mode of the running session, `None` while inactive.
    pub fn mode(&self) -> Option<CountMode> {
        match self.phase {
            Phase::Inactive => None,
            Phase::Active { mode, .. } => Some(mode),
        }
    }

    /// Configured countdown target in milliseconds.
    pub fn duration_ms(&self) -> u64 {
        self.duration_ms
    }

    /// Active time accumulated by completed sessions since the last reset.
    pub fn cumulative_ms(&self) -> u64 {
        self.cumulative_ms
    }

    /// Milliseconds since the engine was created.
    pub fn phase_ms(&self, now: I) -> u64 {
        millis_between(self.boot, now)
    }
}
