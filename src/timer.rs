//! The timer context and its cooperative tick.
//!
//! [`SegmentTimer`] owns every piece of mutable state (engine, input buffer,
//! frame) and the display sink. The host calls [`SegmentTimer::tick`] once per
//! [`TimerConfig::tick_period_ms`] from its main loop, timer interrupt or async
//! task; each call samples input once, advances the engine at most once and
//! renders one frame, in that order.

use crate::config::TimerConfig;
use crate::digits::{self, DIGIT_COUNT, TOTAL_CELLS};
use crate::engine::TimerEngine;
use crate::hue;
use crate::input::{ButtonEdges, InputAggregator, RemoteChannel};
use crate::time::{TimeDuration, TimeInstant, TimeSource};
use crate::types::{CountMode, EngineState, Transition};
use palette::Hsv;

/// Trait for abstracting the addressable LED chain.
///
/// Implement this for your strip driver (WS2812 over PIO, SPI, RMT, ...).
/// `cells` is ordered like the physical chain, see [`crate::digits`]. Handle
/// any hardware errors internally - this method cannot fail.
pub trait SegmentDisplay {
    /// Pushes one full frame to the LEDs.
    fn show(&mut self, cells: &[Hsv; TOTAL_CELLS]);
}

/// What happened during one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickReport {
    pub state: EngineState,
    pub mode: Option<CountMode>,
    pub displayed_ms: u64,
    pub digits: [u8; DIGIT_COUNT],
    /// Hue of the rendered frame in degrees.
    pub hue: f32,
    pub transition: Option<Transition>,
}

impl core::fmt::Display for TickReport {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let [m1, m0, s1, s0] = self.digits;
        write!(f, "{}{}:{}{}", m1, m0, s1, s0)?;
        if let Some(transition) = self.transition {
            write!(f, " {}", transition)?;
        }
        Ok(())
    }
}

/// Countdown/count-up timer driving a four digit addressable LED display.
///
/// # Type Parameters
/// * `'t` - Lifetime of the time source reference
/// * `I` - Time instant type
/// * `T` - Time source implementation type
/// * `D` - Display implementation type
/// * `N` - Capacity of the remote command buffer
pub struct SegmentTimer<'t, I: TimeInstant, T: TimeSource<I>, D: SegmentDisplay, const N: usize> {
    engine: TimerEngine<I>,
    input: InputAggregator<N>,
    config: TimerConfig,
    display: D,
    time_source: &'t T,
    frame: [Hsv; TOTAL_CELLS],
}

impl<'t, I: TimeInstant, T: TimeSource<I>, D: SegmentDisplay, const N: usize>
    SegmentTimer<'t, I, T, D, N>
{
    /// Creates an inactive timer with zero duration and blanks the display.
    pub fn new(mut display: D, time_source: &'t T, config: TimerConfig) -> Self {
        let frame = [Hsv::new(0.0, 0.0, 0.0); TOTAL_CELLS];
        display.show(&frame);

        Self {
            engine: TimerEngine::new(time_source.now()),
            input: InputAggregator::new(),
            config,
            display,
            time_source,
            frame,
        }
    }

    /// Runs one tick: input, state machine, render, flush.
    pub fn tick<R: RemoteChannel>(&mut self, buttons: ButtonEdges, remote: &mut R) -> TickReport {
        let now = self.time_source.now();

        let input = self.input.poll(buttons, remote);
        let step = self.engine.step(input, now);

        let mode = self.engine.mode();
        let hue = hue::hue_for(
            mode,
            step.displayed_ms,
            self.engine.duration_ms(),
            self.engine.phase_ms(now),
            &self.config,
        );
        let base = Hsv::new(hue, self.config.saturation(), self.config.brightness());

        let digits = digits::split_time(step.displayed_ms);
        digits::render(&mut self.frame, digits, base);
        self.display.show(&self.frame);

        TickReport {
            state: self.engine.state(),
            mode,
            displayed_ms: step.displayed_ms,
            digits,
            hue,
            transition: step.transition,
        }
    }

    /// Delay the host should wait between ticks.
    pub fn tick_period(&self) -> I::Duration {
        I::Duration::from_millis(self.config.tick_period_ms())
    }

    /// Returns the timer state machine.
    pub fn engine(&self) -> &TimerEngine<I> {
        &self.engine
    }

    /// Returns the input aggregator.
    pub fn input(&self) -> &InputAggregator<N> {
        &self.input
    }

    /// Returns the last rendered frame.
    pub fn frame(&self) -> &[Hsv; TOTAL_CELLS] {
        &self.frame
    }

    pub fn config(&self) -> &TimerConfig {
        &self.config
    }

    /// Returns a reference to the display.
    pub fn display(&self) -> &D {
        &self.display
    }

    /// Returns a mutable reference to the display.
    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }
}
