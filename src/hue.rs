//! Hue selection for the current engine state.

use crate::config::TimerConfig;
use crate::types::CountMode;
use core::f32::consts::PI;

/// Picks the display hue for this tick.
///
/// `mode` is `None` while the engine is inactive, which selects the idle
/// breathing indicator driven by `phase_ms` (milliseconds since power-up).
pub fn hue_for(
    mode: Option<CountMode>,
    displayed_ms: u64,
    duration_ms: u64,
    phase_ms: u64,
    config: &TimerConfig,
) -> f32 {
    match mode {
        Some(CountMode::CountDown) => countdown_hue(displayed_ms, duration_ms, config),
        Some(CountMode::CountUp) => config.count_up_hue(),
        None => idle_hue(phase_ms, config),
    }
}

/// Linear gradient from the full hue to the expired hue as time runs out.
pub fn countdown_hue(remaining_ms: u64, duration_ms: u64, config: &TimerConfig) -> f32 {
    let fraction = if duration_ms == 0 {
        0.0
    } else {
        (remaining_ms as f32 / duration_ms as f32).clamp(0.0, 1.0)
    };

    config.expired_hue() + (config.full_hue() - config.expired_hue()) * fraction
}

/// Sine oscillation around the idle center hue.
pub fn idle_hue(phase_ms: u64, config: &TimerConfig) -> f32 {
    let period = config.idle_period_ms();
    let time_in_cycle = (phase_ms % period) as f32 / period as f32;
    let angle = time_in_cycle * 2.0 * PI;

    config.idle_center_hue() + config.idle_span() * libm::sinf(angle)
}
