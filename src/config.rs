//! Tunable timer constants and their validating builder.

/// Validated timer configuration.
///
/// Hues are in degrees (0.0-360.0), saturation and brightness in 0.0-1.0.
/// Build custom values through [`TimerConfig::builder`]; [`Default`] gives the
/// stock green-to-red countdown with a cyan breathing idle indicator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimerConfig {
    tick_period_ms: u64,
    saturation: f32,
    brightness: f32,
    full_hue: f32,
    expired_hue: f32,
    count_up_hue: f32,
    idle_center_hue: f32,
    idle_span: f32,
    idle_period_ms: u64,
}

impl TimerConfig {
    const DEFAULT: Self = Self {
        tick_period_ms: 10,
        saturation: 1.0,
        brightness: 0.5,
        full_hue: 120.0,
        expired_hue: 0.0,
        count_up_hue: 200.0,
        idle_center_hue: 170.0,
        idle_span: 20.0,
        idle_period_ms: 4000,
    };

    /// Creates a builder seeded with the default values.
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    /// Fixed delay the host waits between two ticks.
    /// Sets the interval between ticks in milliseconds.
    pub fn tick_period_ms(&self) -> u64 {
        self.tick_period_ms
    }

    /// Saturation shared by every cell.
    /// Sets the saturation of every lit cell (0.0-1.0).
    pub fn saturation(&self) -> f32 {
        self.saturation
    }

    /// Brightness of a lit cell.
    /// Sets the value of lit cells (0.0-1.0). Unlit cells are always 0.
    pub fn brightness(&self) -> f32 {
        self.brightness
    }

    /// Countdown hue with the full duration remaining.
    pub fn full_hue(&self) -> f32 {
        self.full_hue
    }

    /// Countdown hue at zero.
    pub fn expired_hue(&self) -> f32 {
        self.expired_hue
    }

    /// Constant hue while counting up.
    /// Sets the fixed hue shown while counting up.
    pub fn count_up_hue(&self) -> f32 {
        self.count_up_hue
    }

    /// Center of the idle oscillation.
    pub fn idle_center_hue(&self) -> f32 {
        self.idle_center_hue
    }

    /// Half-width of the idle oscillation in degrees.
    pub fn idle_span(&self) -> f32 {
        self.idle_span
    }

    /// Length of one idle oscillation cycle.
    pub fn idle_period_ms(&self) -> u64 {
        self.idle_period_ms
    }
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Configuration validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Tick period is zero.
    ZeroTickPeriod,

    /// Idle oscillation period is zero.
    ZeroIdlePeriod,

    /// Saturation outside 0.0-1.0.
    SaturationOutOfRange,

    /// Brightness outside 0.0-1.0.
    BrightnessOutOfRange,

    /// A hue outside 0.0-360.0.
    HueOutOfRange,

    /// Idle span outside 0.0-90.0.
    IdleSpanOutOfRange,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::ZeroTickPeriod => write!(f, "tick period must be non-zero"),
            ConfigError::ZeroIdlePeriod => write!(f, "idle oscillation period must be non-zero"),
            ConfigError::SaturationOutOfRange => {
                write!(f, "saturation must be within 0.0-1.0")
            }
            ConfigError::BrightnessOutOfRange => {
                write!(f, "brightness must be within 0.0-1.0")
            }
            ConfigError::HueOutOfRange => write!(f, "hues must be within 0.0-360.0 degrees"),
            ConfigError::IdleSpanOutOfRange => {
                write!(f, "idle span must be within 0.0-90.0 degrees")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

/// Builder for [`TimerConfig`].
#[derive(Debug, Clone, Copy)]
pub struct ConfigBuilder {
    config: TimerConfig,
}

impl ConfigBuilder {
    /// Creates a builder holding the default configuration.
    pub fn new() -> Self {
        Self {
            config: TimerConfig::DEFAULT,
        }
    }

    /// Sets the interval between ticks in milliseconds.
    pub fn tick_period_ms(mut self, millis: u64) -> Self {
        self.config.tick_period_ms = millis;
        self
    }

    /// Sets the saturation of every lit cell (0.0-1.0).
    pub fn saturation(mut self, saturation: f32) -> Self {
        self.config.saturation = saturation;
        self
    }

    /// Sets the value of lit cells (0.0-1.0). Unlit cells are always 0.
    pub fn brightness(mut self, brightness: f32) -> Self {
        self.config.brightness = brightness;
        self
    }

    /// Sets the countdown gradient, from full time remaining to expired.
    pub fn countdown_hues(mut self, full: f32, expired: f32) -> Self {
        self.config.full_hue = full;
        self.config.expired_hue = expired;
        self
    }

    /// Sets the fixed hue shown while counting up.
    pub fn count_up_hue(mut self, hue: f32) -> Self {
        self.config.count_up_hue = hue;
        self
    }

    /// Sets the idle breathing indicator: hue oscillates within
    /// `center ± span` once every `period_ms`.
    pub fn idle_breathing(mut self, center: f32, span: f32, period_ms: u64) -> Self {
        self.config.idle_center_hue = center;
        self.config.idle_span = span;
        self.config.idle_period_ms = period_ms;
        self
    }

    /// Validates and returns the configuration.
    ///
    /// # Errors
    /// Returns the first [`ConfigError`] found.
    pub fn build(self) -> Result<TimerConfig, ConfigError> {
        let c = self.config;

        if c.tick_period_ms == 0 {
            return Err(ConfigError::ZeroTickPeriod);
        }
        if c.idle_period_ms == 0 {
            return Err(ConfigError::ZeroIdlePeriod);
        }
        if !(0.0..=1.0).contains(&c.saturation) {
            return Err(ConfigError::SaturationOutOfRange);
        }
        if !(0.0..=1.0).contains(&c.brightness) {
            return Err(ConfigError::BrightnessOutOfRange);
        }

        let hues = [c.full_hue, c.expired_hue, c.count_up_hue, c.idle_center_hue];
        if hues.iter().any(|h| !(0.0..360.0).contains(h)) {
            return Err(ConfigError::HueOutOfRange);
        }
        if !(0.0..=90.0).contains(&c.idle_span) {
            return Err(ConfigError::IdleSpanOutOfRange);
        }

        Ok(c)
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
