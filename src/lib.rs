#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`SegmentTimer`**: The timer context; call `tick` once per tick period
//! - **`TimerEngine`**: Start/stop/reset state machine tracking elapsed and remaining time
//! - **`InputAggregator`**: Merges button edges and remote text commands into one event per tick
//! - **`digits`**: Bit-packed digit masks and frame rendering for the LED chain
//! - **`hue`**: Countdown gradient, count-up color and idle breathing hue
//! - **`TimerConfig`**: Validated colors and timing constants
//! - **`SegmentDisplay`**: Trait to implement for your LED strip
//! - **`RemoteChannel`**: Trait to implement for your serial/BLE transport
//! - **`TimeSource`**: Trait to implement for your timing system
//!
//! Frames are `Hsv<f32>` cells; use [`colors::to_srgb`] when your driver wants RGB.

// Re-export Hsv from palette for user convenience
pub use palette::Hsv;

pub mod colors;
pub mod config;
pub mod digits;
pub mod engine;
pub mod hue;
pub mod input;
pub mod time;
pub mod timer;
pub mod types;

pub use config::{ConfigBuilder, ConfigError, TimerConfig};
pub use digits::{CELLS_PER_DIGIT, DIGIT_COUNT, DIGIT_MASKS, TOTAL_CELLS};
pub use engine::{EngineStep, TimerEngine};
pub use input::{ButtonEdges, InputAggregator, RemoteChannel, TickInput};
pub use time::{TimeDuration, TimeInstant, TimeSource};
pub use timer::{SegmentDisplay, SegmentTimer, TickReport};
pub use types::{CountMode, EngineState, Event, MINUTE_MS, Transition};

/// Default capacity of the remote command buffer.
pub const DEFAULT_COMMAND_CAPACITY: usize = 32;

/// Timer with the default remote command buffer.
pub type SegmentTimer32<'t, I, T, D> = SegmentTimer<'t, I, T, D, DEFAULT_COMMAND_CAPACITY>;
