//! Color helpers for display drivers.
//!
//! The timer renders frames as `palette::Hsv` because hue, saturation and
//! brightness map directly onto the countdown gradient and on/off cells.
//! Drivers for RGB strips convert with [`to_srgb`] or [`frame_to_srgb`].

use palette::{FromColor, Hsv, Srgb};

/// Converts one cell color to RGB (0.0-1.0 components).
#[inline]
pub fn to_srgb(color: Hsv) -> Srgb {
    Srgb::from_color(color)
}

/// Converts a frame of cell colors to RGB, stopping at the shorter slice.
pub fn frame_to_srgb(frame: &[Hsv], out: &mut [Srgb]) {
    for (cell, rgb) in frame.iter().zip(out.iter_mut()) {
        *rgb = to_srgb(*cell);
    }
}
