//! Seven segment digit encoding for addressable LED chains.
//!
//! # Wiring topology
//!
//! Each of the four slots is a block of [`CELLS_PER_DIGIT`] consecutive cells
//! in the LED chain, slot 0 (tens of minutes) first. Within a slot every
//! segment is two cells long and the segments are chained in the order
//!
//! ```text
//!      a            cells 0-1   a  top
//!    f   b          cells 2-3   b  upper right
//!      g            cells 4-5   c  lower right
//!    e   c          cells 6-7   d  bottom
//!      d            cells 8-9   e  lower left
//!                   cells 10-11 f  upper left
//!                   cells 12-13 g  middle
//! ```
//!
//! Bit `i` of a [`DIGIT_MASKS`] entry lights cell `i` of the slot. Rewire the
//! strip and this table is the only thing that has to change.

use palette::Hsv;

/// Number of digit slots on the display.
pub const DIGIT_COUNT: usize = 4;

/// Cells in one digit slot (7 segments, 2 cells each).
pub const CELLS_PER_DIGIT: usize = 14;

/// Cells on the whole display.
pub const TOTAL_CELLS: usize = DIGIT_COUNT * CELLS_PER_DIGIT;

/// Lit-cell masks indexed by digit value.
pub const DIGIT_MASKS: [u16; 10] = [
    0b00_1111_1111_1111, // 0: a b c d e f
    0b00_0000_0011_1100, // 1: b c
    0b11_0011_1100_1111, // 2: a b d e g
    0b11_0000_1111_1111, // 3: a b c d g
    0b11_1100_0011_1100, // 4: b c f g
    0b11_1100_1111_0011, // 5: a c d f g
    0b11_1111_1111_0011, // 6: a c d e f g
    0b00_0000_0011_1111, // 7: a b c
    0b11_1111_1111_1111, // 8: all
    0b11_1100_1111_1111, // 9: a b c d f g
];

/// Mask for a digit value; values above 9 map to a dark slot.
#[inline]
pub fn mask_for(value: u8) -> u16 {
    DIGIT_MASKS.get(value as usize).copied().unwrap_or(0)
}

/// Colors for one slot: lit cells at the base brightness, others dark.
///
/// Hue and saturation are kept from `base` for every cell.
pub fn encode_digit(value: u8, base: Hsv) -> [Hsv; CELLS_PER_DIGIT] {
    let mask = mask_for(value);
    let dark = Hsv::new(base.hue, base.saturation, 0.0);

    core::array::from_fn(|cell| if mask & (1 << cell) != 0 { base } else { dark })
}

/// Writes one slot into a full display frame.
///
/// Slots beyond [`DIGIT_COUNT`] are ignored.
pub fn render_slot(frame: &mut [Hsv; TOTAL_CELLS], slot: usize, value: u8, base: Hsv) {
    if slot >= DIGIT_COUNT {
        return;
    }

    let start = slot * CELLS_PER_DIGIT;
    frame[start..start + CELLS_PER_DIGIT].copy_from_slice(&encode_digit(value, base));
}

/// Renders four digits left to right into a frame.
pub fn render(frame: &mut [Hsv; TOTAL_CELLS], digits: [u8; DIGIT_COUNT], base: Hsv) {
    for (slot, value) in digits.into_iter().enumerate() {
        render_slot(frame, slot, value, base);
    }
}

/// Splits milliseconds into `[min tens, min units, sec tens, sec units]`.
///
/// Time is floored to whole seconds; minutes wrap past 99.
pub fn split_time(millis: u64) -> [u8; DIGIT_COUNT] {
    let total_seconds = millis / 1000;
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;

    [
        ((minutes / 10) % 10) as u8,
        (minutes % 10) as u8,
        (seconds / 10) as u8,
        (seconds % 10) as u8,
    ]
}
