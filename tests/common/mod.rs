//! Shared test infrastructure for segment-timer integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use segment_timer::{
    CELLS_PER_DIGIT, DIGIT_COUNT, Hsv, RemoteChannel, SegmentDisplay, TOTAL_CELLS, TimeDuration,
    TimeInstant, TimeSource,
};

// ============================================================================
// Mock Time Types
// ============================================================================

/// Mock duration type for testing (wraps milliseconds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestDuration(pub u64);

impl TimeDuration for TestDuration {
    fn as_millis(&self) -> u64 {
        self.0
    }

    fn from_millis(millis: u64) -> Self {
        TestDuration(millis)
    }
}

/// Mock instant type for testing
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestInstant(pub u64);

impl TimeInstant for TestInstant {
    type Duration = TestDuration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        TestDuration(self.0 - earlier.0)
    }
}

// ============================================================================
// Mock Time Source
// ============================================================================

/// Mock time source with controllable time advancement
pub struct MockTimeSource {
    current_time: core::cell::Cell<TestInstant>,
}

impl MockTimeSource {
    pub fn new() -> Self {
        Self {
            current_time: core::cell::Cell::new(TestInstant(0)),
        }
    }

    /// Advance time by the given number of milliseconds
    pub fn advance(&self, millis: u64) {
        let current = self.current_time.get();
        self.current_time.set(TestInstant(current.0 + millis));
    }

    pub fn set_time(&self, time: TestInstant) {
        self.current_time.set(time);
    }
}

impl TimeSource<TestInstant> for MockTimeSource {
    fn now(&self) -> TestInstant {
        self.current_time.get()
    }
}

// ============================================================================
// Mock Display
// ============================================================================

/// Mock display that keeps the last frame and counts flushes
pub struct MockDisplay {
    last_frame: [Hsv; TOTAL_CELLS],
    frames_shown: usize,
}

impl MockDisplay {
    pub fn new() -> Self {
        Self {
            last_frame: [Hsv::new(0.0, 0.0, 0.0); TOTAL_CELLS],
            frames_shown: 0,
        }
    }

    pub fn last_frame(&self) -> &[Hsv; TOTAL_CELLS] {
        &self.last_frame
    }

    pub fn frames_shown(&self) -> usize {
        self.frames_shown
    }
}

impl SegmentDisplay for MockDisplay {
    fn show(&mut self, cells: &[Hsv; TOTAL_CELLS]) {
        self.last_frame = *cells;
        self.frames_shown += 1;
    }
}

// ============================================================================
// Mock Remote Channel
// ============================================================================

/// Mock remote link delivering queued bytes in fixed-size chunks and
/// recording the echo
pub struct MockRemote {
    incoming: heapless::Vec<u8, 256>,
    cursor: usize,
    chunk_size: usize,
    echoed: heapless::Vec<u8, 256>,
}

impl MockRemote {
    pub fn new() -> Self {
        Self::with_chunk_size(usize::MAX)
    }

    /// Each read returns at most `chunk_size` bytes
    pub fn with_chunk_size(chunk_size: usize) -> Self {
        Self {
            incoming: heapless::Vec::new(),
            cursor: 0,
            chunk_size,
            echoed: heapless::Vec::new(),
        }
    }

    /// Queue bytes as if the remote side had sent them
    pub fn send(&mut self, bytes: &[u8]) {
        self.incoming.extend_from_slice(bytes).unwrap();
    }

    pub fn echoed(&self) -> &[u8] {
        &self.echoed
    }

    pub fn has_pending(&self) -> bool {
        self.cursor < self.incoming.len()
    }
}

impl RemoteChannel for MockRemote {
    fn read(&mut self, buf: &mut [u8]) -> usize {
        let remaining = &self.incoming[self.cursor..];
        let count = remaining.len().min(buf.len()).min(self.chunk_size);
        buf[..count].copy_from_slice(&remaining[..count]);
        self.cursor += count;
        count
    }

    fn write(&mut self, bytes: &[u8]) {
        let _ = self.echoed.extend_from_slice(bytes);
    }
}

/// Remote link that never has data
pub struct SilentRemote;

impl RemoteChannel for SilentRemote {
    fn read(&mut self, _buf: &mut [u8]) -> usize {
        0
    }

    fn write(&mut self, _bytes: &[u8]) {}
}

// ============================================================================
// Test Helper Functions
// ============================================================================

/// Standard seven segment patterns, bit 0 = a ... bit 6 = g
pub const SEGMENT_PATTERNS: [u8; 10] = [0x3F, 0x06, 0x5B, 0x4F, 0x66, 0x6D, 0x7D, 0x07, 0x7F, 0x6F];

/// Reads the segments of one slot back out of a frame.
///
/// A segment counts as lit only when both of its cells are lit.
pub fn decode_slot(frame: &[Hsv; TOTAL_CELLS], slot: usize) -> u8 {
    assert!(slot < DIGIT_COUNT);
    let cells = &frame[slot * CELLS_PER_DIGIT..(slot + 1) * CELLS_PER_DIGIT];

    let mut segments = 0u8;
    for segment in 0..7 {
        let first = cells[2 * segment].value > 0.0;
        let second = cells[2 * segment + 1].value > 0.0;
        assert_eq!(first, second, "segment {} is half lit", segment);
        if first {
            segments |= 1 << segment;
        }
    }
    segments
}

/// Reads the digit values shown on the display
pub fn decode_digits(frame: &[Hsv; TOTAL_CELLS]) -> [Option<u8>; DIGIT_COUNT] {
    core::array::from_fn(|slot| {
        let segments = decode_slot(frame, slot);
        SEGMENT_PATTERNS
            .iter()
            .position(|&pattern| pattern == segments)
            .map(|digit| digit as u8)
    })
}

/// Compare two hues (degrees) with floating-point tolerance
pub fn hues_equal(a: f32, b: f32) -> bool {
    const EPSILON: f32 = 0.01;
    (a - b).abs() < EPSILON
}
