#![no_std]
#![no_main]

use cortex_m_rt::entry;
use panic_halt as _;
use segment_timer::{
    ButtonEdges, Hsv, RemoteChannel, SegmentDisplay, SegmentTimer32, TOTAL_CELLS, TimeDuration,
    TimeInstant, TimeSource, TimerConfig,
};

// ============================================================================
// Minimal Time Types
// ============================================================================

/// Minimal 32-bit millisecond duration
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Duration32(u32);

impl TimeDuration for Duration32 {
    fn as_millis(&self) -> u64 {
        self.0 as u64
    }

    fn from_millis(millis: u64) -> Self {
        Duration32(millis as u32)
    }
}

/// Minimal 32-bit millisecond instant
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Instant32(u32);

impl TimeInstant for Instant32 {
    type Duration = Duration32;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        Duration32(self.0.saturating_sub(earlier.0))
    }
}

// ============================================================================
// Minimal Peripherals
// ============================================================================

/// Zero-size display implementation for measuring library overhead
pub struct MinimalDisplay;

impl SegmentDisplay for MinimalDisplay {
    fn show(&mut self, cells: &[Hsv; TOTAL_CELLS]) {
        core::hint::black_box(cells);
    }
}

/// Remote link that never receives anything
pub struct MinimalRemote;

impl RemoteChannel for MinimalRemote {
    fn read(&mut self, buf: &mut [u8]) -> usize {
        core::hint::black_box(buf);
        0
    }

    fn write(&mut self, bytes: &[u8]) {
        core::hint::black_box(bytes);
    }
}

pub struct MinimalTimeSource;

impl TimeSource<Instant32> for MinimalTimeSource {
    fn now(&self) -> Instant32 {
        Instant32(core::hint::black_box(0))
    }
}

// ============================================================================
// Timer Usage
// ============================================================================

// This function uses the library to prevent optimizer from removing code
#[inline(never)]
fn run_ticks() {
    let time_source = MinimalTimeSource;
    let mut remote = MinimalRemote;
    let mut timer = SegmentTimer32::new(MinimalDisplay, &time_source, TimerConfig::default());

    let edges = [
        ButtonEdges::INCREASE,
        ButtonEdges::DECREASE,
        ButtonEdges::TOGGLE,
        ButtonEdges::NONE,
    ];
    for buttons in edges {
        let report = timer.tick(core::hint::black_box(buttons), &mut remote);
        core::hint::black_box(report);
    }

    core::hint::black_box(timer);
}

#[entry]
fn main() -> ! {
    // Call test function to ensure all code is included
    run_ticks();

    // Halt - this is a size analysis binary, not meant to run
    loop {
        cortex_m::asm::nop();
    }
}
