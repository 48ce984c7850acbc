//! Button and remote command aggregation.
//!
//! Merges the three debounced buttons and the newline-delimited remote text
//! protocol into at most one [`Event`] per tick, plus the latched remote
//! duration that the engine re-applies while idle.
//!
//! # Remote protocol
//!
//! ```text
//! s\n     start/stop toggle, acted on once
//! 5\n     duration of five minutes, re-applied every idle tick
//! \n      clears the latched duration
//! ```
//!
//! Anything that is not `s` is parsed as whole minutes; text that does not
//! parse as a non-negative integer counts as zero. `\r` is ignored.
//!
//! Each tick acts on at most one message. Bytes after the first delimiter are
//! kept for later ticks, so the outcome does not depend on how the transport
//! groups bytes.

use crate::types::Event;
use heapless::{Deque, Vec};

/// Message delimiter of the remote protocol.
pub const DELIMITER: u8 = b'\n';

/// Body of the remote toggle command.
pub const TOGGLE_COMMAND: &[u8] = b"s";

/// Most bytes pulled from the remote channel in one tick.
pub const READ_CHUNK: usize = 16;

/// Byte-stream transport of the remote command channel.
///
/// Implement this for a UART, a BLE serial service or a USB CDC endpoint.
pub trait RemoteChannel {
    /// Copies available bytes into `buf` without blocking and returns how
    /// many were written. Returns 0 when nothing is pending.
    fn read(&mut self, buf: &mut [u8]) -> usize;

    /// Sends bytes back to the remote side. Best effort.
    fn write(&mut self, bytes: &[u8]);
}

/// Press edges sampled from the debounced buttons during one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonEdges {
    pub toggle: bool,
    pub decrease: bool,
    pub increase: bool,
}

impl ButtonEdges {
    /// No button pressed.
    pub const NONE: Self = Self {
        toggle: false,
        decrease: false,
        increase: false,
    };

    /// Only the start/stop button pressed.
    pub const TOGGLE: Self = Self {
        toggle: true,
        ..Self::NONE
    };

    /// Only the decrease button pressed.
    pub const DECREASE: Self = Self {
        decrease: true,
        ..Self::NONE
    };

    /// Only the increase button pressed.
    pub const INCREASE: Self = Self {
        increase: true,
        ..Self::NONE
    };
}

/// Aggregated input for one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TickInput {
    /// First qualifying event of the tick.
    pub event: Option<Event>,

    /// Latched remote duration in minutes, if a numeric command is current.
    pub remote_minutes: Option<u32>,
}

/// Parses a remote command body as whole minutes, substituting zero on any
/// failure.
pub fn parse_minutes(body: &[u8]) -> u32 {
    core::str::from_utf8(body)
        .ok()
        .and_then(|text| text.trim().parse::<u32>().ok())
        .unwrap_or(0)
}

/// Stateful merger of button edges and remote commands.
///
/// `N` is the capacity of the pending remote command buffer.
#[derive(Debug, Clone)]
pub struct InputAggregator<const N: usize> {
    unread: Deque<u8, READ_CHUNK>,
    pending: Vec<u8, N>,
    overflowed: bool,
    latched_minutes: Option<u32>,
    toggle_requested: bool,
}

impl<const N: usize> InputAggregator<N> {
    /// Creates an aggregator with an empty command buffer.
    pub fn new() -> Self {
        Self {
            unread: Deque::new(),
            pending: Vec::new(),
            overflowed: false,
            latched_minutes: None,
            toggle_requested: false,
        }
    }

    /// Samples this tick's input.
    ///
    /// Finishes at most one remote message: bytes left over from an earlier
    /// read come first, and the channel is read once (up to [`READ_CHUNK`]
    /// bytes, all echoed) only when they hold no complete message. Then picks
    /// one event with priority button toggle, remote toggle, decrease,
    /// increase. A remote toggle that loses to another event is discarded.
    pub fn poll<R: RemoteChannel>(&mut self, buttons: ButtonEdges, remote: &mut R) -> TickInput {
        if !self.feed_unread() {
            let mut chunk = [0u8; READ_CHUNK];
            let count = remote.read(&mut chunk).min(READ_CHUNK);
            let bytes = &chunk[..count];
            remote.write(bytes);

            // `unread` was fully drained above, so the chunk always fits.
            for &byte in bytes {
                if self.unread.push_back(byte).is_err() {
                    break;
                }
            }
            self.feed_unread();
        }

        let remote_toggle = core::mem::take(&mut self.toggle_requested);

        let event = if buttons.toggle || remote_toggle {
            Some(Event::Toggle)
        } else if buttons.decrease {
            Some(Event::Decrease)
        } else if buttons.increase {
            Some(Event::Increase)
        } else {
            None
        };

        TickInput {
            event,
            remote_minutes: self.latched_minutes,
        }
    }

    /// Feeds unread bytes until one message completes. Returns `true` if one
    /// did.
    fn feed_unread(&mut self) -> bool {
        while let Some(byte) = self.unread.pop_front() {
            if self.feed(byte) {
                return true;
            }
        }
        false
    }

    /// Feeds one raw remote byte. Returns `true` when it completed a message.
    pub fn feed(&mut self, byte: u8) -> bool {
        match byte {
            DELIMITER => {
                self.latch();
                return true;
            }
            b'\r' => {}
            _ => {
                if self.pending.push(byte).is_err() && !self.overflowed {
                    self.overflowed = true;
                    #[cfg(feature = "defmt")]
                    defmt::warn!("remote command longer than {} bytes, dropping", N);
                }
            }
        }
        false
    }

    /// Interprets the pending buffer at a delimiter and clears it.
    fn latch(&mut self) {
        if self.overflowed {
            self.latched_minutes = Some(0);
        } else if self.pending.as_slice() == TOGGLE_COMMAND {
            self.toggle_requested = true;
            self.latched_minutes = None;
        } else if self.pending.is_empty() {
            self.latched_minutes = None;
        } else {
            self.latched_minutes = Some(parse_minutes(&self.pending));
        }

        self.pending.clear();
        self.overflowed = false;
    }

    /// Bytes read from the channel but not yet interpreted.
    pub fn unread(&self) -> usize {
        self.unread.len()
    }

    /// Bytes received since the last delimiter.
    pub fn pending(&self) -> &[u8] {
        &self.pending
    }

    /// Minutes of the current numeric remote command.
    pub fn latched_minutes(&self) -> Option<u32> {
        self.latched_minutes
    }
}

impl<const N: usize> Default for InputAggregator<N> {
    fn default() -> Self {
        Self::new()
    }
}
