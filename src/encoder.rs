//! Rotary encoder quadrature decoding.
//!
//! The two phase lines are sampled on every GPIO edge; each observed
//! transition is classified by the 4-bit index `(previous << 2) | current`.
//! Four of the sixteen indices are clockwise steps, four are
//! counter-clockwise, and the remaining eight (no-change and double-edge
//! glitches) are ignored.
//!
//! The accumulated delta lives in a [`QuadCounter`] shared between the
//! edge-interrupt context (producer) and the main poll loop (consumer);
//! atomics make the increment and the drain-and-reset indivisible without
//! a critical section.

use core::sync::atomic::{AtomicI32, Ordering};

/// Rotation direction of a single valid quadrature step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    Clockwise,
    CounterClockwise,
}

/// Classify one phase transition.
///
/// Returns `None` for no-change and invalid double-edge transitions.
pub fn classify(previous: u8, current: u8) -> Option<Direction> {
    match ((previous & 0b11) << 2) | (current & 0b11) {
        0b0001 | 0b0111 | 0b1110 | 0b1000 => Some(Direction::Clockwise),
        0b0010 | 0b1011 | 0b1101 | 0b0100 => Some(Direction::CounterClockwise),
        _ => None,
    }
}

/// Net step counter shared between the edge handler and the poll loop.
///
/// This is the only cross-context mutable state in the core; `Relaxed`
/// suffices because no other data is published through it.
pub struct QuadCounter(AtomicI32);

impl QuadCounter {
    pub const fn new() -> Self {
        QuadCounter(AtomicI32::new(0))
    }

    /// Add one step (producer side, interrupt context).
    pub fn add(&self, delta: i32) {
        self.0.fetch_add(delta, Ordering::Relaxed);
    }

    /// Return the net accumulated delta and reset it to zero
    /// (consumer side, once per poll).
    pub fn drain(&self) -> i32 {
        self.0.swap(0, Ordering::Relaxed)
    }
}

impl Default for QuadCounter {
    fn default() -> Self {
        Self::new()
    }
}

/// Phase tracker owned by whatever context services the encoder edges.
pub struct QuadDecoder {
    last_phase: u8,
}

impl QuadDecoder {
    /// `initial_phase` is the 2-bit line state read at setup time.
    pub fn new(initial_phase: u8) -> Self {
        QuadDecoder {
            last_phase: initial_phase & 0b11,
        }
    }

    /// Feed one observed 2-bit phase; valid steps bump `counter`.
    ///
    /// The stored phase is updated regardless of classification, so a
    /// glitch costs at most the one step it garbled.
    pub fn on_edge(&mut self, phase: u8, counter: &QuadCounter) {
        match classify(self.last_phase, phase) {
            Some(Direction::Clockwise) => counter.add(1),
            Some(Direction::CounterClockwise) => counter.add(-1),
            None => {}
        }
        self.last_phase = phase & 0b11;
    }

    /// Last phase seen (for the board layer's edge-polarity bookkeeping).
    pub fn phase(&self) -> u8 {
        self.last_phase
    }
}
