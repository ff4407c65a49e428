//! 4×4 matrix keypad scanner.
//!
//! Rows are open-drain outputs driven low one at a time; columns are
//! inputs with pull-ups. A key is reported once per press: the scanner
//! remembers the last raw hit and stays silent until the key is released,
//! which also serves as the debounce (the poll cadence is well above the
//! bounce time). At most one key per poll - ghosting from multi-press
//! chords is not resolved, the first hit in scan order wins.

use embassy_nrf::gpio::{Input, Output};

use crate::hal::Keypad;
use crate::keys::Key;

/// Keypad legend in scan order (row-major).
const LAYOUT: [[u8; 4]; 4] = [
    [b'1', b'2', b'3', b'A'],
    [b'4', b'5', b'6', b'B'],
    [b'7', b'8', b'9', b'C'],
    [b'*', b'0', b'#', b'D'],
];

pub struct MatrixKeypad<'d> {
    rows: [Output<'d>; 4],
    cols: [Input<'d>; 4],
    held: Option<u8>,
}

impl<'d> MatrixKeypad<'d> {
    pub fn new(rows: [Output<'d>; 4], cols: [Input<'d>; 4]) -> Self {
        MatrixKeypad {
            rows,
            cols,
            held: None,
        }
    }

    /// One full matrix scan; returns the first pressed legend, if any.
    fn scan(&mut self) -> Option<u8> {
        let mut hit = None;
        for r in 0..4 {
            self.rows[r].set_low();
            cortex_m::asm::delay(64); // let the column lines settle
            for c in 0..4 {
                if self.cols[c].is_low() && hit.is_none() {
                    hit = Some(LAYOUT[r][c]);
                }
            }
            self.rows[r].set_high();
        }
        hit
    }
}

impl<'d> Keypad for MatrixKeypad<'d> {
    fn poll_key(&mut self) -> Option<Key> {
        let raw = self.scan();
        let event = match (raw, self.held) {
            // New press; sustained presses stay silent.
            (Some(k), None) => Key::from_ascii(k),
            _ => None,
        };
        self.held = raw;
        event
    }
}
