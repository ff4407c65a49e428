//! Logical keypad events.
//!
//! The matrix scan and debouncing live in the board layer; the core only
//! sees at most one [`Key`] per poll, with no auto-repeat.

/// A single logical key press from the 4×4 keypad.
///
/// Only the keys the UI reacts to get their own variant; the keypad's
/// `A`/`B`/`D` keys never reach the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Key {
    /// `0`..`9`, carried as the digit value.
    Digit(u8),
    /// `#` - "go": jump to the result screen.
    Hash,
    /// `*` - cycle the edit step size.
    Star,
    /// `C` - commit the in-progress edit.
    Confirm,
}

impl Key {
    /// Map a raw keypad legend character to a logical key.
    pub fn from_ascii(c: u8) -> Option<Key> {
        match c {
            b'0'..=b'9' => Some(Key::Digit(c - b'0')),
            b'#' => Some(Key::Hash),
            b'*' => Some(Key::Star),
            b'C' => Some(Key::Confirm),
            _ => None,
        }
    }
}
