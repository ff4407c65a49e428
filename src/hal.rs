//! Peripheral sink traits the core is written against.
//!
//! The board layer (and the host-test mocks) implement these; the core
//! never assumes anything about the transport behind them.

use crate::error::Error;
use crate::keys::Key;

/// Two-row character display.
///
/// There is no partial-line-clear primitive; callers pad strings with
/// trailing spaces to erase stale characters.
pub trait Lcd {
    fn clear(&mut self) -> Result<(), Error>;
    fn set_cursor(&mut self, row: u8, col: u8) -> Result<(), Error>;
    fn write_str(&mut self, s: &str) -> Result<(), Error>;
}

/// Eight-segment addressable LED bar.
///
/// Bit 7 of the mask is the leftmost segment. The write is modeled as a
/// blocking synchronous call; a driver over an asynchronous transport must
/// guard its single in-flight transfer itself.
pub trait LedBar {
    fn write_mask(&mut self, mask: u8) -> Result<(), Error>;
}

/// Debounced keypad scanner.
pub trait Keypad {
    /// At most one logical key per call, or `None`. No auto-repeat.
    fn poll_key(&mut self) -> Option<Key>;
}
