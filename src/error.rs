//! Unified error type for bscalc.
//!
//! We avoid `alloc` - all variants are fieldless. The core itself never
//! fails (bad inputs clamp or substitute), so these only ever report
//! peripheral transport failures, and the run loop logs them and keeps
//! serving input.

/// Top-level error type used across the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// I²C transaction to the character LCD failed.
    Display,

    /// I²C transaction to the LED-bar slave failed.
    LedBar,
}
