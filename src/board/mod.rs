//! nRF52840 board support - drivers behind the [`crate::hal`] traits.
//!
//! ## Components
//!
//! - **Lcd**: HD44780 16×2 character LCD behind a PCF8574 I²C backpack
//! - **LedBar**: 8-segment bar on an I²C slave, one mask byte per write
//! - **Keypad**: 4×4 matrix scan, rows driven low one at a time
//! - **Encoder**: async task feeding the quadrature decoder from GPIO edges

pub mod encoder;
pub mod keypad;
pub mod lcd;
pub mod ledbar;
