//! Host-testable core of bscalc.
//!
//! Everything with real logic in it - quadrature decoding, the parameter
//! store, Black-Scholes pricing, fixed-point formatting, the bar-graph
//! pattern engine and the UI state machine - lives here and compiles for
//! the host (no embedded hardware required).
//!
//! Usage: `cargo test --lib`
//!
//! The embedded binary (`main.rs`, feature `embedded`) drives [`App`]
//! from an Embassy run loop on the nRF52840; the `board` module holds
//! the LCD / LED bar / keypad / encoder drivers behind the [`hal`]
//! traits the core is written against.

#![cfg_attr(not(test), no_std)]

pub mod app;
pub mod bar;
pub mod config;
pub mod encoder;
pub mod error;
pub mod format;
pub mod hal;
pub mod keys;
pub mod params;
pub mod pricing;
pub mod ui;

#[cfg(feature = "embedded")]
pub mod board;

pub use app::App;
pub use error::Error;
pub use keys::Key;

// ═══════════════════════════════════════════════════════════════════════════
// Unit Tests
// ═══════════════════════════════════════════════════════════════════════════
