//! Application-wide constants and compile-time configuration.
//!
//! Parameter defaults and ranges, the edit step table, display geometry
//! and hardware addresses live here so they can be tuned in one place.

// Market parameter defaults (power-on values)

/// Underlying (spot) price at power-on.
pub const DEFAULT_UNDERLYING: f32 = 100.0;

/// Strike price at power-on.
pub const DEFAULT_STRIKE: f32 = 100.0;

/// Time to expiry at power-on (years).
pub const DEFAULT_TIME_TO_EXPIRY: f32 = 0.5;

/// Volatility at power-on (annualised).
pub const DEFAULT_VOLATILITY: f32 = 0.2;

/// Risk-free rate at power-on.
pub const DEFAULT_RISK_FREE_RATE: f32 = 0.05;

/// Market quote at power-on (nothing observed yet).
pub const DEFAULT_MARKET_PRICE: f32 = 0.0;

// Parameter ranges (lower bound is always 0)

/// Upper bound for underlying and strike prices.
pub const MAX_PRICE: f32 = 1000.0;

/// Upper bound for time to expiry (years).
pub const MAX_TIME_TO_EXPIRY: f32 = 2.0;

/// Upper bound for volatility.
pub const MAX_VOLATILITY: f32 = 1.0;

/// Upper bound for the risk-free rate.
pub const MAX_RISK_FREE_RATE: f32 = 0.10;

/// Upper bound for the market quote.
pub const MAX_MARKET_PRICE: f32 = 100.0;

// Editing

/// Step sizes the `*` key cycles through, in cycle order.
pub const STEP_SIZES: [f32; 4] = [10.0, 1.0, 0.1, 0.01];

/// On-screen labels for the step sizes, right-aligned on the value line.
pub const STEP_LABELS: [&str; 4] = ["x10", "x1", "x0.1", "x0.01"];

/// Index into [`STEP_SIZES`] selected when an edit session opens (0.1).
pub const DEFAULT_STEP_INDEX: usize = 2;

// Display

/// Character LCD geometry (HD44780 1602).
pub const LCD_ROWS: usize = 2;
pub const LCD_COLS: usize = 16;

/// Decimal places shown for parameter values and prices.
pub const VALUE_DECIMALS: u32 = 2;

/// Decimal places shown for the percent difference.
pub const PERCENT_DECIMALS: u32 = 1;

// GPIO / I2C assignments (nRF52840-DK defaults)
//
// These are logical names; actual `embassy_nrf::peripherals::*` types are
// selected in `main.rs`.  Adjust for your custom PCB.
//
//   Encoder A      → P0.03
//   Encoder B      → P0.04
//   Keypad rows    → P0.11, P0.12, P0.13, P0.14  (driven low one at a time)
//   Keypad cols    → P0.15, P0.16, P0.17, P0.18  (inputs with pull-up)
//   I²C SDA        → P0.26
//   I²C SCL        → P0.27
//   Heartbeat LED  → P0.06

/// I²C address of the PCF8574 backpack behind the character LCD.
pub const LCD_I2C_ADDR: u8 = 0x27;

/// I²C address of the LED-bar slave (one mask byte per write).
pub const LEDBAR_I2C_ADDR: u8 = 0x3E;

/// Heartbeat LED toggle period (ms).
pub const HEARTBEAT_PERIOD_MS: u64 = 1000;

/// Main poll-loop cadence (ms); also the LED-bar animation cadence while
/// the result screen is showing.
pub const POLL_PERIOD_MS: u64 = 5;
