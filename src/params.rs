//! Market parameter store.
//!
//! Holds the six committed values the pricing engine consumes. Values are
//! committed unconditionally - callers clamp to `[0, max_value]` before
//! committing (the UI does this on every encoder step).

use crate::config::{
    DEFAULT_MARKET_PRICE, DEFAULT_RISK_FREE_RATE, DEFAULT_STRIKE, DEFAULT_TIME_TO_EXPIRY,
    DEFAULT_UNDERLYING, DEFAULT_VOLATILITY, MAX_MARKET_PRICE, MAX_PRICE, MAX_RISK_FREE_RATE,
    MAX_TIME_TO_EXPIRY, MAX_VOLATILITY,
};

/// Identity of one editable market parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Parameter {
    UnderlyingPrice,
    StrikePrice,
    TimeToExpiry,
    Volatility,
    RiskFreeRate,
    MarketPrice,
}

impl Parameter {
    /// Menu digit (`1`..`6`) to parameter.
    pub fn from_digit(d: u8) -> Option<Parameter> {
        match d {
            1 => Some(Parameter::UnderlyingPrice),
            2 => Some(Parameter::StrikePrice),
            3 => Some(Parameter::TimeToExpiry),
            4 => Some(Parameter::Volatility),
            5 => Some(Parameter::RiskFreeRate),
            6 => Some(Parameter::MarketPrice),
            _ => None,
        }
    }

    fn index(self) -> usize {
        match self {
            Parameter::UnderlyingPrice => 0,
            Parameter::StrikePrice => 1,
            Parameter::TimeToExpiry => 2,
            Parameter::Volatility => 3,
            Parameter::RiskFreeRate => 4,
            Parameter::MarketPrice => 5,
        }
    }

    /// Fixed upper bound; the lower bound is always 0.
    pub fn max_value(self) -> f32 {
        match self {
            Parameter::UnderlyingPrice | Parameter::StrikePrice => MAX_PRICE,
            Parameter::TimeToExpiry => MAX_TIME_TO_EXPIRY,
            Parameter::Volatility => MAX_VOLATILITY,
            Parameter::RiskFreeRate => MAX_RISK_FREE_RATE,
            Parameter::MarketPrice => MAX_MARKET_PRICE,
        }
    }

    /// Edit-screen prompt line.
    pub fn prompt(self) -> &'static str {
        match self {
            Parameter::UnderlyingPrice => "Set Stock Price:",
            Parameter::StrikePrice => "Set Strike:",
            Parameter::TimeToExpiry => "Set Time (yr):",
            Parameter::Volatility => "Set Volatility:",
            Parameter::RiskFreeRate => "Set Risk-Free r:",
            Parameter::MarketPrice => "Set Mkt Price:",
        }
    }
}

/// All six committed values as the pricing engine wants them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarketSnapshot {
    pub spot: f32,
    pub strike: f32,
    pub time_to_expiry: f32,
    pub volatility: f32,
    pub rate: f32,
    pub market: f32,
}

/// Committed parameter values.
pub struct ParamStore {
    values: [f32; 6],
}

impl ParamStore {
    /// Store seeded with the power-on defaults.
    pub fn new() -> Self {
        ParamStore {
            values: [
                DEFAULT_UNDERLYING,
                DEFAULT_STRIKE,
                DEFAULT_TIME_TO_EXPIRY,
                DEFAULT_VOLATILITY,
                DEFAULT_RISK_FREE_RATE,
                DEFAULT_MARKET_PRICE,
            ],
        }
    }

    pub fn get(&self, param: Parameter) -> f32 {
        self.values[param.index()]
    }

    /// Upper bound for `param` (delegates to [`Parameter::max_value`]).
    pub fn range_for(&self, param: Parameter) -> f32 {
        param.max_value()
    }

    /// Overwrite the committed value unconditionally. No clamping here -
    /// callers clamp before commit.
    pub fn commit(&mut self, param: Parameter, value: f32) {
        self.values[param.index()] = value;
    }

    pub fn snapshot(&self) -> MarketSnapshot {
        MarketSnapshot {
            spot: self.values[0],
            strike: self.values[1],
            time_to_expiry: self.values[2],
            volatility: self.values[3],
            rate: self.values[4],
            market: self.values[5],
        }
    }
}

impl Default for ParamStore {
    fn default() -> Self {
        Self::new()
    }
}
