//! Black-Scholes call pricing.
//!
//! Single-precision throughout; transcendentals come from `libm` so the
//! engine works under `no_std`. The normal CDF goes through an
//! Abramowitz & Stegun 7.1.26 approximation of `erf` (max error ~1.5e-7,
//! well inside the display's two decimals).

use crate::params::MarketSnapshot;

const FRAC_1_SQRT_2: f32 = core::f32::consts::FRAC_1_SQRT_2;

/// Error function, A&S 7.1.26 rational approximation.
pub fn erf(x: f32) -> f32 {
    const A1: f32 = 0.254_829_592;
    const A2: f32 = -0.284_496_736;
    const A3: f32 = 1.421_413_741;
    const A4: f32 = -1.453_152_027;
    const A5: f32 = 1.061_405_429;
    const P: f32 = 0.327_591_1;

    let sign = if x < 0.0 { -1.0 } else { 1.0 };
    let x = if x < 0.0 { -x } else { x };

    let t = 1.0 / (1.0 + P * x);
    let poly = ((((A5 * t + A4) * t) + A3) * t + A2) * t + A1;
    let y = 1.0 - poly * t * libm::expf(-x * x);

    sign * y
}

/// Standard normal CDF: `0.5 * (1 + erf(x / sqrt(2)))`.
pub fn norm_cdf(x: f32) -> f32 {
    0.5 * (1.0 + erf(x * FRAC_1_SQRT_2))
}

/// European call price.
///
/// Degenerate inputs never trap; they fall back to the limit price:
/// zero volatility or zero time collapses to the intrinsic value
/// `max(S-K, 0)`, a worthless underlying prices at 0, and a zero strike
/// makes the call worth the underlying outright.
pub fn black_scholes_call(s: f32, k: f32, t: f32, r: f32, sigma: f32) -> f32 {
    if s <= 0.0 {
        return 0.0;
    }
    if k <= 0.0 {
        return s;
    }
    if t <= 0.0 || sigma <= 0.0 {
        let intrinsic = s - k;
        return if intrinsic > 0.0 { intrinsic } else { 0.0 };
    }

    let sqrt_t = libm::sqrtf(t);
    let d1 = (libm::logf(s / k) + (r + 0.5 * sigma * sigma) * t) / (sigma * sqrt_t);
    let d2 = d1 - sigma * sqrt_t;

    s * norm_cdf(d1) - k * libm::expf(-r * t) * norm_cdf(d2)
}

/// Percent difference of the market quote against the model price,
/// `(market - price) / price * 100`; defined as 0 when the price is
/// exactly 0.
pub fn percent_diff(market: f32, price: f32) -> f32 {
    if price == 0.0 {
        0.0
    } else {
        (market - price) / price * 100.0
    }
}

/// One pricing pass over a parameter snapshot.
///
/// Recomputed fresh on every entry to the result screen, never cached.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricingResult {
    pub price: f32,
    pub market: f32,
    pub percent_diff: f32,
}

impl PricingResult {
    pub fn compute(snap: &MarketSnapshot) -> Self {
        let price = black_scholes_call(
            snap.spot,
            snap.strike,
            snap.time_to_expiry,
            snap.rate,
            snap.volatility,
        );
        PricingResult {
            price,
            market: snap.market,
            percent_diff: percent_diff(snap.market, price),
        }
    }
}
