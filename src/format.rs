//! Fixed-point text formatting for the character LCD.
//!
//! Values are rendered with a fixed number of decimals via half-up
//! rounding at the last retained digit, never truncation. Output goes
//! into `heapless::String`s; a full string silently drops the overflow,
//! which on a 16-column display is the right failure mode.

use core::fmt::Write;
use heapless::String;

/// Append `value` with `decimals` places, rounding half-up on the
/// magnitude, with an explicit `-` for negative values.
pub fn push_fixed<const N: usize>(out: &mut String<N>, value: f32, decimals: u32) {
    if value.is_nan() {
        let _ = out.push_str("nan");
        return;
    }

    let mut v = value;
    if v < 0.0 {
        let _ = out.push('-');
        v = -v;
    }

    let scale = 10i64.pow(decimals);
    // Half-up: truncation after +0.5 on a non-negative magnitude.
    let scaled = (v as f64 * scale as f64 + 0.5) as i64;
    let int = scaled / scale;
    let frac = scaled % scale;

    if decimals == 0 {
        let _ = write!(out, "{}", int);
    } else {
        let _ = write!(out, "{}.{:0width$}", int, frac, width = decimals as usize);
    }
}

/// Append a signed percentage: explicit `+`/`-` prefix, magnitude at
/// `decimals` places, trailing `%`.
pub fn push_percent<const N: usize>(out: &mut String<N>, pct: f32, decimals: u32) {
    let sign = if pct < 0.0 { '-' } else { '+' };
    let _ = out.push(sign);
    let mag = if pct < 0.0 { -pct } else { pct };
    push_fixed(out, mag, decimals);
    let _ = out.push('%');
}

/// Pad with trailing spaces out to `width` columns, erasing stale
/// characters on in-place rewrites.
pub fn pad_to<const N: usize>(out: &mut String<N>, width: usize) {
    while out.len() < width {
        if out.push(' ').is_err() {
            break;
        }
    }
}
