//! Screen rendering against the [`Lcd`] sink.
//!
//! Every line is padded to the full 16 columns before it goes out: the
//! display has no partial-line-clear, so the padding is what erases
//! stale characters on in-place rewrites (value line, step indicator).

use heapless::String;

use crate::config::{LCD_COLS, PERCENT_DECIMALS, STEP_LABELS, VALUE_DECIMALS};
use crate::error::Error;
use crate::format::{pad_to, push_fixed, push_percent};
use crate::hal::Lcd;
use crate::params::Parameter;
use crate::pricing::PricingResult;

type Line = String<LCD_COLS>;

/// Main menu: one slot per parameter digit plus the `#` shortcut.
pub fn draw_menu<L: Lcd>(lcd: &mut L) -> Result<(), Error> {
    lcd.clear()?;
    lcd.set_cursor(0, 0)?;
    lcd.write_str("1:S 2:K 3:T 6:M")?;
    lcd.set_cursor(1, 0)?;
    lcd.write_str("4:V 5:r #:Go")?;
    Ok(())
}

/// Edit-screen prompt; the value line below it follows separately.
pub fn draw_prompt<L: Lcd>(lcd: &mut L, param: Parameter) -> Result<(), Error> {
    lcd.clear()?;
    lcd.set_cursor(0, 0)?;
    lcd.write_str(param.prompt())
}

/// In-place refresh of the edit value and step indicator (row 1).
///
/// Value on the left, step label right-aligned, spaces in between.
pub fn draw_value_line<L: Lcd>(lcd: &mut L, value: f32, step_idx: usize) -> Result<(), Error> {
    let label = STEP_LABELS[step_idx];

    let mut line = Line::new();
    push_fixed(&mut line, value, VALUE_DECIMALS);
    pad_to(&mut line, LCD_COLS - label.len());
    let _ = line.push_str(label);
    pad_to(&mut line, LCD_COLS);

    lcd.set_cursor(1, 0)?;
    lcd.write_str(&line)
}

/// Result screen: model price and market quote on row 0, signed percent
/// difference on row 1.
pub fn draw_result<L: Lcd>(lcd: &mut L, result: &PricingResult) -> Result<(), Error> {
    let mut top = Line::new();
    let _ = top.push_str("C=");
    push_fixed(&mut top, result.price, VALUE_DECIMALS);
    let _ = top.push_str(" M=");
    push_fixed(&mut top, result.market, VALUE_DECIMALS);
    pad_to(&mut top, LCD_COLS);

    let mut bottom = Line::new();
    let _ = bottom.push_str("Diff ");
    push_percent(&mut bottom, result.percent_diff, PERCENT_DECIMALS);
    pad_to(&mut bottom, LCD_COLS);

    lcd.clear()?;
    lcd.set_cursor(0, 0)?;
    lcd.write_str(&top)?;
    lcd.set_cursor(1, 0)?;
    lcd.write_str(&bottom)
}
