//! HD44780 character LCD behind a PCF8574 I²C backpack.
//!
//! The backpack wires the PCF8574 outputs as
//! `P7..P4 = D7..D4, P3 = backlight, P2 = EN, P1 = RW, P0 = RS`,
//! so every byte goes out as two strobed nibbles. Timing follows the
//! HD44780 datasheet; the long waits only happen during init and clear.
//!
//! Generic over the I²C implementation so callers pass in their HAL's
//! I²C peripheral.

use embassy_time::{block_for, Duration};

use crate::config::{LCD_I2C_ADDR, LCD_ROWS};
use crate::error::Error;
use crate::hal::Lcd;

const BACKLIGHT: u8 = 0b0000_1000;
const ENABLE: u8 = 0b0000_0100;
const RS_DATA: u8 = 0b0000_0001;

/// Row 1 starts at DDRAM address 0x40 on a 1602 panel.
const ROW_OFFSETS: [u8; LCD_ROWS] = [0x00, 0x40];

pub struct Hd44780<I2C> {
    i2c: I2C,
}

impl<I2C> Hd44780<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    /// Bring the panel up in 4-bit mode and clear it.
    pub fn new(i2c: I2C) -> Result<Self, Error> {
        let mut lcd = Hd44780 { i2c };

        // Power-on sequence: three 8-bit function-set strobes, then
        // switch to 4-bit mode (HD44780 datasheet, fig. 24).
        block_for(Duration::from_millis(50));
        for _ in 0..3 {
            lcd.strobe_nibble(0x30)?;
            block_for(Duration::from_millis(5));
        }
        lcd.strobe_nibble(0x20)?;

        lcd.command(0x28)?; // 4-bit, two lines, 5x8 font
        lcd.command(0x08)?; // display off
        lcd.command(0x01)?; // clear
        block_for(Duration::from_millis(2));
        lcd.command(0x06)?; // entry mode: increment, no shift
        lcd.command(0x0C)?; // display on, cursor off

        Ok(lcd)
    }

    fn strobe_nibble(&mut self, bits: u8) -> Result<(), Error> {
        let base = (bits & 0xF0) | BACKLIGHT | (bits & RS_DATA);
        for byte in [base | ENABLE, base] {
            self.i2c
                .write(LCD_I2C_ADDR, &[byte])
                .map_err(|_| Error::Display)?;
            block_for(Duration::from_micros(50));
        }
        Ok(())
    }

    fn write_byte(&mut self, byte: u8, rs: u8) -> Result<(), Error> {
        self.strobe_nibble((byte & 0xF0) | rs)?;
        self.strobe_nibble((byte << 4) | rs)
    }

    fn command(&mut self, cmd: u8) -> Result<(), Error> {
        self.write_byte(cmd, 0)
    }
}

impl<I2C> Lcd for Hd44780<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    fn clear(&mut self) -> Result<(), Error> {
        self.command(0x01)?;
        block_for(Duration::from_millis(2));
        Ok(())
    }

    fn set_cursor(&mut self, row: u8, col: u8) -> Result<(), Error> {
        let row = (row as usize).min(ROW_OFFSETS.len() - 1);
        self.command(0x80 | (ROW_OFFSETS[row] + col))
    }

    fn write_str(&mut self, s: &str) -> Result<(), Error> {
        for byte in s.bytes() {
            self.write_byte(byte, RS_DATA)?;
        }
        Ok(())
    }
}
