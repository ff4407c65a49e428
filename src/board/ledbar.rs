//! LED-bar slave driver.
//!
//! The bar lives on a second microcontroller that accepts one mask byte
//! per I²C write (bit 7 = leftmost segment). The transport here is a
//! blocking synchronous transfer, so no busy flag is needed - the write
//! returns once the byte is on the wire.
//!
//! Generic over the I²C implementation so callers pass in their HAL's
//! I²C peripheral.

use crate::config::LEDBAR_I2C_ADDR;
use crate::error::Error;
use crate::hal::LedBar;

pub struct I2cLedBar<I2C> {
    i2c: I2C,
}

impl<I2C> I2cLedBar<I2C> {
    pub fn new(i2c: I2C) -> Self {
        I2cLedBar { i2c }
    }
}

impl<I2C> LedBar for I2cLedBar<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    fn write_mask(&mut self, mask: u8) -> Result<(), Error> {
        self.i2c
            .write(LEDBAR_I2C_ADDR, &[mask])
            .map_err(|_| Error::LedBar)
    }
}
