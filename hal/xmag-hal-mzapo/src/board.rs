//! Whole-board handle

use tracing::info;
use xmag_hal::{DisplayBus, InputRegister, LedLine};

use crate::parlcd::ParLcd;
use crate::phys::MapError;
use crate::spiled::SpiLed;

/// Every peripheral the magnifier drives
///
/// Implements [`xmag_hal::Board`] through the blanket impl by forwarding
/// each capability to the peripheral that owns it.
pub struct MzApoBoard {
    pub spiled: SpiLed,
    pub lcd: ParLcd,
}

impl MzApoBoard {
    /// Map both register blocks; fails if either mapping fails
    pub fn open() -> Result<Self, MapError> {
        let spiled = SpiLed::open()?;
        let lcd = ParLcd::open()?;
        info!("MZ_APO peripherals mapped");
        Ok(Self { spiled, lcd })
    }
}

impl InputRegister for MzApoBoard {
    fn read_input(&mut self) -> u32 {
        self.spiled.read_input()
    }
}

impl LedLine for MzApoBoard {
    fn write_led(&mut self, mask: u32) {
        self.spiled.write_led(mask);
    }
}

impl DisplayBus for MzApoBoard {
    fn begin_frame(&mut self) {
        self.lcd.begin_frame();
    }

    fn write_pixel(&mut self, value: u16) {
        self.lcd.write_pixel(value);
    }

    fn write_pixels(&mut self, values: &[u16]) {
        self.lcd.write_pixels(values);
    }
}
