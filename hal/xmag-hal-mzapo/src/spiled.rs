//! Knobs and LED line

use xmag_hal::{InputRegister, LedLine};

use crate::phys::{MapError, PhysMapping};
use crate::regs::{
    SPILED_REG_BASE_PHYS, SPILED_REG_KNOBS_8BIT_O, SPILED_REG_LED_LINE_O, SPILED_REG_SIZE,
};

/// SPILED peripheral: three rotary knobs with push buttons and 32 LEDs
pub struct SpiLed {
    regs: PhysMapping,
}

impl SpiLed {
    /// Map the peripheral at its fixed physical address
    pub fn open() -> Result<Self, MapError> {
        PhysMapping::map(SPILED_REG_BASE_PHYS, SPILED_REG_SIZE).map(Self::new)
    }

    /// Drive an already mapped register window
    pub fn new(regs: PhysMapping) -> Self {
        Self { regs }
    }
}

impl InputRegister for SpiLed {
    fn read_input(&mut self) -> u32 {
        self.regs.read_u32(SPILED_REG_KNOBS_8BIT_O)
    }
}

impl LedLine for SpiLed {
    fn write_led(&mut self, mask: u32) {
        self.regs.write_u32(SPILED_REG_LED_LINE_O, mask);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::phys::tests::scratch_mapping;

    #[test]
    fn test_led_line_register() {
        let mut spiled = SpiLed::new(scratch_mapping("spiled-led"));
        spiled.write_led(0x0000_00ff);
        assert_eq!(spiled.regs.read_u32(SPILED_REG_LED_LINE_O), 0xff);

        spiled.clear_leds();
        assert_eq!(spiled.regs.read_u32(SPILED_REG_LED_LINE_O), 0);
    }

    #[test]
    fn test_knobs_register() {
        let mut spiled = SpiLed::new(scratch_mapping("spiled-knobs"));
        spiled.regs.write_u32(SPILED_REG_KNOBS_8BIT_O, 0x0201_0080);
        assert_eq!(spiled.read_input(), 0x0201_0080);
    }
}
