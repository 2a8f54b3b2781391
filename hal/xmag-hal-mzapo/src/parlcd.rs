//! Parallel LCD
//!
//! The FPGA exposes the HX8357 controller's 16-bit 8080 bus as two
//! registers: writing the command register strobes D/C low, writing the
//! data register strobes it high.

use embedded_hal::delay::DelayNs;
use tracing::debug;
use xmag_hal::DisplayBus;

use crate::phys::{MapError, PhysMapping};
use crate::regs::hx8357;
use crate::regs::{PARLCD_REG_BASE_PHYS, PARLCD_REG_CMD_O, PARLCD_REG_DATA_O, PARLCD_REG_SIZE};

/// Panel resolution in landscape orientation
pub const PANEL_WIDTH: u16 = 480;
pub const PANEL_HEIGHT: u16 = 320;

/// One step of the controller bring-up
enum InitStep {
    Cmd(u16),
    Data(u16),
    DelayMs(u32),
}

use InitStep::{Cmd, Data, DelayMs};

const INIT_SEQUENCE: &[InitStep] = &[
    Cmd(hx8357::SWRESET),
    DelayMs(120),
    Cmd(hx8357::SLPOUT),
    DelayMs(120),
    Cmd(hx8357::COLMOD),
    Data(hx8357::COLMOD_RGB565),
    Cmd(hx8357::MADCTL),
    Data(hx8357::MADCTL_MV),
    Cmd(hx8357::CASET),
    Data(0),
    Data(0),
    Data((PANEL_WIDTH - 1) >> 8),
    Data((PANEL_WIDTH - 1) & 0xff),
    Cmd(hx8357::PASET),
    Data(0),
    Data(0),
    Data((PANEL_HEIGHT - 1) >> 8),
    Data((PANEL_HEIGHT - 1) & 0xff),
    Cmd(hx8357::INVOFF),
    Cmd(hx8357::DISPON),
    DelayMs(20),
];

/// The board's 480x320 LCD
pub struct ParLcd {
    regs: PhysMapping,
}

impl ParLcd {
    /// Map the LCD interface at its fixed physical address
    pub fn open() -> Result<Self, MapError> {
        PhysMapping::map(PARLCD_REG_BASE_PHYS, PARLCD_REG_SIZE).map(Self::new)
    }

    /// Drive an already mapped register window
    pub fn new(regs: PhysMapping) -> Self {
        Self { regs }
    }

    /// Write a controller command word
    pub fn write_cmd(&mut self, cmd: u16) {
        self.regs.write_u16(PARLCD_REG_CMD_O, cmd);
    }

    /// Write a parameter or pixel word following a command
    pub fn write_data(&mut self, data: u16) {
        self.regs.write_u16(PARLCD_REG_DATA_O, data);
    }

    /// Bring the controller out of reset into RGB565 landscape mode
    pub fn init_hx8357<D: DelayNs>(&mut self, delay: &mut D) {
        for step in INIT_SEQUENCE {
            match *step {
                Cmd(cmd) => self.write_cmd(cmd),
                Data(data) => self.write_data(data),
                DelayMs(ms) => delay.delay_ms(ms),
            }
        }
        debug!("HX8357 initialised");
    }
}

impl DisplayBus for ParLcd {
    fn begin_frame(&mut self) {
        self.write_cmd(hx8357::RAMWR);
    }

    fn write_pixel(&mut self, value: u16) {
        self.write_data(value);
    }
}
