//! MZ_APO register map

/// SPI-attached knobs and LED peripherals
pub const SPILED_REG_BASE_PHYS: u64 = 0x43c4_0000;
pub const SPILED_REG_SIZE: usize = 0x4000;

/// 32 discrete LEDs, bit 0 is the rightmost
pub const SPILED_REG_LED_LINE_O: usize = 0x004;
/// Knob positions and buttons, one byte per knob
pub const SPILED_REG_KNOBS_8BIT_O: usize = 0x024;

/// Parallel LCD interface
pub const PARLCD_REG_BASE_PHYS: u64 = 0x43c0_0000;
pub const PARLCD_REG_SIZE: usize = 0x4000;

pub const PARLCD_REG_CMD_O: usize = 0x0008;
pub const PARLCD_REG_DATA_O: usize = 0x000c;

/// HX8357 commands used by this crate
pub mod hx8357 {
    pub const SWRESET: u16 = 0x01;
    pub const SLPOUT: u16 = 0x11;
    pub const INVOFF: u16 = 0x20;
    pub const DISPON: u16 = 0x29;
    pub const CASET: u16 = 0x2a;
    pub const PASET: u16 = 0x2b;
    pub const RAMWR: u16 = 0x2c;
    pub const MADCTL: u16 = 0x36;
    pub const COLMOD: u16 = 0x3a;

    /// Row/column exchange for landscape orientation
    pub const MADCTL_MV: u16 = 0x20;
    /// 16 bits per pixel on the parallel interface
    pub const COLMOD_RGB565: u16 = 0x55;
}
