//! MZ_APO board support for X-Mag
//!
//! The MZ_APO is a Zynq-7000 board running Linux. Its peripherals are
//! FPGA register blocks reached by mapping `/dev/mem` into the process.
//!
//! - [`SpiLed`] - knob register and 32-LED line
//! - [`ParLcd`] - 480x320 parallel LCD with an HX8357 controller
//! - [`MzApoBoard`] - both of the above, implementing [`xmag_hal::Board`]
//! - [`SerializeLock`] - one user of the board at a time
//! - [`StdDelay`] - blocking delay for the frame loop

pub mod board;
pub mod delay;
pub mod lock;
pub mod parlcd;
pub mod phys;
pub mod regs;
pub mod spiled;

pub use board::MzApoBoard;
pub use delay::StdDelay;
pub use lock::{LockError, SerializeLock};
pub use parlcd::ParLcd;
pub use phys::{MapError, PhysMapping};
pub use spiled::SpiLed;
