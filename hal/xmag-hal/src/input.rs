//! Input register abstraction
//!
//! The knobs and their push buttons are sampled by hardware into a single
//! 32-bit word. Decoding that word is the job of `xmag-core`; this trait
//! only hands it over.

/// Readable input register
///
/// Reads never block and always return the most recently sampled value.
pub trait InputRegister {
    /// Read the raw 32-bit input word
    fn read_input(&mut self) -> u32;
}

impl<T: InputRegister + ?Sized> InputRegister for &mut T {
    fn read_input(&mut self) -> u32 {
        (**self).read_input()
    }
}
