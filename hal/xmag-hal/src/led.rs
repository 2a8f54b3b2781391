//! LED line abstraction

/// Linear array of LEDs addressed by a bitmask
///
/// Bit 0 is the first LED. Writes are fire-and-forget.
pub trait LedLine {
    /// Light exactly the LEDs whose bits are set in `mask`
    fn write_led(&mut self, mask: u32);

    /// Turn every LED off
    fn clear_leds(&mut self) {
        self.write_led(0);
    }
}

impl<T: LedLine + ?Sized> LedLine for &mut T {
    fn write_led(&mut self, mask: u32) {
        (**self).write_led(mask)
    }
}
