//! Display bus abstraction
//!
//! The LCD accepts a stream of 16-bit pixels in raster order (row-major,
//! top-to-bottom, left-to-right) after a frame has been started. There is
//! no partial update: every frame writes every pixel.

/// Pixel stream into the display controller
pub trait DisplayBus {
    /// Start a new frame; the next pixel lands at the top-left corner
    fn begin_frame(&mut self);

    /// Write the next pixel of the current frame
    fn write_pixel(&mut self, value: u16);

    /// Write a run of pixels of the current frame
    ///
    /// The default implementation writes them one at a time.
    fn write_pixels(&mut self, values: &[u16]) {
        for &value in values {
            self.write_pixel(value);
        }
    }
}

impl<T: DisplayBus + ?Sized> DisplayBus for &mut T {
    fn begin_frame(&mut self) {
        (**self).begin_frame()
    }

    fn write_pixel(&mut self, value: u16) {
        (**self).write_pixel(value)
    }

    fn write_pixels(&mut self, values: &[u16]) {
        (**self).write_pixels(values)
    }
}
