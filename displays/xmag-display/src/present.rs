//! Pushing frames to the panel

use xmag_hal::DisplayBus;

use crate::raster::Raster;

/// Send the whole of `frame` to the display, top row first
///
/// There is no dirty-region tracking; every call rewrites the full panel.
pub fn flush<B: DisplayBus + ?Sized>(frame: &Raster, bus: &mut B) {
    bus.begin_frame();
    bus.write_pixels(frame.as_raw());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pixel::Pixel;
    use alloc::vec::Vec;

    #[derive(Default)]
    struct RecordingBus {
        frames: u32,
        pixels: Vec<u16>,
    }

    impl DisplayBus for RecordingBus {
        fn begin_frame(&mut self) {
            self.frames += 1;
            self.pixels.clear();
        }

        fn write_pixel(&mut self, value: u16) {
            self.pixels.push(value);
        }
    }

    #[test]
    fn test_flush_row_major() {
        let mut frame = Raster::new(3, 2, Pixel::BLACK).unwrap();
        frame.set(2, 0, Pixel::RED);
        frame.set(0, 1, Pixel::BLUE);

        let mut bus = RecordingBus::default();
        flush(&frame, &mut bus);

        assert_eq!(bus.frames, 1);
        assert_eq!(bus.pixels, [0x0000, 0x0000, 0xF800, 0x001F, 0x0000, 0x0000]);
    }

    #[test]
    fn test_flush_always_full_frame() {
        let frame = Raster::new(4, 4, Pixel::WHITE).unwrap();
        let mut bus = RecordingBus::default();
        flush(&frame, &mut bus);
        flush(&frame, &mut bus);

        assert_eq!(bus.frames, 2);
        assert_eq!(bus.pixels.len(), 16);
    }
}
