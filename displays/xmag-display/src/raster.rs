//! Pixel buffers
//!
//! One type serves as both the source image and the frame buffer. Pixels
//! are stored row-major as raw RGB565 words so a frame can be handed to
//! the display bus without conversion.

use alloc::vec::Vec;
use core::convert::Infallible;
use core::fmt;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::{DrawTarget, OriginDimensions, Size};

use crate::pixel::Pixel;

/// Frame buffer matching the display resolution
///
/// Owned by the render loop and cleared every frame.
pub type FrameBuffer = Raster;

/// Raster construction errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RasterError {
    /// The pixel storage could not be allocated
    AllocationFailure { pixels: usize },
    /// Supplied pixel data does not match `width * height`
    SizeMismatch { expected: usize, actual: usize },
}

impl fmt::Display for RasterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RasterError::AllocationFailure { pixels } => {
                write!(f, "failed to allocate a buffer of {} pixels", pixels)
            }
            RasterError::SizeMismatch { expected, actual } => {
                write!(f, "expected {} pixels, got {}", expected, actual)
            }
        }
    }
}

impl core::error::Error for RasterError {}

/// Rectangular row-major grid of RGB565 pixels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    width: u32,
    height: u32,
    pixels: Vec<u16>,
}

fn pixel_count(width: u32, height: u32) -> Result<usize, RasterError> {
    (width as usize)
        .checked_mul(height as usize)
        .ok_or(RasterError::AllocationFailure { pixels: usize::MAX })
}

impl Raster {
    /// Allocate a raster filled with one colour
    pub fn new(width: u32, height: u32, fill: Pixel) -> Result<Self, RasterError> {
        let len = pixel_count(width, height)?;
        let mut pixels = Vec::new();
        pixels
            .try_reserve_exact(len)
            .map_err(|_| RasterError::AllocationFailure { pixels: len })?;
        pixels.resize(len, fill.raw());

        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Wrap existing row-major pixel data
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<u16>) -> Result<Self, RasterError> {
        let expected = pixel_count(width, height)?;
        if pixels.len() != expected {
            return Err(RasterError::SizeMismatch {
                expected,
                actual: pixels.len(),
            });
        }

        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Place `asset` centered on a black canvas
    ///
    /// Asset pixels that fall outside the canvas are clipped; canvas pixels
    /// the asset does not cover stay black.
    pub fn centered_in(canvas_w: u32, canvas_h: u32, asset: &Raster) -> Result<Self, RasterError> {
        let mut canvas = Self::new(canvas_w, canvas_h, Pixel::BLACK)?;

        let offset_x = (i64::from(canvas_w) - i64::from(asset.width)) / 2;
        let offset_y = (i64::from(canvas_h) - i64::from(asset.height)) / 2;

        for y in 0..asset.height {
            let dest_y = offset_y + i64::from(y);
            if dest_y < 0 || dest_y >= i64::from(canvas_h) {
                continue;
            }
            let Some(src_row) = asset.raw_row(y) else {
                continue;
            };
            for (x, &value) in src_row.iter().enumerate() {
                let dest_x = offset_x + x as i64;
                if dest_x >= 0 && dest_x < i64::from(canvas_w) {
                    let idx = dest_y as usize * canvas_w as usize + dest_x as usize;
                    canvas.pixels[idx] = value;
                }
            }
        }

        Ok(canvas)
    }

    /// Width in pixels
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Pixel at `(x, y)`, or `None` outside the raster
    pub fn get(&self, x: u32, y: u32) -> Option<Pixel> {
        if x < self.width && y < self.height {
            let idx = y as usize * self.width as usize + x as usize;
            self.pixels.get(idx).copied().map(Pixel)
        } else {
            None
        }
    }

    /// Set the pixel at `(x, y)`
    ///
    /// Coordinates outside the raster are dropped. Returns whether the
    /// pixel was written.
    pub fn set(&mut self, x: i32, y: i32, color: Pixel) -> bool {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return false;
        }
        let idx = y as usize * self.width as usize + x as usize;
        self.pixels[idx] = color.raw();
        true
    }

    /// Overwrite every pixel
    pub fn fill(&mut self, color: Pixel) {
        self.pixels.fill(color.raw());
    }

    /// Row `y` as raw RGB565 words
    pub fn raw_row(&self, y: u32) -> Option<&[u16]> {
        if y >= self.height {
            return None;
        }
        let start = y as usize * self.width as usize;
        self.pixels.get(start..start + self.width as usize)
    }

    /// Row `y` as mutable raw RGB565 words
    pub fn raw_row_mut(&mut self, y: u32) -> Option<&mut [u16]> {
        if y >= self.height {
            return None;
        }
        let start = y as usize * self.width as usize;
        self.pixels.get_mut(start..start + self.width as usize)
    }

    /// All pixels in raster order
    pub fn as_raw(&self) -> &[u16] {
        &self.pixels
    }
}

impl OriginDimensions for Raster {
    fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

impl DrawTarget for Raster {
    type Color = Rgb565;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = embedded_graphics::Pixel<Self::Color>>,
    {
        for embedded_graphics::Pixel(point, color) in pixels {
            self.set(point.x, point.y, color.into());
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.fill(color.into());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use embedded_graphics::prelude::{Drawable, Point, Primitive, RgbColor};
    use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};

    fn numbered(width: u32, height: u32) -> Raster {
        let pixels = (0..width * height).map(|i| i as u16 + 1).collect();
        Raster::from_pixels(width, height, pixels).unwrap()
    }

    #[test]
    fn test_new_fills() {
        let raster = Raster::new(4, 3, Pixel::RED).unwrap();
        assert_eq!(raster.as_raw().len(), 12);
        assert!(raster.as_raw().iter().all(|&p| p == Pixel::RED.raw()));
    }

    #[test]
    fn test_from_pixels_size_mismatch() {
        let result = Raster::from_pixels(4, 4, vec![0; 15]);
        assert_eq!(
            result,
            Err(RasterError::SizeMismatch {
                expected: 16,
                actual: 15
            })
        );
    }

    #[test]
    fn test_get_and_set_bounds() {
        let mut raster = Raster::new(3, 2, Pixel::BLACK).unwrap();
        assert!(raster.set(2, 1, Pixel::WHITE));
        assert_eq!(raster.get(2, 1), Some(Pixel::WHITE));
        assert!(!raster.set(3, 0, Pixel::WHITE));
        assert!(!raster.set(-1, 0, Pixel::WHITE));
        assert_eq!(raster.get(3, 0), None);
    }

    #[test]
    fn test_rows() {
        let raster = numbered(3, 2);
        assert_eq!(raster.raw_row(1), Some(&[4u16, 5, 6][..]));
        assert_eq!(raster.raw_row(2), None);
    }

    #[test]
    fn test_centered_small_asset() {
        let asset = numbered(2, 2);
        let canvas = Raster::centered_in(4, 4, &asset).unwrap();
        assert_eq!(canvas.get(0, 0), Some(Pixel::BLACK));
        assert_eq!(canvas.get(1, 1), Some(Pixel(1)));
        assert_eq!(canvas.get(2, 1), Some(Pixel(2)));
        assert_eq!(canvas.get(1, 2), Some(Pixel(3)));
        assert_eq!(canvas.get(2, 2), Some(Pixel(4)));
        assert_eq!(canvas.get(3, 3), Some(Pixel::BLACK));
    }

    #[test]
    fn test_centered_clips_large_asset() {
        let asset = numbered(4, 4);
        let canvas = Raster::centered_in(2, 2, &asset).unwrap();
        // Offset is (-1, -1): the middle 2x2 of the asset survives
        assert_eq!(canvas.as_raw(), &[6, 7, 10, 11]);
    }

    #[test]
    fn test_draw_target_clips() {
        let mut raster = Raster::new(4, 4, Pixel::BLACK).unwrap();
        Rectangle::new(Point::new(2, 2), Size::new(10, 10))
            .into_styled(PrimitiveStyle::with_fill(Rgb565::GREEN))
            .draw(&mut raster)
            .unwrap();
        assert_eq!(raster.get(1, 1), Some(Pixel::BLACK));
        assert_eq!(raster.get(3, 3), Some(Pixel::GREEN));
        assert_eq!(raster.size(), Size::new(4, 4));
    }
}
