//! Scaled drawing
//!
//! The board's fonts are small next to a 480x320 panel. [`Scaled`] wraps a
//! draw target so that every pixel drawn through it becomes a
//! `scale × scale` block, placed relative to an origin on the real target.

use embedded_graphics::geometry::Dimensions;
use embedded_graphics::prelude::{DrawTarget, Point, Size};
use embedded_graphics::primitives::Rectangle;
use embedded_graphics::Pixel as EgPixel;

/// Draw target adapter that magnifies everything drawn through it
pub struct Scaled<'a, D> {
    target: &'a mut D,
    origin: Point,
    scale: u32,
}

impl<'a, D: DrawTarget> Scaled<'a, D> {
    /// Wrap `target`; point `(0, 0)` maps to `origin`, scale 0 acts as 1
    pub fn new(target: &'a mut D, origin: Point, scale: u32) -> Self {
        Self {
            target,
            origin,
            scale: scale.max(1),
        }
    }

    /// Block size in target pixels
    pub fn scale(&self) -> u32 {
        self.scale
    }

    fn block(&self, point: Point) -> Rectangle {
        let scale = self.scale as i32;
        Rectangle::new(
            self.origin + point * scale,
            Size::new(self.scale, self.scale),
        )
    }
}

impl<D: DrawTarget> Dimensions for Scaled<'_, D> {
    fn bounding_box(&self) -> Rectangle {
        let target = self.target.bounding_box();
        let scale = self.scale as i32;
        Rectangle::new(
            (target.top_left - self.origin) / scale,
            target.size / self.scale,
        )
    }
}

impl<D: DrawTarget> DrawTarget for Scaled<'_, D> {
    type Color = D::Color;
    type Error = D::Error;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = EgPixel<Self::Color>>,
    {
        for EgPixel(point, color) in pixels {
            let block = self.block(point);
            self.target.fill_solid(&block, color)?;
        }
        Ok(())
    }
}
