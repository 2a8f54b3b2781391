//! RGB565 pixel values

use embedded_graphics::pixelcolor::raw::RawU16;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::IntoStorage;

/// 16-bit packed colour: 5 bits red, 6 bits green, 5 bits blue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Pixel(pub u16);

impl Pixel {
    pub const BLACK: Self = Self(0x0000);
    pub const WHITE: Self = Self(0xFFFF);
    pub const RED: Self = Self(0xF800);
    pub const GREEN: Self = Self(0x07E0);
    pub const BLUE: Self = Self(0x001F);

    /// Pack 8-bit channels, dropping the low bits of each
    pub const fn from_rgb888(r: u8, g: u8, b: u8) -> Self {
        let r5 = (r >> 3) as u16;
        let g6 = (g >> 2) as u16;
        let b5 = (b >> 3) as u16;
        Self((r5 << 11) | (g6 << 5) | b5)
    }

    /// Colour from hue (degrees, wraps at 360), saturation and value
    ///
    /// Channels are computed in integers on a 0-255 scale, clamped, then
    /// truncated to the 5/6/5 bit widths.
    pub const fn from_hsv(hue: u32, saturation: u8, value: u8) -> Self {
        let hue = hue % 360;
        let rem = hue % 60;
        let s = saturation as u32;
        let v = value as u32;

        let p = v * (255 - s) / 255;
        let q = v * (255 - s * rem / 60) / 255;
        let t = v * (255 - s * (60 - rem) / 60) / 255;

        let (r, g, b) = match hue / 60 {
            0 => (v, t, p),
            1 => (q, v, p),
            2 => (p, v, t),
            3 => (p, q, v),
            4 => (t, p, v),
            _ => (v, p, q),
        };

        Self::from_rgb888(saturate(r), saturate(g), saturate(b))
    }

    /// Raw 16-bit value as written to the display
    pub const fn raw(self) -> u16 {
        self.0
    }
}

const fn saturate(channel: u32) -> u8 {
    if channel > 255 {
        255
    } else {
        channel as u8
    }
}

impl From<Rgb565> for Pixel {
    fn from(color: Rgb565) -> Self {
        Self(color.into_storage())
    }
}

impl From<Pixel> for Rgb565 {
    fn from(pixel: Pixel) -> Self {
        Rgb565::from(RawU16::new(pixel.0))
    }
}
