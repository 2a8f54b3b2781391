//! Source image
//!
//! The magnifier shows a fixed picture. It is either read from a raw
//! RGB565 file (little-endian, row-major, no header) or generated as a
//! colour test card, then centered on a display-sized canvas.

use std::fs;
use std::path::Path;

use tracing::info;
use xmag_core::config::DisplayConfig;
use xmag_display::{Pixel, Raster};

use crate::config::AssetConfig;
use crate::error::AssetError;

/// Spacing of the test card grid lines
const GRID_STEP: u32 = 40;

/// Build the source raster described by `asset`, sized to the display
pub fn load_source(asset: &AssetConfig, display: &DisplayConfig) -> Result<Raster, AssetError> {
    let image = match &asset.path {
        Some(path) => read_rgb565(path, asset.width, asset.height)?,
        None => {
            info!(width = asset.width, height = asset.height, "using generated test card");
            test_card(asset.width, asset.height)?
        }
    };

    Ok(Raster::centered_in(display.width, display.height, &image)?)
}

/// Read a headerless RGB565 little-endian file
pub fn read_rgb565(path: &Path, width: u32, height: u32) -> Result<Raster, AssetError> {
    let bytes = fs::read(path).map_err(|source| AssetError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let expected = (width as usize)
        .saturating_mul(height as usize)
        .saturating_mul(2);
    if bytes.len() != expected {
        return Err(AssetError::SizeMismatch {
            path: path.to_path_buf(),
            width,
            height,
            expected,
            actual: bytes.len(),
        });
    }

    let pixels = bytes
        .chunks_exact(2)
        .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
        .collect();

    info!(path = %path.display(), width, height, "loaded source image");
    Ok(Raster::from_pixels(width, height, pixels)?)
}

/// Hue sweep left to right, brightness falling top to bottom, with a grid
pub fn test_card(width: u32, height: u32) -> Result<Raster, AssetError> {
    let mut card = Raster::new(width, height, Pixel::BLACK)?;

    for y in 0..height {
        let Some(row) = card.raw_row_mut(y) else {
            continue;
        };
        for (x, px) in (0u32..).zip(row.iter_mut()) {
            *px = card_pixel(x, y, width, height).raw();
        }
    }

    Ok(card)
}

/// Test card colour at `(x, y)`; products are taken in `u64` so any card
/// size is safe
fn card_pixel(x: u32, y: u32, width: u32, height: u32) -> Pixel {
    if x % GRID_STEP == 0 || y % GRID_STEP == 0 {
        return Pixel::WHITE;
    }
    let hue = u64::from(x) * 360 / u64::from(width.max(1));
    let dim = u64::from(y) * 191 / u64::from(height.max(1));
    Pixel::from_hsv(hue.min(359) as u32, 255, 255 - dim.min(191) as u8)
}
