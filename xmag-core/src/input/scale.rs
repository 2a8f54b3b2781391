//! Axis scaling
//!
//! Linear maps from an 8-bit knob reading onto a screen coordinate or a
//! zoom factor. Intermediate products are carried in `u64` so no input can
//! overflow.

/// Map an axis reading onto `[0, dimension)`
///
/// Divides by 256 rather than 255 so that an axis at 255 still lands
/// strictly inside the dimension.
pub const fn axis_to_coordinate(axis: u8, dimension: u32) -> u32 {
    ((axis as u64 * dimension as u64) / 256) as u32
}

/// Map an axis reading onto `[zoom_min, zoom_max]`, inclusive at both ends
///
/// An empty or inverted range yields `zoom_min`.
pub const fn axis_to_zoom(axis: u8, zoom_min: u32, zoom_max: u32) -> u32 {
    if zoom_max <= zoom_min {
        return zoom_min;
    }
    let span = (zoom_max - zoom_min) as u64;
    zoom_min + ((axis as u64 * span) / 255) as u32
}
