//! Magnified blit
//!
//! Copies the viewport window of the source into the destination, scaling
//! each source pixel up to a `zoom × zoom` block. The loop runs over
//! destination pixels, so each one is written at most once and the cost is
//! bounded by the destination area whatever the zoom.

use xmag_core::geometry::Viewport;

use crate::pixel::Pixel;
use crate::raster::Raster;

/// Replicate the viewport window of `src` into `dest`
///
/// Destination pixels beyond `window * zoom` or outside `dest` are left
/// untouched. The window is expected to lie inside `src`, as
/// [`xmag_core::geometry::compute_viewport`] guarantees; source pixels past
/// the edge of `src` are skipped rather than read.
pub fn blit_magnified(dest: &mut Raster, src: &Raster, viewport: &Viewport) {
    let zoom = viewport.zoom.max(1);
    let window = &viewport.window;

    let out_w = (u64::from(window.width) * u64::from(zoom)).min(u64::from(dest.width())) as usize;
    let out_h = (u64::from(window.height) * u64::from(zoom)).min(u64::from(dest.height())) as u32;

    let start_x = window.start_x as usize;
    let zoom_x = zoom as usize;

    for dy in 0..out_h {
        let Some(src_row) = src.raw_row(window.start_y + dy / zoom) else {
            break;
        };
        let Some(dest_row) = dest.raw_row_mut(dy) else {
            break;
        };

        for (dx, out) in dest_row[..out_w].iter_mut().enumerate() {
            if let Some(&value) = src_row.get(start_x + dx / zoom_x) {
                *out = value;
            }
        }
    }
}

/// Clear the frame and draw the magnified source into it
pub fn render_live_view(frame: &mut Raster, source: &Raster, viewport: &Viewport) {
    frame.fill(Pixel::BLACK);
    blit_magnified(frame, source, viewport);
}
