//! Viewport mapper
//!
//! The window is `source / zoom` on each axis and is positioned around the
//! requested center. When the naive window would cross an edge the window
//! is shifted back inside the source and the center is recomputed to match,
//! so the visible content slides rather than the window shrinking.

use crate::config::ZoomConfig;
use crate::input::{axis_to_coordinate, axis_to_zoom, InputState};

/// Rectangle of the source raster sampled for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Window {
    /// Left edge (inclusive)
    pub start_x: u32,
    /// Top edge (inclusive)
    pub start_y: u32,
    /// Width in source pixels
    pub width: u32,
    /// Height in source pixels
    pub height: u32,
}

impl Window {
    /// Right edge (exclusive)
    pub const fn end_x(&self) -> u32 {
        self.start_x + self.width
    }

    /// Bottom edge (exclusive)
    pub const fn end_y(&self) -> u32 {
        self.start_y + self.height
    }

    /// Check whether the window samples no pixels
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Magnified view of the source raster
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Viewport {
    /// Effective center after edge clamping (x)
    pub center_x: i32,
    /// Effective center after edge clamping (y)
    pub center_y: i32,
    /// Integer magnification, at least 1
    pub zoom: u32,
    /// Sampled source rectangle
    pub window: Window,
}

/// Clamp one axis of the window
///
/// Returns `(start, center)`. The low edge is handled before the high edge;
/// since `window <= extent` the second clamp can never push start negative.
fn clamp_axis(center: i32, window: u32, extent: u32) -> (u32, i32) {
    let window = i64::from(window.min(extent));
    let extent = i64::from(extent);
    let half = window / 2;

    let mut center = i64::from(center);
    let mut start = center - half;

    if start < 0 {
        start = 0;
        center = half;
    }
    if start + window > extent {
        start = extent - window;
        center = extent - half;
    }

    // start is within [0, extent]; center is within i32 unless extent is huge
    let center = i32::try_from(center).unwrap_or(i32::MAX);
    (start as u32, center)
}

/// Compute the source window for a center and zoom factor
///
/// Zoom 0 is treated as 1. The resulting window always satisfies
/// `start + size <= source` on both axes; at zoom 1 it is the whole source.
pub fn compute_viewport(
    center_x: i32,
    center_y: i32,
    zoom: u32,
    source_w: u32,
    source_h: u32,
) -> Viewport {
    let zoom = zoom.max(1);
    let width = source_w / zoom;
    let height = source_h / zoom;

    let (start_x, center_x) = clamp_axis(center_x, width, source_w);
    let (start_y, center_y) = clamp_axis(center_y, height, source_h);

    Viewport {
        center_x,
        center_y,
        zoom,
        window: Window {
            start_x,
            start_y,
            width,
            height,
        },
    }
}

/// Compute the viewport selected by one input sample
///
/// The zoom knob picks the factor within `zoom`; the x and y knobs pick the
/// center anywhere on the source.
pub fn plan_viewport(
    input: &InputState,
    zoom: &ZoomConfig,
    source_w: u32,
    source_h: u32,
) -> Viewport {
    let factor = axis_to_zoom(input.zoom_axis, zoom.min, zoom.max);
    let center_x = axis_to_coordinate(input.x_axis, source_w);
    let center_y = axis_to_coordinate(input.y_axis, source_h);

    compute_viewport(
        i32::try_from(center_x).unwrap_or(i32::MAX),
        i32::try_from(center_y).unwrap_or(i32::MAX),
        factor,
        source_w,
        source_h,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const W: u32 = 480;
    const H: u32 = 320;

    #[test]
    fn test_window_size() {
        let vp = compute_viewport(240, 160, 4, W, H);
        assert_eq!(vp.window.width, 120);
        assert_eq!(vp.window.height, 80);
        assert_eq!(vp.window.start_x, 180);
        assert_eq!(vp.window.start_y, 120);
        assert_eq!((vp.center_x, vp.center_y), (240, 160));
    }

    #[test]
    fn test_zoom_one_is_full_source() {
        for (cx, cy) in [(0, 0), (240, 160), (479, 319), (-50, 900)] {
            let vp = compute_viewport(cx, cy, 1, W, H);
            assert_eq!(
                vp.window,
                Window {
                    start_x: 0,
                    start_y: 0,
                    width: W,
                    height: H
                }
            );
        }
    }

    #[test]
    fn test_zoom_zero_treated_as_one() {
        let vp = compute_viewport(10, 10, 0, W, H);
        assert_eq!(vp.zoom, 1);
        assert_eq!(vp.window.width, W);
    }

    #[test]
    fn test_low_edge_recenters() {
        let vp = compute_viewport(5, 3, 8, W, H);
        // window 60x40
        assert_eq!(vp.window.start_x, 0);
        assert_eq!(vp.window.start_y, 0);
        assert_eq!(vp.center_x, 30);
        assert_eq!(vp.center_y, 20);
    }

    #[test]
    fn test_high_edge_recenters() {
        let vp = compute_viewport(479, 319, 8, W, H);
        assert_eq!(vp.window.start_x, W - 60);
        assert_eq!(vp.window.start_y, H - 40);
        assert_eq!(vp.center_x, 450);
        assert_eq!(vp.center_y, 300);
        assert_eq!(vp.window.end_x(), W);
        assert_eq!(vp.window.end_y(), H);
    }

    #[test]
    fn test_negative_and_extreme_centers() {
        let vp = compute_viewport(i32::MIN, i32::MAX, 15, W, H);
        assert_eq!(vp.window.start_x, 0);
        assert_eq!(vp.window.end_y(), H);
    }

    #[test]
    fn test_window_equal_to_source_on_one_axis() {
        // An empty axis gives window == source == 0; start must pin to 0
        let vp = compute_viewport(100, 50, 3, W, 0);
        assert_eq!(vp.window.height, 0);
        assert_eq!(vp.window.start_y, 0);
        assert_eq!(vp.center_y, 0);
        assert_eq!(vp.window.width, 160);
        assert_eq!(vp.window.start_x, 20);
    }

    #[test]
    fn test_zoom_beyond_extent_is_total() {
        let vp = compute_viewport(3, 3, 20, 10, 10);
        assert!(vp.window.is_empty());
        assert!(vp.window.end_x() <= 10);
        assert!(vp.window.end_y() <= 10);
    }

    #[test]
    fn test_plan_viewport_from_knobs() {
        let zoom = ZoomConfig { min: 1, max: 15 };
        let input = InputState {
            x_axis: 128,
            y_axis: 128,
            zoom_axis: 255,
            ..InputState::default()
        };
        let vp = plan_viewport(&input, &zoom, W, H);
        assert_eq!(vp.zoom, 15);
        assert_eq!(vp.window.width, 32);
        assert_eq!(vp.window.height, 21);
        assert_eq!(vp.window.start_x, 240 - 16);
        assert_eq!(vp.window.start_y, 160 - 10);
    }

    #[test]
    fn test_plan_viewport_zoom_min_covers_source() {
        let zoom = ZoomConfig { min: 1, max: 15 };
        let input = InputState {
            x_axis: 255,
            y_axis: 0,
            zoom_axis: 0,
            ..InputState::default()
        };
        let vp = plan_viewport(&input, &zoom, W, H);
        assert_eq!(vp.zoom, 1);
        assert_eq!(vp.window.start_x, 0);
        assert_eq!(vp.window.width, W);
    }
}
