//! Property tests for the per-frame arithmetic
//!
//! Every function on the frame path must stay in bounds for the whole
//! input domain, not just the values the unit tests pick.

use proptest::prelude::*;

use xmag_core::config::ZoomConfig;
use xmag_core::geometry::{compute_viewport, plan_viewport};
use xmag_core::indicator::led_pattern;
use xmag_core::input::{axis_to_coordinate, axis_to_zoom, decode, Buttons, InputState};

const SOURCE_W: u32 = 480;
const SOURCE_H: u32 = 320;

proptest! {
    #[test]
    fn viewport_stays_inside_source(
        center_x in 0i32..SOURCE_W as i32,
        center_y in 0i32..SOURCE_H as i32,
        zoom in 1u32..=15,
    ) {
        let vp = compute_viewport(center_x, center_y, zoom, SOURCE_W, SOURCE_H);
        prop_assert!(vp.window.width >= 1 && vp.window.height >= 1);
        prop_assert!(vp.window.end_x() <= SOURCE_W);
        prop_assert!(vp.window.end_y() <= SOURCE_H);
        prop_assert_eq!(vp.window.width, SOURCE_W / zoom);
        prop_assert_eq!(vp.window.height, SOURCE_H / zoom);
    }

    #[test]
    fn viewport_total_for_any_center(
        center_x in any::<i32>(),
        center_y in any::<i32>(),
        zoom in any::<u32>(),
        source_w in 0u32..4096,
        source_h in 0u32..4096,
    ) {
        let vp = compute_viewport(center_x, center_y, zoom, source_w, source_h);
        prop_assert!(vp.window.end_x() <= source_w);
        prop_assert!(vp.window.end_y() <= source_h);
    }

    #[test]
    fn viewport_is_pure(
        center_x in -1000i32..1000,
        center_y in -1000i32..1000,
        zoom in 1u32..=15,
    ) {
        let first = compute_viewport(center_x, center_y, zoom, SOURCE_W, SOURCE_H);
        let second = compute_viewport(center_x, center_y, zoom, SOURCE_W, SOURCE_H);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn viewport_boundary_centers(zoom in 1u32..=15) {
        for (cx, cy) in [(0, 0), (SOURCE_W as i32 - 1, SOURCE_H as i32 - 1)] {
            let vp = compute_viewport(cx, cy, zoom, SOURCE_W, SOURCE_H);
            prop_assert!(vp.window.end_x() <= SOURCE_W);
            prop_assert!(vp.window.end_y() <= SOURCE_H);
        }
    }

    #[test]
    fn window_shrinks_with_zoom(a in 1u32..=15, b in 1u32..=15) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let wide = compute_viewport(240, 160, lo, SOURCE_W, SOURCE_H);
        let narrow = compute_viewport(240, 160, hi, SOURCE_W, SOURCE_H);
        prop_assert!(narrow.window.width <= wide.window.width);
        prop_assert!(narrow.window.height <= wide.window.height);
    }

    #[test]
    fn decode_reproduces_fields(x in any::<u8>(), y in any::<u8>(), z in any::<u8>(), b in 0u8..8) {
        let raw = u32::from(x) | u32::from(y) << 8 | u32::from(z) << 16 | u32::from(b) << 24;
        let input = decode(raw);
        prop_assert_eq!(input, InputState {
            x_axis: x,
            y_axis: y,
            zoom_axis: z,
            buttons: Buttons::from_bits(b),
        });
    }

    #[test]
    fn decode_ignores_reserved_bits(raw in any::<u32>()) {
        prop_assert_eq!(decode(raw), decode(raw & 0x07FF_FFFF));
    }

    #[test]
    fn coordinate_stays_below_dimension(axis in any::<u8>(), dimension in 1u32..100_000) {
        prop_assert!(axis_to_coordinate(axis, dimension) < dimension);
    }

    #[test]
    fn zoom_stays_in_range(axis in any::<u8>(), min in 1u32..=8, extra in 0u32..=8) {
        let max = min + extra;
        let zoom = axis_to_zoom(axis, min, max);
        prop_assert!(zoom >= min && zoom <= max);
    }

    #[test]
    fn indicator_is_monotonic(z1 in 1u32..=15, z2 in 1u32..=15, leds in 1u32..=32) {
        let (lo, hi) = if z1 <= z2 { (z1, z2) } else { (z2, z1) };
        prop_assert!(led_pattern(lo, 1, 15, leds) <= led_pattern(hi, 1, 15, leds));
    }

    #[test]
    fn indicator_bits_are_contiguous(zoom in 1u32..=15, leds in 1u32..=32) {
        let mask = led_pattern(zoom, 1, 15, leds);
        prop_assert!(mask & 1 == 1);
        prop_assert_eq!(mask & mask.wrapping_add(1), 0);
        prop_assert!(mask.count_ones() <= leds);
    }

    #[test]
    fn planned_viewport_in_bounds(x in any::<u8>(), y in any::<u8>(), z in any::<u8>()) {
        let zoom = ZoomConfig { min: 2, max: 15 };
        let input = InputState { x_axis: x, y_axis: y, zoom_axis: z, buttons: Buttons::NONE };
        let vp = plan_viewport(&input, &zoom, SOURCE_W, SOURCE_H);
        prop_assert!(vp.zoom >= 2 && vp.zoom <= 15);
        prop_assert!(vp.window.end_x() <= SOURCE_W);
        prop_assert!(vp.window.end_y() <= SOURCE_H);
    }
}
