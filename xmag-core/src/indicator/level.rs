//! Zoom level bar graph

use crate::config::LED_LINE_COUNT;

/// Mask with bits `0..=lit` set
///
/// `lit` beyond the top bit saturates to all 32 bits.
pub const fn fill_mask(lit: u32) -> u32 {
    if lit >= LED_LINE_COUNT - 1 {
        u32::MAX
    } else {
        (1u32 << (lit + 1)) - 1
    }
}

/// Bar graph mask for a zoom value within `[zoom_min, zoom_max]`
///
/// The first LED is always lit; the bar grows linearly with zoom until the
/// whole line is lit at `zoom_max`. Zoom outside the range is treated as the
/// nearest end. An empty range lights the whole line.
pub const fn led_pattern(zoom: u32, zoom_min: u32, zoom_max: u32, led_count: u32) -> u32 {
    let led_count = if led_count > LED_LINE_COUNT {
        LED_LINE_COUNT
    } else {
        led_count
    };
    if led_count == 0 {
        return 0;
    }
    if zoom_max <= zoom_min {
        return fill_mask(led_count - 1);
    }

    let zoom = if zoom < zoom_min { zoom_min } else { zoom };
    let span = (zoom_max - zoom_min) as u64;
    let lit = ((zoom - zoom_min) as u64 * led_count as u64) / span;
    let lit = if lit > (led_count - 1) as u64 {
        led_count - 1
    } else {
        lit as u32
    };

    fill_mask(lit)
}
