//! Startup LED animation playback

use embedded_hal::delay::DelayNs;
use tracing::debug;
use xmag_core::indicator::StartupAnimation;
use xmag_hal::LedLine;

/// Play `animation` to completion on the LED line
///
/// Blocks for the sum of the step delays. Returns the number of steps
/// written; the last one always clears the line.
pub fn play_startup<L, D>(leds: &mut L, delay: &mut D, animation: StartupAnimation) -> u32
where
    L: LedLine + ?Sized,
    D: DelayNs,
{
    debug!(steps = animation.len(), "playing startup animation");

    let mut played = 0;
    for step in animation {
        leds.write_led(step.pattern);
        if step.delay_ms > 0 {
            delay.delay_ms(step.delay_ms);
        }
        played += 1;
    }
    played
}
