//! Startup LED animation
//!
//! The sweep is a fixed script of `(pattern, delay)` steps, produced lazily
//! by [`StartupAnimation`]. Playing it is up to the caller: write each
//! pattern, then wait for its delay.

use super::level::fill_mask;
use crate::config::{AnimationConfig, LED_LINE_COUNT};

/// One frame of the startup animation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LedStep {
    /// LED mask to write
    pub pattern: u32,
    /// Time to hold the pattern before the next step (ms)
    pub delay_ms: u32,
}

/// Shape of the startup sweep
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SweepStyle {
    /// A single LED runs to the far end and back
    #[default]
    Bounce,
    /// The bar fills to the far end, then empties back
    Fill,
}

impl SweepStyle {
    /// Number of steps in one cycle on a line of `leds` LEDs
    const fn cycle_len(self, leds: u32) -> u32 {
        match self {
            // out: 0..=n-1, back: n-2..=0
            SweepStyle::Bounce => 2 * leds - 1,
            // fill: 0..=n-1, empty: n-2..=0 then off
            SweepStyle::Fill => 2 * leds,
        }
    }

    /// Pattern at `pos` within one cycle
    const fn pattern_at(self, pos: u32, leds: u32) -> u32 {
        let last = leds - 1;
        match self {
            SweepStyle::Bounce => {
                let led = if pos <= last { pos } else { 2 * last - pos };
                1 << led
            }
            SweepStyle::Fill => {
                if pos <= last {
                    fill_mask(pos)
                } else if pos == 2 * leds - 1 {
                    0
                } else {
                    fill_mask(2 * last - pos)
                }
            }
        }
    }
}

/// Iterator over the startup animation steps
///
/// Yields `cycles` sweeps followed by a final all-off step with no delay.
#[derive(Debug, Clone)]
pub struct StartupAnimation {
    style: SweepStyle,
    leds: u32,
    step_ms: u32,
    total: u32,
    index: u32,
}

impl StartupAnimation {
    /// Create an animation for a line of `led_count` LEDs
    ///
    /// `led_count` is clamped to the 32 LEDs a mask can address.
    pub fn new(style: SweepStyle, led_count: u32, cycles: u32, step_ms: u32) -> Self {
        let leds = led_count.min(LED_LINE_COUNT);
        let sweep_steps = if leds == 0 {
            0
        } else {
            style.cycle_len(leds).saturating_mul(cycles)
        };

        Self {
            style,
            leds,
            step_ms,
            // Plus the closing clear step
            total: sweep_steps.saturating_add(1),
            index: 0,
        }
    }

    /// Create the animation described by a configuration section
    pub fn from_config(config: &AnimationConfig, led_count: u32) -> Self {
        let cycles = if config.enabled { config.cycles } else { 0 };
        Self::new(config.style, led_count, cycles, config.step_ms)
    }

    /// Total number of steps, including the closing clear step
    pub const fn len(&self) -> u32 {
        self.total
    }

    /// Whether the script has no steps left
    pub const fn is_finished(&self) -> bool {
        self.index >= self.total
    }

    /// Step at an absolute position in the script
    pub const fn step_at(&self, index: u32) -> Option<LedStep> {
        if index >= self.total {
            return None;
        }
        if index == self.total - 1 {
            return Some(LedStep {
                pattern: 0,
                delay_ms: 0,
            });
        }

        let pos = index % self.style.cycle_len(self.leds);
        Some(LedStep {
            pattern: self.style.pattern_at(pos, self.leds),
            delay_ms: self.step_ms,
        })
    }
}

impl Iterator for StartupAnimation {
    type Item = LedStep;

    fn next(&mut self) -> Option<Self::Item> {
        let step = self.step_at(self.index)?;
        self.index += 1;
        Some(step)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.total.saturating_sub(self.index) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for StartupAnimation {}
