//! Configuration type definitions

use core::fmt;

use crate::indicator::SweepStyle;
use crate::input::Button;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// LCD width in pixels
pub const LCD_WIDTH: u32 = 480;

/// LCD height in pixels
pub const LCD_HEIGHT: u32 = 320;

/// Highest magnification the zoom knob reaches by default
pub const MAX_MAGNIFICATION: u32 = 15;

/// LEDs on the board's LED line, also the widest line a `u32` mask can address
pub const LED_LINE_COUNT: u32 = 32;

/// Delay between frames (ms)
pub const FRAME_PERIOD_MS: u32 = 150;

/// Delay between startup animation steps (ms)
pub const ANIMATION_STEP_MS: u32 = 50;

/// Configuration validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Display width or height is zero
    ZeroDisplayDimension,
    /// Minimum zoom is zero
    ZeroZoom,
    /// Minimum zoom is above maximum zoom
    InvertedZoomRange { min: u32, max: u32 },
    /// Maximum zoom would shrink the window below one pixel
    ZoomExceedsDisplay { max: u32, limit: u32 },
    /// Confirm and quit are bound to the same button
    ButtonConflict(Button),
    /// LED count is zero or wider than a 32-bit mask
    InvalidLedCount(u32),
    /// Frame period is zero
    ZeroFramePeriod,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroDisplayDimension => write!(f, "display dimensions must be non-zero"),
            ConfigError::ZeroZoom => write!(f, "zoom.min must be at least 1"),
            ConfigError::InvertedZoomRange { min, max } => {
                write!(f, "zoom.min ({}) is above zoom.max ({})", min, max)
            }
            ConfigError::ZoomExceedsDisplay { max, limit } => write!(
                f,
                "zoom.max ({}) exceeds the smallest display dimension ({})",
                max, limit
            ),
            ConfigError::ButtonConflict(button) => write!(
                f,
                "confirm and quit are both bound to the {} button",
                button.name()
            ),
            ConfigError::InvalidLedCount(count) => {
                write!(f, "indicator.led_count must be 1..=32, got {}", count)
            }
            ConfigError::ZeroFramePeriod => write!(f, "timing.frame_period_ms must be non-zero"),
        }
    }
}

impl core::error::Error for ConfigError {}

/// Display geometry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DisplayConfig {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            width: LCD_WIDTH,
            height: LCD_HEIGHT,
        }
    }
}

impl DisplayConfig {
    /// Number of pixels in one frame
    pub const fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

/// Zoom knob range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ZoomConfig {
    /// Magnification with the knob at 0
    pub min: u32,
    /// Magnification with the knob at 255
    pub max: u32,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            min: 1,
            max: MAX_MAGNIFICATION,
        }
    }
}

/// Button bindings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ButtonConfig {
    /// Enters the live view from the title menu
    pub confirm: Button,
    /// Exits from any state
    pub quit: Button,
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self {
            confirm: Button::Green,
            quit: Button::Blue,
        }
    }
}

/// LED level indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct IndicatorConfig {
    /// LEDs on the line (1-32)
    pub led_count: u32,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            led_count: LED_LINE_COUNT,
        }
    }
}

/// Startup LED animation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AnimationConfig {
    /// Play the animation at startup
    pub enabled: bool,
    /// Sweep shape
    pub style: SweepStyle,
    /// Number of full sweeps
    pub cycles: u32,
    /// Delay between steps (ms)
    pub step_ms: u32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            style: SweepStyle::Bounce,
            cycles: 3,
            step_ms: ANIMATION_STEP_MS,
        }
    }
}

/// Main loop timing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TimingConfig {
    /// Fixed sleep after every poll (ms)
    pub frame_period_ms: u32,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            frame_period_ms: FRAME_PERIOD_MS,
        }
    }
}

/// Complete magnifier configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct XmagConfig {
    /// Display geometry
    pub display: DisplayConfig,
    /// Zoom range
    pub zoom: ZoomConfig,
    /// Button bindings
    pub buttons: ButtonConfig,
    /// LED level indicator
    pub indicator: IndicatorConfig,
    /// Startup animation
    pub animation: AnimationConfig,
    /// Loop timing
    pub timing: TimingConfig,
}

impl XmagConfig {
    /// Check the configuration for values the loop cannot run with
    ///
    /// A valid configuration guarantees a viewport window of at least one
    /// pixel on both axes for every zoom the knob can select.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let display = &self.display;
        if display.width == 0 || display.height == 0 {
            return Err(ConfigError::ZeroDisplayDimension);
        }

        let zoom = &self.zoom;
        if zoom.min == 0 {
            return Err(ConfigError::ZeroZoom);
        }
        if zoom.min > zoom.max {
            return Err(ConfigError::InvertedZoomRange {
                min: zoom.min,
                max: zoom.max,
            });
        }
        let limit = display.width.min(display.height);
        if zoom.max > limit {
            return Err(ConfigError::ZoomExceedsDisplay {
                max: zoom.max,
                limit,
            });
        }

        if self.buttons.confirm == self.buttons.quit {
            return Err(ConfigError::ButtonConflict(self.buttons.quit));
        }

        let leds = self.indicator.led_count;
        if leds == 0 || leds > LED_LINE_COUNT {
            return Err(ConfigError::InvalidLedCount(leds));
        }

        if self.timing.frame_period_ms == 0 {
            return Err(ConfigError::ZeroFramePeriod);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = XmagConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.display.pixel_count(), 480 * 320);
    }

    #[test]
    fn test_zero_display() {
        let mut config = XmagConfig::default();
        config.display.height = 0;
        assert_eq!(config.validate(), Err(ConfigError::ZeroDisplayDimension));
    }

    #[test]
    fn test_zoom_range_checks() {
        let mut config = XmagConfig::default();
        config.zoom.min = 0;
        assert_eq!(config.validate(), Err(ConfigError::ZeroZoom));

        config.zoom = ZoomConfig { min: 9, max: 3 };
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvertedZoomRange { min: 9, max: 3 })
        );

        config.zoom = ZoomConfig { min: 1, max: 400 };
        assert_eq!(
            config.validate(),
            Err(ConfigError::ZoomExceedsDisplay {
                max: 400,
                limit: 320
            })
        );
    }

    #[test]
    fn test_button_conflict() {
        let mut config = XmagConfig::default();
        config.buttons.confirm = Button::Blue;
        assert_eq!(
            config.validate(),
            Err(ConfigError::ButtonConflict(Button::Blue))
        );
    }

    #[test]
    fn test_led_count_bounds() {
        let mut config = XmagConfig::default();
        config.indicator.led_count = 0;
        assert_eq!(config.validate(), Err(ConfigError::InvalidLedCount(0)));
        config.indicator.led_count = 33;
        assert_eq!(config.validate(), Err(ConfigError::InvalidLedCount(33)));
    }

    #[test]
    fn test_zero_frame_period() {
        let mut config = XmagConfig::default();
        config.timing.frame_period_ms = 0;
        assert_eq!(config.validate(), Err(ConfigError::ZeroFramePeriod));
    }
}
