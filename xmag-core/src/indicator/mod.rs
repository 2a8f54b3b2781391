//! LED line output
//!
//! Two independent producers of LED masks:
//!
//! - [`level`] - steady-state bar graph of the zoom factor
//! - [`animation`] - one-shot startup sweep

pub mod animation;
pub mod level;

pub use animation::{LedStep, StartupAnimation, SweepStyle};
pub use level::{fill_mask, led_pattern};
