//! Viewport geometry
//!
//! Converts a pointer position and zoom factor into the rectangle of the
//! source raster that is visible after magnification.

pub mod viewport;

pub use viewport::{compute_viewport, plan_viewport, Viewport, Window};
