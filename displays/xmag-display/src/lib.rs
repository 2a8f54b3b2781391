//! Rendering for the X-Mag magnifier
//!
//! This crate provides:
//! - [`Pixel`] - RGB565 colour with HSV construction
//! - [`Raster`] - owned pixel buffer used for both the source image and
//!   the frame buffer, drawable with `embedded-graphics`
//! - [`blit_magnified`] - integer zoom copy from source to frame
//! - [`TitleScreen`] - the start/quit menu
//! - [`flush`] - push a whole frame over a [`xmag_hal::DisplayBus`]
//!
//! # Frame pipeline
//!
//! ```text
//! source ──blit_magnified──▶ frame ──flush──▶ DisplayBus
//!                              ▲
//!            TitleScreen ──────┘
//! ```

#![no_std]
#![deny(unsafe_code)]

extern crate alloc;

pub mod blit;
pub mod menu;
pub mod pixel;
pub mod present;
pub mod raster;
pub mod text;

// Re-export key types
pub use blit::{blit_magnified, render_live_view};
pub use menu::{button_color, MenuItem, TitleScreen};
pub use pixel::Pixel;
pub use present::flush;
pub use raster::{FrameBuffer, Raster, RasterError};
pub use text::Scaled;
