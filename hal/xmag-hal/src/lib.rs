//! X-Mag Hardware Abstraction Layer
//!
//! This crate defines the narrow hardware capabilities the magnifier needs.
//! Board crates implement them over real registers; tests implement them
//! over plain memory.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (xmag-firmware)            │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  xmag-hal (this crate - traits)         │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │ xmag-hal-     │       │  test fakes   │
//! │    mzapo      │       │               │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`input::InputRegister`] - Knob and button word
//! - [`led::LedLine`] - Linear LED array
//! - [`display::DisplayBus`] - Raster-order pixel stream to the LCD
//! - [`Board`] - Everything above, as one bound

#![no_std]
#![deny(unsafe_code)]

pub mod display;
pub mod input;
pub mod led;

// Re-export key traits at crate root for convenience
pub use display::DisplayBus;
pub use input::InputRegister;
pub use led::LedLine;

/// A board that provides every capability the magnifier loop uses
pub trait Board: InputRegister + LedLine + DisplayBus {}

// Blanket implementation for types that implement all three traits
impl<T: InputRegister + LedLine + DisplayBus> Board for T {}
