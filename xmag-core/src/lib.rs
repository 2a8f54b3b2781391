//! Board-agnostic core logic for the X-Mag magnifier
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Input word decoding and knob-to-coordinate scaling
//! - Viewport mapping (zoom window placement and edge clamping)
//! - LED level indicator and startup animation script
//! - Application state machine (title, live view, exit)
//! - Configuration type definitions and validation
//!
//! Every function here is total over its integer inputs: nothing in the
//! per-frame path can fail or panic once the loop is running.

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod geometry;
pub mod indicator;
pub mod input;
pub mod state;
