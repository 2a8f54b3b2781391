//! Knob and button input
//!
//! The board samples three 8-bit knobs and their push buttons into one
//! register word. [`decode`] splits that word; the [`scale`] functions map
//! the 8-bit axes onto screen coordinates and zoom factors.

pub mod decoder;
pub mod scale;

pub use decoder::{decode, Button, Buttons, InputState};
pub use scale::{axis_to_coordinate, axis_to_zoom};
