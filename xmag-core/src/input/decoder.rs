//! Input word decoder
//!
//! Register layout (knobs 8-bit register):
//!
//! ```text
//!  31     27 26  25  24 23      16 15       8 7        0
//! ┌─────────┬───┬───┬───┬──────────┬──────────┬──────────┐
//! │reserved │ R │ G │ B │ red knob │green knob│ blue knob│
//! └─────────┴───┴───┴───┴──────────┴──────────┴──────────┘
//!            buttons      zoom axis   y axis     x axis
//! ```

/// Bit offset of the first button in the raw word
const BUTTON_SHIFT: u32 = 24;

/// Mask of all button bits once shifted down
const BUTTON_MASK: u8 = 0b111;

/// Knob push buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Button {
    /// Blue knob button (bit 24)
    Blue,
    /// Green knob button (bit 25)
    Green,
    /// Red knob button (bit 26)
    Red,
}

impl Button {
    /// All buttons, in bit order
    pub const ALL: [Button; 3] = [Button::Blue, Button::Green, Button::Red];

    /// Index of this button within the button field
    pub const fn index(self) -> u8 {
        match self {
            Button::Blue => 0,
            Button::Green => 1,
            Button::Red => 2,
        }
    }

    /// Mask of this button in the raw register word
    pub const fn raw_mask(self) -> u32 {
        1 << (BUTTON_SHIFT + self.index() as u32)
    }

    /// Lowercase name, as used in configuration files
    pub const fn name(self) -> &'static str {
        match self {
            Button::Blue => "blue",
            Button::Green => "green",
            Button::Red => "red",
        }
    }
}

/// Set of pressed buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Buttons(u8);

impl Buttons {
    /// No button pressed
    pub const NONE: Buttons = Buttons(0);

    /// Build a set from the low three bits of `bits`
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits & BUTTON_MASK)
    }

    /// Raw bits, bit 0 = blue
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Return a copy of this set with `button` pressed
    pub const fn with(self, button: Button) -> Self {
        Self(self.0 | (1 << button.index()))
    }

    /// Check whether `button` is pressed
    pub const fn contains(self, button: Button) -> bool {
        self.0 & (1 << button.index()) != 0
    }

    /// Check whether no button is pressed
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterate over the pressed buttons
    pub fn iter(self) -> impl Iterator<Item = Button> {
        Button::ALL.into_iter().filter(move |b| self.contains(*b))
    }
}

/// One decoded sample of the input register
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InputState {
    /// Horizontal axis (blue knob, bits 7:0)
    pub x_axis: u8,
    /// Vertical axis (green knob, bits 15:8)
    pub y_axis: u8,
    /// Zoom axis (red knob, bits 23:16)
    pub zoom_axis: u8,
    /// Pressed buttons (bits 26:24)
    pub buttons: Buttons,
}

impl InputState {
    /// Pack this state back into a raw register word
    ///
    /// Reserved bits are left clear.
    pub const fn to_raw(&self) -> u32 {
        (self.x_axis as u32)
            | ((self.y_axis as u32) << 8)
            | ((self.zoom_axis as u32) << 16)
            | ((self.buttons.bits() as u32) << BUTTON_SHIFT)
    }

    /// Check whether `button` is pressed
    pub const fn pressed(&self, button: Button) -> bool {
        self.buttons.contains(button)
    }
}

/// Decode a raw input register word
///
/// Every 32-bit value is valid; reserved bits are ignored.
pub const fn decode(raw: u32) -> InputState {
    InputState {
        x_axis: (raw & 0xff) as u8,
        y_axis: ((raw >> 8) & 0xff) as u8,
        zoom_axis: ((raw >> 16) & 0xff) as u8,
        buttons: Buttons::from_bits((raw >> BUTTON_SHIFT) as u8),
    }
}
