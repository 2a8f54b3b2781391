//! Events derived from one input sample

use crate::config::ButtonConfig;
use crate::input::InputState;

/// Events that can trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// No bound button is held
    Idle,
    /// Confirm button held (enter the live view)
    Confirm,
    /// Quit button held (leave from any state)
    Quit,
}

impl Event {
    /// Derive the event for one poll
    ///
    /// Buttons are level-triggered. Quit wins when both bound buttons are
    /// held so that leaving is always possible.
    pub fn from_input(input: &InputState, buttons: &ButtonConfig) -> Self {
        if input.pressed(buttons.quit) {
            Event::Quit
        } else if input.pressed(buttons.confirm) {
            Event::Confirm
        } else {
            Event::Idle
        }
    }
}
