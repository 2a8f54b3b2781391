//! State machine definition
//!
//! What the loop renders is a function of the current state only.

use super::events::Event;

/// Application states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AppState {
    /// Title menu is shown, waiting for confirm or quit
    #[default]
    Title,
    /// Magnified image follows the knobs
    LiveView,
    /// Loop is ending; terminal
    Exiting,
}

impl AppState {
    /// Check if this is the terminal state
    pub fn is_terminal(&self) -> bool {
        matches!(self, AppState::Exiting)
    }

    /// Process an event and return the next state
    ///
    /// Because buttons are level-triggered the same event repeats every
    /// poll while held; every transition target is idempotent under that.
    pub fn transition(self, event: Event) -> Self {
        use AppState::*;
        use Event::*;

        match (self, event) {
            // Exiting is terminal
            (Exiting, _) => Exiting,

            // Quit is a global override
            (_, Quit) => Exiting,

            // Title transitions
            (Title, Confirm) => LiveView,

            // Default: stay in current state
            _ => self,
        }
    }
}
