//! Application state machine
//!
//! Gates the live viewer behind the title menu. The state machine is
//! explicit, finite, and deterministic; button levels are the only input.

pub mod events;
pub mod machine;

pub use events::Event;
pub use machine::AppState;
