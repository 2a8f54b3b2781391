//! Configuration types
//!
//! Board-agnostic configuration structures. The firmware reads them from
//! TOML; every section has defaults matching the MZ_APO board.

pub mod types;

pub use types::*;
