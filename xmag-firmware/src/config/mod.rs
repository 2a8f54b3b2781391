//! Firmware configuration
//!
//! The board-agnostic sections live in [`xmag_core::config::XmagConfig`];
//! this adds what only the MZ_APO binary needs: where the source image
//! comes from and which lock file guards the board.

pub mod loader;

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use xmag_core::config::{XmagConfig, LCD_HEIGHT, LCD_WIDTH};
use xmag_hal_mzapo::lock::DEFAULT_LOCK_PATH;

pub use loader::load_config;

/// Everything read from xmag.toml
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FirmwareConfig {
    #[serde(flatten)]
    pub core: XmagConfig,
    pub asset: AssetConfig,
    pub lock: LockConfig,
}

/// Source image
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetConfig {
    /// Raw RGB565 little-endian file; `None` selects the test card
    pub path: Option<PathBuf>,
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            path: None,
            width: LCD_WIDTH,
            height: LCD_HEIGHT,
        }
    }
}

/// Board lock
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LockConfig {
    /// Lock file shared with other board programs
    pub path: PathBuf,
    /// Block until the board is free instead of giving up
    pub wait: bool,
}

impl Default for LockConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_LOCK_PATH),
            wait: true,
        }
    }
}
