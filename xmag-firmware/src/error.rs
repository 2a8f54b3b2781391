//! Startup error taxonomy
//!
//! Anything that stops the magnifier from reaching its frame loop ends up
//! as a [`StartupError`]; `main` logs it and exits non-zero.

use std::io;
use std::path::PathBuf;

use thiserror::Error;
use xmag_core::config::ConfigError;
use xmag_display::RasterError;
use xmag_hal_mzapo::{LockError, MapError};

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("configuration: {0}")]
    Config(#[from] ConfigLoadError),
    #[error(transparent)]
    Lock(#[from] LockError),
    #[error("frame buffer: {0}")]
    AllocationFailure(#[from] RasterError),
    #[error("source image: {0}")]
    Asset(#[from] AssetError),
    #[error("peripheral mapping: {0}")]
    PeripheralMapFailure(#[from] MapError),
}

#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot parse {origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: toml::de::Error,
    },
    #[error(transparent)]
    Invalid(#[from] ConfigError),
}

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{path} holds {actual} bytes, expected {expected} for {width}x{height} RGB565")]
    SizeMismatch {
        path: PathBuf,
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
    #[error(transparent)]
    Raster(#[from] RasterError),
}
