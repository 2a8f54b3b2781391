//! Single-user lock
//!
//! The board is shared by several programs that all drive the same LCD and
//! LEDs. Each takes an exclusive advisory lock on a common file for as long
//! as it owns the hardware.

use std::fs::{File, OpenOptions, TryLockError};
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info, warn};

/// Lock file shared by programs that use the MZ_APO peripherals
pub const DEFAULT_LOCK_PATH: &str = "/tmp/mzapo-serialize.lock";

/// Failure to take the board lock
#[derive(Debug, Error)]
pub enum LockError {
    /// The lock file could not be created or opened
    #[error("cannot open lock file {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Another process holds the lock and waiting was not requested
    #[error("system is occupied: {path} is held by another process")]
    Busy { path: PathBuf },
    /// Locking failed for a reason other than contention
    #[error("cannot lock {path}: {source}")]
    Lock {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Exclusive hold on the board, released on drop
#[derive(Debug)]
pub struct SerializeLock {
    file: File,
    path: PathBuf,
}

impl SerializeLock {
    /// Take the lock at `path`
    ///
    /// If another process holds it, logs that the system is occupied and
    /// then either blocks until it is released (`wait`) or returns
    /// [`LockError::Busy`].
    pub fn acquire(path: impl AsRef<Path>, wait: bool) -> Result<Self, LockError> {
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&path)
            .map_err(|source| LockError::Open {
                path: path.clone(),
                source,
            })?;

        match file.try_lock() {
            Ok(()) => {}
            Err(TryLockError::WouldBlock) => {
                warn!(path = %path.display(), "system is occupied");
                if !wait {
                    return Err(LockError::Busy { path });
                }
                info!("waiting for the board to be released");
                file.lock().map_err(|source| LockError::Lock {
                    path: path.clone(),
                    source,
                })?;
            }
            Err(TryLockError::Error(source)) => {
                return Err(LockError::Lock { path, source });
            }
        }

        debug!(path = %path.display(), "board lock acquired");
        Ok(Self { file, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for SerializeLock {
    fn drop(&mut self) {
        if let Err(err) = self.file.unlock() {
            warn!(path = %self.path.display(), %err, "failed to release board lock");
        } else {
            debug!(path = %self.path.display(), "board lock released");
        }
    }
}
