//! Physical register windows
//!
//! Maps a range of physical addresses through `/dev/mem` and exposes
//! volatile accessors with bounds checks. Reads and writes outside the
//! window are dropped (writes) or return zero (reads) and log a warning
//! rather than touching unmapped memory.

use std::fs::{File, OpenOptions};
use std::io;
use std::os::unix::fs::OpenOptionsExt;
use std::path::{Path, PathBuf};

use memmap2::{MmapMut, MmapOptions};
use thiserror::Error;
use tracing::{debug, warn};

/// Device exposing physical memory
pub const DEV_MEM: &str = "/dev/mem";

/// Failure to map a peripheral
#[derive(Debug, Error)]
pub enum MapError {
    #[error("cannot open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot map {len:#x} bytes at {base:#010x}: {source}")]
    Map {
        base: u64,
        len: usize,
        #[source]
        source: io::Error,
    },
}

/// A mapped register block
pub struct PhysMapping {
    base: u64,
    map: MmapMut,
}

impl PhysMapping {
    /// Map `len` bytes of physical memory starting at `base`
    ///
    /// `base` must be page aligned, which every MZ_APO peripheral base is.
    pub fn map(base: u64, len: usize) -> Result<Self, MapError> {
        Self::map_file(Path::new(DEV_MEM), base, len)
    }

    /// Map a window of an arbitrary file, e.g. a scratch file in tests
    pub fn map_file(path: &Path, base: u64, len: usize) -> Result<Self, MapError> {
        let file = open_sync(path).map_err(|source| MapError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        // SAFETY: the mapping is owned by this struct and only accessed
        // through the volatile, bounds-checked methods below. Other
        // processes may write the same registers; that is the nature of
        // device memory and is not undefined behaviour for volatile access.
        let map = unsafe { MmapOptions::new().offset(base).len(len).map_mut(&file) }
            .map_err(|source| MapError::Map { base, len, source })?;

        debug!(base = format_args!("{:#010x}", base), len, "mapped register window");
        Ok(Self { base, map })
    }

    /// Physical address of the first mapped byte
    pub fn base(&self) -> u64 {
        self.base
    }

    /// Mapped size in bytes
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// True for a zero-length mapping
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    fn in_bounds(&self, offset: usize, width: usize) -> bool {
        let ok = offset % width == 0
            && offset
                .checked_add(width)
                .is_some_and(|end| end <= self.map.len());
        if !ok {
            warn!(
                base = format_args!("{:#010x}", self.base),
                offset, width, "register access outside mapped window"
            );
        }
        ok
    }

    /// Volatile 32-bit read at a byte offset
    pub fn read_u32(&self, offset: usize) -> u32 {
        if !self.in_bounds(offset, 4) {
            return 0;
        }
        // SAFETY: offset is aligned and inside the mapping
        unsafe { self.map.as_ptr().add(offset).cast::<u32>().read_volatile() }
    }

    /// Volatile 32-bit write at a byte offset
    pub fn write_u32(&mut self, offset: usize, value: u32) {
        if !self.in_bounds(offset, 4) {
            return;
        }
        // SAFETY: offset is aligned and inside the mapping
        unsafe {
            self.map
                .as_mut_ptr()
                .add(offset)
                .cast::<u32>()
                .write_volatile(value)
        }
    }

    /// Volatile 16-bit write at a byte offset
    pub fn write_u16(&mut self, offset: usize, value: u16) {
        if !self.in_bounds(offset, 2) {
            return;
        }
        // SAFETY: offset is aligned and inside the mapping
        unsafe {
            self.map
                .as_mut_ptr()
                .add(offset)
                .cast::<u16>()
                .write_volatile(value)
        }
    }
}

fn open_sync(path: &Path) -> io::Result<File> {
    OpenOptions::new()
        .read(true)
        .write(true)
        // Uncached access so register writes reach the FPGA in order
        .custom_flags(libc::O_SYNC)
        .open(path)
}
