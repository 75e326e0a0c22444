//! Loading inputs as byte buffers that views can borrow.

use anyhow::{Context, Result};
use memmap2::Mmap;
use std::fs::File;
use std::io::{self, Read};
use std::ops::Deref;
use std::path::Path;

/// Bytes of one input, either memory-mapped or read into memory.
///
/// Views over an `Input` borrow it, so the mapping outlives every view.
pub enum Input {
    Mapped(Mmap),
    Owned(Vec<u8>),
}

impl Deref for Input {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        match self {
            Input::Mapped(map) => map,
            Input::Owned(bytes) => bytes,
        }
    }
}

impl Input {
    /// Memory-map a file. Empty files are not mapped.
    pub fn open(path: &Path) -> Result<Self> {
        let file =
            File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
        let len = file
            .metadata()
            .with_context(|| format!("failed to stat {}", path.display()))?
            .len();

        if len == 0 {
            return Ok(Input::Owned(Vec::new()));
        }

        // SAFETY: the mapping is read-only; a concurrent writer truncating
        // the file is outside this process' control, as with any reader.
        let map = unsafe { Mmap::map(&file) }
            .with_context(|| format!("failed to map {}", path.display()))?;

        Ok(Input::Mapped(map))
    }

    /// Read all of stdin.
    pub fn stdin() -> Result<Self> {
        let mut bytes = Vec::new();
        io::stdin()
            .read_to_end(&mut bytes)
            .context("failed to read from stdin")?;
        Ok(Input::Owned(bytes))
    }
}
