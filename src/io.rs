//! Byte-stream file I/O for callers that work with paths (`std` only).
//!
//! The transforms themselves are I/O-free; these helpers cover the common
//! read-transform-write loop and the "pick a fresh output name" step.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::TintError;

/// Read a whole file into an owned byte buffer.
///
/// A missing file maps to [`TintError::NotFound`]; any other failure is
/// propagated as [`TintError::Io`].
pub fn read_bytes(path: impl AsRef<Path>) -> Result<Vec<u8>, TintError> {
    let path = path.as_ref();
    fs::read(path).map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            TintError::NotFound(path.to_path_buf())
        } else {
            TintError::Io(e)
        }
    })
}

/// Write a byte buffer to a file, creating or truncating it.
pub fn write_bytes(path: impl AsRef<Path>, data: &[u8]) -> Result<(), TintError> {
    fs::write(path, data)?;
    Ok(())
}

/// First `stem_{n}.ext` sibling of `path` (n = 1, 2, …) that does not
/// exist yet. Used to pick an output name that won't clobber the source.
pub fn unique_destination(path: impl AsRef<Path>) -> PathBuf {
    let path = path.as_ref();
    let stem = path.file_stem().unwrap_or_default().to_os_string();
    let ext = path.extension();

    let mut count: u32 = 1;
    loop {
        let mut name = stem.clone();
        name.push(format!("_{count}"));
        let mut candidate = path.with_file_name(name);
        if let Some(ext) = ext {
            candidate.set_extension(ext);
        }
        if !candidate.exists() {
            return candidate;
        }
        count += 1;
    }
}
