//! Directory listing.
//!
//! Child names are re-queried on every call; a listing is never cached or
//! treated as a snapshot of the directory.

use crate::error::{Result, SyncError};
use std::ffi::OsString;
use std::fs;
use std::path::Path;

/// List the immediate child names of a directory.
///
/// No recursion, no hidden-file filtering, no sorting beyond the
/// filesystem's enumeration order. Errors (missing or unreadable
/// directory) propagate to the caller.
pub fn child_names(dir: &Path) -> Result<Vec<OsString>> {
    let entries = fs::read_dir(dir).map_err(|e| SyncError::io(dir, e))?;
    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| SyncError::io(dir, e))?;
        names.push(entry.file_name());
    }
    Ok(names)
}
