//! File operations.
//!
//! Single-subtree delete and copy primitives. Failures are recorded into
//! the run's failure ledger instead of propagating, so a single bad entry
//! never aborts the run.

pub mod force_delete;

use crate::fileops::force_delete::ForceDelete;
use crate::ledger::FailureLedger;
use filetime::FileTime;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// Run-scoped state threaded through the engine and the file operations:
/// the failure ledger, the per-path logging flag, and the forced-delete
/// capability selected once at startup.
pub struct RunContext {
    pub ledger: FailureLedger,
    /// When set, emit an info line naming each path before it is deleted
    /// or copied. Toggled per task from its `logEnable` setting.
    pub log_paths: bool,
    pub force_delete: Box<dyn ForceDelete>,
}

impl RunContext {
    pub fn new(force_delete: Box<dyn ForceDelete>) -> Self {
        Self {
            ledger: FailureLedger::new(),
            log_paths: false,
            force_delete,
        }
    }
}

impl Default for RunContext {
    fn default() -> Self {
        Self::new(force_delete::platform_default())
    }
}

/// Delete a file or an entire directory subtree.
///
/// A permission-denied failure is retried through the run's forced-delete
/// capability; any remaining failure is recorded in the ledger and the
/// call returns normally.
pub fn delete_path(ctx: &mut RunContext, path: &Path) {
    if ctx.log_paths {
        info!("delete {}", path.display());
    } else {
        debug!("delete {}", path.display());
    }

    let result = if path.is_file() {
        fs::remove_file(path)
    } else {
        fs::remove_dir_all(path)
    };

    match result {
        Ok(()) => {}
        Err(e) if e.kind() == io::ErrorKind::PermissionDenied => {
            if let Err(forced) = ctx.force_delete.force_delete(path) {
                warn!("delete failed for {}: {} ({})", path.display(), e, forced);
                ctx.ledger.record_delete_failure(path);
            }
        }
        Err(e) => {
            warn!("delete failed for {}: {}", path.display(), e);
            ctx.ledger.record_delete_failure(path);
        }
    }
}

/// Copy a file into `target_dir` under its base name, or a directory
/// subtree into `target_dir/<base name>`.
///
/// Permission bits and modification times are preserved on everything
/// copied. Failures record the source path in the ledger and the call
/// returns normally.
pub fn copy_path(ctx: &mut RunContext, source: &Path, target_dir: &Path) {
    if ctx.log_paths {
        info!("copy {}", source.display());
    } else {
        debug!("copy {}", source.display());
    }

    let result = if source.is_file() {
        copy_file_into(source, target_dir)
    } else {
        copy_tree_into(source, target_dir)
    };

    if let Err(e) = result {
        warn!("copy failed for {}: {}", source.display(), e);
        ctx.ledger.record_copy_failure(source);
    }
}

fn base_name(source: &Path) -> io::Result<&std::ffi::OsStr> {
    source.file_name().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("source has no base name: {}", source.display()),
        )
    })
}

fn copy_file_into(source: &Path, target_dir: &Path) -> io::Result<()> {
    let dest = target_dir.join(base_name(source)?);
    fs::copy(source, &dest)?;
    let meta = fs::metadata(source)?;
    filetime::set_file_mtime(&dest, FileTime::from_last_modification_time(&meta))?;
    Ok(())
}

fn copy_tree_into(source: &Path, target_dir: &Path) -> io::Result<()> {
    let dest_root = target_dir.join(base_name(source)?);

    // Directory mtimes are applied deepest-first after their contents are
    // written; writing children would otherwise refresh them.
    let mut dir_times: Vec<(PathBuf, FileTime)> = Vec::new();

    for entry in WalkDir::new(source) {
        let entry = entry?;
        let rel = entry
            .path()
            .strip_prefix(source)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        let dest = dest_root.join(rel);
        let meta = entry.metadata()?;
        if meta.is_dir() {
            fs::create_dir_all(&dest)?;
            fs::set_permissions(&dest, meta.permissions())?;
            dir_times.push((dest, FileTime::from_last_modification_time(&meta)));
        } else {
            fs::copy(entry.path(), &dest)?;
            filetime::set_file_mtime(&dest, FileTime::from_last_modification_time(&meta))?;
        }
    }

    for (dir, mtime) in dir_times.into_iter().rev() {
        filetime::set_file_mtime(&dir, mtime)?;
    }
    Ok(())
}
