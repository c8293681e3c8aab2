//! Sync engine.
//!
//! Per-directory reconciliation: list both sides, classify every child
//! name for deletion, copy, or descent, then execute all deletions before
//! any copy. Descent runs off an explicit stack of pending directory
//! pairs, so tree depth does not consume call stack.

use crate::error::Result;
use crate::fileops::{self, RunContext};
use crate::listing;
use crate::nameset;
use std::ffi::OsString;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Reconciliation outcome for one directory level. Recomputed fresh at
/// every level, never persisted.
#[derive(Debug, Default)]
pub struct ReconciliationPlan {
    /// Names to copy from source into target.
    pub copy_names: Vec<OsString>,
    /// Names to remove from target. Deletions execute before any copy.
    pub delete_names: Vec<OsString>,
    /// Unchanged directories present on both sides, scheduled for descent.
    pub recurse_names: Vec<OsString>,
}

impl ReconciliationPlan {
    /// True when the level needs no mutation (descent may still happen).
    pub fn is_empty(&self) -> bool {
        self.copy_names.is_empty() && self.delete_names.is_empty()
    }
}

/// Compute the reconciliation plan for one directory pair.
///
/// Names only in source are copied wholesale; names only in target are
/// deleted wholesale. A same-named pair of regular files is stale when
/// the source side's modification time is strictly newer (nanosecond
/// resolution); a name whose kind differs between the sides (file vs
/// directory) is a type conflict. Both cases queue the name for deletion
/// and for copy, and a name is never queued twice for deletion.
pub fn plan_directory(source: &Path, target: &Path) -> Result<ReconciliationPlan> {
    let source_names = listing::child_names(source)?;
    let target_names = listing::child_names(target)?;

    let mut copy_names = nameset::difference(&source_names, &target_names);
    let mut delete_names = nameset::difference(&target_names, &source_names);
    let common = nameset::intersection(&source_names, &target_names);

    for name in &common {
        let source_entry = source.join(name);
        let target_entry = target.join(name);
        if is_stale_file(&source_entry, &target_entry) {
            delete_names.push(name.clone());
            copy_names.push(name.clone());
        }
        if is_type_conflict(&source_entry, &target_entry) && !delete_names.contains(name) {
            // The replacement may be a different kind entirely, so the
            // old entry must be fully removed before its copy runs.
            delete_names.push(name.clone());
            copy_names.push(name.clone());
        }
    }

    let unchanged = nameset::difference(&common, &copy_names);
    let recurse_names = unchanged
        .into_iter()
        .filter(|name| source.join(name).is_dir() && target.join(name).is_dir())
        .collect();

    Ok(ReconciliationPlan {
        copy_names,
        delete_names,
        recurse_names,
    })
}

/// Both sides are regular files and source's mtime is strictly newer.
/// Same-named directories are never compared at this granularity.
fn is_stale_file(source: &Path, target: &Path) -> bool {
    let source_meta = match fs::metadata(source) {
        Ok(meta) => meta,
        Err(_) => return false,
    };
    let target_meta = match fs::metadata(target) {
        Ok(meta) => meta,
        Err(_) => return false,
    };
    if !source_meta.is_file() || !target_meta.is_file() {
        return false;
    }
    match (source_meta.modified(), target_meta.modified()) {
        (Ok(source_mtime), Ok(target_mtime)) => source_mtime > target_mtime,
        _ => false,
    }
}

fn is_type_conflict(source: &Path, target: &Path) -> bool {
    (source.is_file() && target.is_dir()) || (source.is_dir() && target.is_file())
}

/// Reconcile `target` against `source`, depth-first.
///
/// Each level executes its deletions, then its copies, then schedules
/// descent into sub-directories left unmodified at that level. Listing
/// errors propagate to the caller; per-entry delete/copy failures land in
/// the run context's ledger and do not stop the run.
pub fn sync(ctx: &mut RunContext, source: &Path, target: &Path) -> Result<()> {
    let mut pending = vec![(source.to_path_buf(), target.to_path_buf())];

    while let Some((source_dir, target_dir)) = pending.pop() {
        let plan = plan_directory(&source_dir, &target_dir)?;
        debug!(
            source = %source_dir.display(),
            copies = plan.copy_names.len(),
            deletes = plan.delete_names.len(),
            descents = plan.recurse_names.len(),
            "reconciling directory"
        );

        for name in &plan.delete_names {
            fileops::delete_path(ctx, &target_dir.join(name));
        }
        for name in &plan.copy_names {
            fileops::copy_path(ctx, &source_dir.join(name), &target_dir);
        }
        // Pushed in reverse so the stack pops siblings in listing order.
        for name in plan.recurse_names.iter().rev() {
            pending.push((source_dir.join(name), target_dir.join(name)));
        }
    }

    Ok(())
}
