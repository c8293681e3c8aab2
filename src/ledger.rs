//! Failure Ledger
//!
//! Accumulates the paths whose delete or copy failed during one run.
//! Owned by the run context and threaded through every call rather than
//! living in process-wide state; read once at the end for the summary.

use serde::Serialize;
use std::path::{Path, PathBuf};

/// Record of delete and copy failures for one run. Append-only.
#[derive(Debug, Default, Clone, Serialize)]
pub struct FailureLedger {
    failed_deletes: Vec<PathBuf>,
    failed_copies: Vec<PathBuf>,
}

impl FailureLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_delete_failure(&mut self, path: &Path) {
        self.failed_deletes.push(path.to_path_buf());
    }

    pub fn record_copy_failure(&mut self, path: &Path) {
        self.failed_copies.push(path.to_path_buf());
    }

    pub fn failed_deletes(&self) -> &[PathBuf] {
        &self.failed_deletes
    }

    pub fn failed_copies(&self) -> &[PathBuf] {
        &self.failed_copies
    }

    pub fn is_empty(&self) -> bool {
        self.failed_deletes.is_empty() && self.failed_copies.is_empty()
    }
}
