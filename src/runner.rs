//! Task runner: validates and executes configured mirroring tasks.
//!
//! Invalid tasks are skipped with a reason, a task whose listing fails is
//! marked failed and the run moves on to the next task. Completing every
//! reconcilable task matters more than stopping early.

use crate::config::{self, SyncConfig, TaskConfig};
use crate::engine;
use crate::error::{Result, SyncError};
use crate::fileops::RunContext;
use crate::ledger::FailureLedger;
use serde::Serialize;
use tracing::{error, info, warn};

/// A task that did not complete, with the reason it did not.
#[derive(Debug, Clone, Serialize)]
pub struct TaskFailure {
    pub name: String,
    pub reason: String,
}

/// Outcome of one run over the configured task list.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunSummary {
    pub completed: Vec<String>,
    pub skipped: Vec<TaskFailure>,
    pub failed: Vec<TaskFailure>,
    pub ledger: FailureLedger,
}

impl RunSummary {
    /// True when every task completed and no delete/copy failed.
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty() && self.failed.is_empty() && self.ledger.is_empty()
    }
}

/// Run every configured task, or a single named one.
///
/// The failure ledger spans the whole run; per-task outcomes are
/// accumulated into the returned summary. Only an unknown `--task` name
/// is an error.
pub fn run_tasks(config: &SyncConfig, only: Option<&str>) -> Result<RunSummary> {
    let tasks: Vec<&TaskConfig> = match only {
        Some(name) => {
            let selected: Vec<&TaskConfig> =
                config.tasks.iter().filter(|t| t.name == name).collect();
            if selected.is_empty() {
                return Err(SyncError::UnknownTask(name.to_string()));
            }
            selected
        }
        None => config.tasks.iter().collect(),
    };

    let mut ctx = RunContext::default();
    let mut summary = RunSummary::default();

    for task in tasks {
        if let Err(reason) = config::validate_task(task) {
            warn!("skipping task '{}': {}", task.name, reason);
            summary.skipped.push(TaskFailure {
                name: task.name.clone(),
                reason,
            });
            continue;
        }

        info!("running task '{}'", task.name);
        match run_single(&mut ctx, task) {
            Ok(()) => summary.completed.push(task.name.clone()),
            Err(e) => {
                error!("task '{}' failed: {}", task.name, e);
                summary.failed.push(TaskFailure {
                    name: task.name.clone(),
                    reason: e.to_string(),
                });
            }
        }
    }

    summary.ledger = std::mem::take(&mut ctx.ledger);
    Ok(summary)
}

fn run_single(ctx: &mut RunContext, task: &TaskConfig) -> Result<()> {
    let source =
        dunce::canonicalize(&task.source).map_err(|e| SyncError::io(&task.source, e))?;
    let target =
        dunce::canonicalize(&task.target).map_err(|e| SyncError::io(&task.target, e))?;
    ctx.log_paths = task.log_enable;
    engine::sync(ctx, &source, &target)
}
