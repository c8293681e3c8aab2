//! Format run summaries and task listings as text.

use crate::config::{self, TaskConfig};
use crate::runner::RunSummary;
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use owo_colors::OwoColorize;
use serde::Serialize;
use std::path::PathBuf;

/// Format a section heading with bold/underline. Respects NO_COLOR and TTY.
pub fn format_section_heading(title: &str) -> String {
    format!("{}", title.bold().underline())
}

/// One configured task with its validation outcome, for listings.
#[derive(Debug, Clone, Serialize)]
pub struct TaskStatusEntry {
    pub name: String,
    pub source: PathBuf,
    pub target: PathBuf,
    pub log_enable: bool,
    pub valid: bool,
    pub reason: Option<String>,
}

impl TaskStatusEntry {
    pub fn from_task(task: &TaskConfig) -> Self {
        let validation = config::validate_task(task);
        Self {
            name: task.name.clone(),
            source: task.source.clone(),
            target: task.target.clone(),
            log_enable: task.log_enable,
            valid: validation.is_ok(),
            reason: validation.err(),
        }
    }
}

/// Format a run summary as human-readable text.
pub fn format_run_summary_text(summary: &RunSummary) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n\n", format_section_heading("Run Summary")));
    out.push_str(&format!("  Completed: {}\n", summary.completed.len()));
    out.push_str(&format!("  Skipped: {}\n", summary.skipped.len()));
    out.push_str(&format!("  Failed: {}\n\n", summary.failed.len()));

    if !summary.skipped.is_empty() {
        out.push_str(&format!(
            "{}\n\n",
            format_section_heading("Skipped tasks")
        ));
        let mut table = Table::new();
        table.load_preset(UTF8_BORDERS_ONLY);
        table.set_header(vec!["Task", "Reason"]);
        for entry in &summary.skipped {
            table.add_row(vec![entry.name.clone(), entry.reason.clone()]);
        }
        out.push_str(&format!("{}\n\n", table));
    }

    if !summary.failed.is_empty() {
        out.push_str(&format!("{}\n\n", format_section_heading("Failed tasks")));
        let mut table = Table::new();
        table.load_preset(UTF8_BORDERS_ONLY);
        table.set_header(vec!["Task", "Reason"]);
        for entry in &summary.failed {
            table.add_row(vec![entry.name.clone(), entry.reason.clone()]);
        }
        out.push_str(&format!("{}\n\n", table));
    }

    if !summary.ledger.failed_deletes().is_empty() {
        out.push_str(&format!(
            "{}\n\n",
            format_section_heading("Failed deletions")
        ));
        for path in summary.ledger.failed_deletes() {
            out.push_str(&format!("  {}\n", path.display()));
        }
        out.push('\n');
    }

    if !summary.ledger.failed_copies().is_empty() {
        out.push_str(&format!(
            "{}\n\n",
            format_section_heading("Failed copies")
        ));
        for path in summary.ledger.failed_copies() {
            out.push_str(&format!("  {}\n", path.display()));
        }
        out.push('\n');
    }

    if summary.is_clean() {
        out.push_str("All tasks completed.\n");
    }
    out
}

/// Format the configured task list as human-readable text.
pub fn format_task_list_text(entries: &[TaskStatusEntry]) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n\n", format_section_heading("Tasks")));
    if entries.is_empty() {
        out.push_str("No tasks configured.\n");
        return out;
    }
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Task", "Source", "Target", "Valid", "Reason"]);
    for entry in entries {
        table.add_row(vec![
            entry.name.clone(),
            entry.source.display().to_string(),
            entry.target.display().to_string(),
            if entry.valid { "yes" } else { "no" }.to_string(),
            entry.reason.clone().unwrap_or_default(),
        ]);
    }
    out.push_str(&format!("{}\n", table));
    out
}
