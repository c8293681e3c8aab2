//! CLI Tooling
//!
//! Command-line interface for dirsync operations. Loads the task
//! configuration once and serves every subcommand from it.

use crate::config::{self, SyncConfig};
use crate::error::{Result, SyncError};
use crate::logging::LoggingConfig;
use crate::report::{self, TaskStatusEntry};
use crate::runner;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Dirsync CLI - one-way directory tree mirroring
#[derive(Parser)]
#[command(name = "dirsync")]
#[command(about = "One-way directory tree mirroring with mtime-based reconciliation")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file, file+stderr, both)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output includes "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run all configured tasks (or a single named task)
    Run {
        /// Only run the task with this name
        #[arg(long)]
        task: Option<String>,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// List configured tasks and their validation status
    Tasks {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Validate the configuration without running anything
    Validate,
}

/// CLI execution context holding the loaded configuration.
pub struct CliContext {
    config: SyncConfig,
}

impl CliContext {
    pub fn new(config_path: Option<PathBuf>) -> Result<Self> {
        let config = config::load(config_path.as_deref())?;
        Ok(Self { config })
    }

    /// Logging settings with CLI flags layered over the config file.
    pub fn logging_config(&self, cli: &Cli) -> LoggingConfig {
        let mut logging = self.config.logging.clone();
        if let Some(ref level) = cli.log_level {
            logging.level = level.clone();
        }
        if let Some(ref format) = cli.log_format {
            logging.format = format.clone();
        }
        if let Some(ref output) = cli.log_output {
            logging.output = output.clone();
        }
        if let Some(ref file) = cli.log_file {
            logging.file = Some(file.clone());
        }
        logging
    }

    pub fn config(&self) -> &SyncConfig {
        &self.config
    }

    /// Execute a command and return its rendered output.
    pub fn execute(&self, command: &Commands) -> Result<String> {
        match command {
            Commands::Run { task, format } => {
                let summary = runner::run_tasks(&self.config, task.as_deref())?;
                match format.as_str() {
                    "json" => Ok(serde_json::to_string_pretty(&summary)?),
                    _ => Ok(report::format_run_summary_text(&summary)),
                }
            }
            Commands::Tasks { format } => {
                let entries: Vec<TaskStatusEntry> = self
                    .config
                    .tasks
                    .iter()
                    .map(TaskStatusEntry::from_task)
                    .collect();
                match format.as_str() {
                    "json" => Ok(serde_json::to_string_pretty(&entries)?),
                    _ => Ok(report::format_task_list_text(&entries)),
                }
            }
            Commands::Validate => {
                let mut problems = Vec::new();
                for task in &self.config.tasks {
                    if let Err(reason) = config::validate_task(task) {
                        problems.push(format!("{}: {}", task.name, reason));
                    }
                }
                if problems.is_empty() {
                    Ok(format!(
                        "Configuration valid: {} task(s).",
                        self.config.tasks.len()
                    ))
                } else {
                    Err(SyncError::Config(problems.join("; ")))
                }
            }
        }
    }
}
