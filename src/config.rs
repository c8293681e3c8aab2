//! Task configuration: loading, environment overlay, and validation.
//!
//! Field names follow the established camelCase config wire format, so
//! existing `sync_config.json` files load unchanged.

use crate::error::{Result, SyncError};
use crate::logging::LoggingConfig;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Config file stem searched in the working directory when no explicit
/// file is given. The `config` crate infers the format, so
/// `sync_config.json` and `sync_config.toml` both load.
pub const DEFAULT_CONFIG_STEM: &str = "sync_config";

/// One mirroring task: a named (source, target) directory pair.
///
/// Required fields carry serde defaults so that a malformed task is
/// reported by validation (and skipped) instead of failing the whole
/// config load.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskConfig {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub source: PathBuf,
    #[serde(default)]
    pub target: PathBuf,
    /// Accepted for config-file compatibility; ignore-file filtering is
    /// not implemented and the flag has no effect.
    ///
    /// Aliases cover sources that fold keys to lowercase.
    #[serde(default, alias = "gitenable", alias = "git_enable")]
    pub git_enable: bool,
    /// Emit an info line naming each path before it is deleted or copied.
    #[serde(default, alias = "logenable", alias = "log_enable")]
    pub log_enable: bool,
}

/// Top-level configuration: the task list plus the logging section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SyncConfig {
    #[serde(default)]
    pub tasks: Vec<TaskConfig>,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Load configuration from a file plus environment overlay.
///
/// Precedence, lowest to highest: config file, then `DIRSYNC`-prefixed
/// environment variables with `__` separators (e.g.
/// `DIRSYNC__LOGGING__LEVEL=debug`). Without an explicit file, a
/// `sync_config.*` in the working directory is used when present.
pub fn load(explicit_file: Option<&Path>) -> Result<SyncConfig> {
    let builder = Config::builder();
    let builder = match explicit_file {
        Some(path) => {
            let path_str = path.to_str().ok_or_else(|| {
                SyncError::Config(format!(
                    "Config path is not valid UTF-8: {}",
                    path.display()
                ))
            })?;
            builder.add_source(File::with_name(path_str))
        }
        None => builder.add_source(File::with_name(DEFAULT_CONFIG_STEM).required(false)),
    };
    let builder = builder.add_source(
        Environment::with_prefix("DIRSYNC")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;
    Ok(config.try_deserialize()?)
}

/// Validate one task before it is run.
pub fn validate_task(task: &TaskConfig) -> std::result::Result<(), String> {
    if task.name.trim().is_empty() {
        return Err("Task name cannot be empty".to_string());
    }
    if task.source.as_os_str().is_empty() {
        return Err(format!("Task '{}' has no source path", task.name));
    }
    if !task.source.exists() {
        return Err(format!(
            "Source path does not exist: {}",
            task.source.display()
        ));
    }
    if task.target.as_os_str().is_empty() {
        return Err(format!("Task '{}' has no target path", task.name));
    }
    if !task.target.exists() {
        return Err(format!(
            "Target path does not exist: {}",
            task.target.display()
        ));
    }
    Ok(())
}
