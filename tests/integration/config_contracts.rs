//! Configuration loading, validation, and CLI output contracts.

use crate::support::pair;
use dirsync::tooling::cli::{CliContext, Commands};
use std::fs;
use std::path::Path;

fn write_config(path: &Path, tasks_json: &str) {
    fs::write(path, format!(r#"{{"tasks": {}}}"#, tasks_json)).unwrap();
}

#[test]
fn run_json_contract_has_required_fields() {
    let p = pair();
    fs::write(p.source.join("a.txt"), "a").unwrap();
    let config_path = p.temp.path().join("sync_config.json");
    write_config(
        &config_path,
        &format!(
            r#"[{{"name": "docs", "source": "{}", "target": "{}"}}]"#,
            p.source.display(),
            p.target.display()
        ),
    );

    let cli = CliContext::new(Some(config_path)).unwrap();
    let output = cli
        .execute(&Commands::Run {
            task: None,
            format: "json".to_string(),
        })
        .unwrap();

    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    let completed = parsed
        .get("completed")
        .and_then(|v| v.as_array())
        .expect("completed array should exist");
    assert_eq!(completed.len(), 1);
    assert!(parsed.get("skipped").and_then(|v| v.as_array()).is_some());
    assert!(parsed.get("failed").and_then(|v| v.as_array()).is_some());
    let ledger = parsed.get("ledger").expect("ledger should exist");
    assert!(ledger
        .get("failed_deletes")
        .and_then(|v| v.as_array())
        .is_some());
    assert!(ledger
        .get("failed_copies")
        .and_then(|v| v.as_array())
        .is_some());
    assert!(p.target.join("a.txt").exists());
}

#[test]
fn invalid_task_is_skipped_and_reported_while_valid_task_runs() {
    let p = pair();
    fs::write(p.source.join("a.txt"), "a").unwrap();
    let config_path = p.temp.path().join("sync_config.json");
    write_config(
        &config_path,
        &format!(
            r#"[
                {{"name": "broken", "source": "{}/missing", "target": "{}"}},
                {{"name": "good", "source": "{}", "target": "{}"}}
            ]"#,
            p.temp.path().display(),
            p.target.display(),
            p.source.display(),
            p.target.display()
        ),
    );

    let cli = CliContext::new(Some(config_path)).unwrap();
    let output = cli
        .execute(&Commands::Run {
            task: None,
            format: "json".to_string(),
        })
        .unwrap();

    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(
        parsed["completed"],
        serde_json::json!(["good"]),
        "valid task should run"
    );
    let skipped = parsed["skipped"].as_array().unwrap();
    assert_eq!(skipped.len(), 1);
    assert_eq!(skipped[0]["name"], "broken");
    assert!(skipped[0]["reason"]
        .as_str()
        .unwrap()
        .contains("Source path"));
    assert!(p.target.join("a.txt").exists());
}

#[test]
fn tasks_json_contract_includes_validation_status() {
    let p = pair();
    let config_path = p.temp.path().join("sync_config.json");
    write_config(
        &config_path,
        &format!(
            r#"[{{"name": "docs", "source": "{}", "target": "{}", "logEnable": true}}]"#,
            p.source.display(),
            p.target.display()
        ),
    );

    let cli = CliContext::new(Some(config_path)).unwrap();
    let output = cli
        .execute(&Commands::Tasks {
            format: "json".to_string(),
        })
        .unwrap();

    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    let entries = parsed.as_array().expect("tasks output should be an array");
    assert_eq!(entries.len(), 1);
    let entry = &entries[0];
    assert_eq!(entry["name"], "docs");
    assert_eq!(entry["valid"], true);
    assert_eq!(entry["log_enable"], true);
    assert!(entry.get("source").and_then(|v| v.as_str()).is_some());
    assert!(entry.get("target").and_then(|v| v.as_str()).is_some());
}

#[test]
fn validate_rejects_config_with_broken_task() {
    let p = pair();
    let config_path = p.temp.path().join("sync_config.json");
    write_config(
        &config_path,
        &format!(
            r#"[{{"name": "", "source": "{}", "target": "{}"}}]"#,
            p.source.display(),
            p.target.display()
        ),
    );

    let cli = CliContext::new(Some(config_path)).unwrap();
    assert!(cli.execute(&Commands::Validate).is_err());
}

#[test]
fn validate_accepts_complete_config() {
    let p = pair();
    let config_path = p.temp.path().join("sync_config.json");
    write_config(
        &config_path,
        &format!(
            r#"[{{"name": "docs", "source": "{}", "target": "{}"}}]"#,
            p.source.display(),
            p.target.display()
        ),
    );

    let cli = CliContext::new(Some(config_path)).unwrap();
    let output = cli.execute(&Commands::Validate).unwrap();
    assert!(output.contains("Configuration valid"));
}

#[test]
fn run_with_unknown_task_name_is_an_error() {
    let p = pair();
    let config_path = p.temp.path().join("sync_config.json");
    write_config(&config_path, "[]");

    let cli = CliContext::new(Some(config_path)).unwrap();
    let err = cli
        .execute(&Commands::Run {
            task: Some("ghost".to_string()),
            format: "text".to_string(),
        })
        .unwrap_err();
    assert!(err.to_string().contains("ghost"));
}

#[test]
fn inert_git_enable_flag_round_trips_without_effect() {
    let p = pair();
    fs::write(p.source.join("a.txt"), "a").unwrap();
    let config_path = p.temp.path().join("sync_config.json");
    write_config(
        &config_path,
        &format!(
            r#"[{{"name": "docs", "source": "{}", "target": "{}", "gitEnable": true}}]"#,
            p.source.display(),
            p.target.display()
        ),
    );

    let cli = CliContext::new(Some(config_path)).unwrap();
    assert!(cli.config().tasks[0].git_enable);

    let output = cli
        .execute(&Commands::Run {
            task: None,
            format: "json".to_string(),
        })
        .unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(parsed["completed"], serde_json::json!(["docs"]));
    assert!(p.target.join("a.txt").exists());
}
