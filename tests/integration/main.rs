//! Integration tests for the dirsync mirroring engine and task runner.


mod config_contracts;
mod failure_resilience;
