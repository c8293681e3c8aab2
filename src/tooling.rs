//! Tooling & Integration Layer
//!
//! Command-line surface for running and inspecting mirroring tasks.

pub mod cli;

pub use cli::{Cli, CliContext, Commands};
