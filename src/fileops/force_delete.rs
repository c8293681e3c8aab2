//! Forced-delete fallback capability.
//!
//! Escape hatch for permission-denied deletions, selected once at startup
//! by platform detection rather than branching inside the delete
//! primitive.

use std::io;
use std::path::Path;

/// Fallback deletion attempted after a permission-denied failure.
pub trait ForceDelete {
    fn force_delete(&self, path: &Path) -> io::Result<()>;
}

/// Windows fallback: `cmd /C del /F` clears the read-only attribute that
/// commonly causes the failure. Files only, matching the command itself.
pub struct WindowsDelCommand;

impl ForceDelete for WindowsDelCommand {
    fn force_delete(&self, path: &Path) -> io::Result<()> {
        let status = std::process::Command::new("cmd")
            .arg("/C")
            .arg("del")
            .arg("/F")
            .arg(path)
            .status()?;
        if status.success() {
            Ok(())
        } else {
            Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("del /F exited with {status}"),
            ))
        }
    }
}

/// No fallback exists on this platform; every attempt reports failure.
pub struct Unavailable;

impl ForceDelete for Unavailable {
    fn force_delete(&self, _path: &Path) -> io::Result<()> {
        Err(io::Error::new(
            io::ErrorKind::Unsupported,
            "no forced-delete fallback on this platform",
        ))
    }
}

/// Select the forced-delete capability for the current platform.
pub fn platform_default() -> Box<dyn ForceDelete> {
    if cfg!(windows) {
        Box::new(WindowsDelCommand)
    } else {
        Box::new(Unavailable)
    }
}
