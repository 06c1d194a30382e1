//! Invoking the external project generator.

use std::path::Path;
use std::process::Command;

use tracing::{info, warn};

/// Outcome of the generator invocation. A missing or failing generator is
/// never a pipeline failure; the caller reports the manual command instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeneratorStatus {
    /// `xcodegen generate` ran and exited successfully.
    Completed,
    /// The generator was unavailable or failed; the reason is kept for
    /// reporting.
    Skipped { reason: String },
}

/// Run `xcodegen generate` in the Apple project directory.
pub fn run(apple_dir: &Path) -> GeneratorStatus {
    info!(dir = %apple_dir.display(), "running xcodegen generate");

    match Command::new("xcodegen")
        .arg("generate")
        .current_dir(apple_dir)
        .output()
    {
        Ok(output) if output.status.success() => {
            info!("Xcode project regenerated");
            GeneratorStatus::Completed
        }
        Ok(output) => {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            warn!(stderr = %stderr, "xcodegen failed; run it manually");
            GeneratorStatus::Skipped { reason: stderr }
        }
        Err(e) => {
            warn!(error = %e, "xcodegen not found; run it manually");
            GeneratorStatus::Skipped {
                reason: e.to_string(),
            }
        }
    }
}
