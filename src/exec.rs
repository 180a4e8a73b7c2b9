//! Child process execution.

use crate::core::types::ProcessSpec;
use crate::error::{PompaError, Result};
use std::process::{Command, Stdio};

/// Run `spec` with inherited standard streams, blocking until the child
/// exits. A non-zero child exit or spawn failure is surfaced with the
/// original command text; nothing is retried.
pub fn run(spec: &ProcessSpec) -> Result<()> {
    if which::which(spec.program).is_err() {
        return Err(PompaError::DependencyMissing {
            program: spec.program.to_string(),
        });
    }

    let status = Command::new(spec.program)
        .args(&spec.args)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .map_err(|e| PompaError::SpawnFailed {
            command: spec.to_string(),
            reason: e.to_string(),
        })?;

    if !status.success() {
        return Err(PompaError::ChildFailed {
            command: spec.to_string(),
            // Signal-terminated children carry no code
            code: status.code().unwrap_or(1),
        });
    }

    Ok(())
}
