//! Process-based launcher implementation
//!
//! Spawns the configured launcher binary with the input file path as its
//! argument and waits for it. The launcher's own failure is reported only
//! through its exit status; there are no retries.

use async_trait::async_trait;
use prun_core::{LauncherConfig, PrunError, PrunResult};
use std::process::{ExitStatus, Stdio};
use tokio::process::Command;
use tracing::{debug, error, info, warn};

use crate::input::LauncherInput;
use crate::traits::Launch;

/// Launcher invoked as a child process
pub struct ProcessLauncher {
    config: LauncherConfig,
}

impl ProcessLauncher {
    /// Create a new process launcher
    pub fn new(config: LauncherConfig) -> Self {
        Self { config }
    }

    /// Build the command to invoke the launcher
    fn build_command(&self, input: &LauncherInput) -> Command {
        let mut cmd = Command::new(&self.config.program);
        cmd.arg(input.path());

        // The launched job's output belongs to the user, not to prun
        cmd.stdin(Stdio::inherit());
        cmd.stdout(Stdio::inherit());
        cmd.stderr(Stdio::inherit());

        cmd
    }
}

#[async_trait]
impl Launch for ProcessLauncher {
    async fn launch(&self, input: &LauncherInput) -> PrunResult<ExitStatus> {
        info!(
            program = %self.config.program.display(),
            input = %input.path().display(),
            "Invoking launcher"
        );

        let mut cmd = self.build_command(input);

        let mut child = cmd.spawn().map_err(|e| {
            error!(
                program = %self.config.program.display(),
                error = %e,
                "Failed to spawn launcher"
            );
            PrunError::Launcher(format!(
                "Failed to spawn {}: {}",
                self.config.program.display(),
                e
            ))
        })?;

        let pid = child.id().unwrap_or(0);
        debug!(pid = pid, "Launcher spawned");

        let status = child.wait().await?;

        if status.success() {
            debug!(pid = pid, "Launcher exited cleanly");
        } else {
            warn!(pid = pid, ?status, "Launcher exited with non-zero status");
        }

        Ok(status)
    }

    fn name(&self) -> &'static str {
        "process"
    }
}
