//! Launcher trait definitions

use async_trait::async_trait;
use prun_core::PrunResult;
use std::process::ExitStatus;

use crate::input::LauncherInput;

/// Seam to the external job launcher
#[async_trait]
pub trait Launch: Send + Sync {
    /// Hand the prepared input to the launcher and wait for it to finish
    async fn launch(&self, input: &LauncherInput) -> PrunResult<ExitStatus>;

    /// Get the launcher name
    fn name(&self) -> &'static str;
}
