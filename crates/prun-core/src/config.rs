//! Configuration types for prun

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Launcher hand-off configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LauncherConfig {
    /// Launcher binary to hand the plan to
    pub program: PathBuf,
    /// Emit the verbose marker in the launcher input
    pub verbose: bool,
    /// Default host allocation file
    pub hostfile: Option<PathBuf>,
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            program: PathBuf::from("yod"),
            verbose: false,
            hostfile: None,
        }
    }
}

impl LauncherConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &std::path::Path) -> Result<Self, crate::PrunError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            crate::PrunError::Config(format!("Failed to read config file: {}", e))
        })?;
        toml::from_str(&content)
            .map_err(|e| crate::PrunError::Config(format!("Failed to parse config: {}", e)))
    }
}
