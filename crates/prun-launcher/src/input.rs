//! Launcher input rendering
//!
//! The launcher consumes a line-oriented input file: a verbosity marker line,
//! one `<host> <count>` line per plan entry joined by trailing commas, and the
//! application command line. The launcher depends on this exact textual shape,
//! so all of it lives here.

use prun_core::{PlacementPlan, PrunResult};
use std::fmt::Write as _;
use std::io::Write as _;
use std::path::Path;
use tempfile::NamedTempFile;

/// Rendered launcher input persisted to a scratch file
///
/// Holds the temp file handle so the file stays on disk for the launcher's
/// whole lifetime.
#[derive(Debug)]
pub struct LauncherInput {
    file: NamedTempFile,
}

impl LauncherInput {
    /// Path to the input file
    pub fn path(&self) -> &Path {
        self.file.path()
    }
}

/// Render the launcher input text for a plan and application command
pub fn render(plan: &PlacementPlan, command: &[String], verbose: bool) -> String {
    let mut out = String::new();
    out.push_str(if verbose { "-v" } else { "-q" });
    out.push('\n');

    for (i, entry) in plan.entries.iter().enumerate() {
        let separator = if i + 1 == plan.entries.len() { "" } else { "," };
        // infallible on String
        let _ = writeln!(out, "{} {}{}", entry.host, entry.count, separator);
    }

    out.push_str(&command.join(" "));
    out.push('\n');
    out
}

/// Write the rendered input to a scratch file for the launcher
pub fn write_input(
    plan: &PlacementPlan,
    command: &[String],
    verbose: bool,
) -> PrunResult<LauncherInput> {
    let mut file = NamedTempFile::new()?;
    file.write_all(render(plan, command, verbose).as_bytes())?;
    file.flush()?;
    Ok(LauncherInput { file })
}
