//! prun-launcher: Launcher hand-off for prun
//!
//! This crate owns the boundary to the external job launcher:
//! - Rendering a placement plan into the launcher's input format
//! - Writing the input to a scratch file
//! - Invoking the launcher binary and waiting for it

pub mod input;
pub mod process;
pub mod traits;

pub use input::{render, write_input, LauncherInput};
pub use process::ProcessLauncher;
pub use traits::Launch;
