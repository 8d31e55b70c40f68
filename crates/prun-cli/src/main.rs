//! prun entry point
//!
//! Reads the host allocation, computes the placement plan, renders the
//! launcher input, and hands off to the external launcher.

mod args;

use anyhow::{bail, Context, Result};
use clap::Parser;
use prun_core::{Diagnostic, HostAllocation, LauncherConfig, PlacementRequest};
use prun_launcher::{Launch, ProcessLauncher};
use prun_planner::plan;
use std::path::PathBuf;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

/// Environment variable naming the allocation hostfile when no flag is given
const NODEFILE_ENV: &str = "PRUN_NODEFILE";

#[tokio::main]
async fn main() -> Result<()> {
    let cli = args::Cli::parse_from(args::normalize_args(std::env::args()));

    // Initialize logging
    let log_level = if cli.verbose { Level::DEBUG } else { Level::INFO };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);

    let mut config = match &cli.config {
        Some(path) => LauncherConfig::from_file(path)?,
        None => LauncherConfig::default(),
    };
    if let Some(program) = &cli.launcher {
        config.program = program.clone();
    }
    if cli.verbose {
        config.verbose = true;
    }

    let Some(application) = cli.command.first() else {
        bail!("no application given; usage: prun [-np N] [-ppn N] <application> [args...]");
    };
    if application.starts_with('-') {
        bail!("unsupported option: {application}");
    }

    let hostfile = cli
        .hostfile
        .clone()
        .or_else(|| config.hostfile.clone())
        .or_else(|| std::env::var_os(NODEFILE_ENV).map(PathBuf::from));
    let Some(hostfile) = hostfile else {
        bail!("no host allocation found; pass -hostfile or set {NODEFILE_ENV}");
    };

    let allocation = HostAllocation::from_file(&hostfile)
        .with_context(|| format!("failed to read allocation from {}", hostfile.display()))?;

    let request = PlacementRequest {
        process_count: cli.nprocs,
        per_node: cli.ppn,
    };
    let outcome = plan(&request, &allocation)?;

    for diagnostic in &outcome.diagnostics {
        match diagnostic {
            Diagnostic::DefaultedProcessCount { .. } => info!("{diagnostic}"),
            _ => warn!("{diagnostic}"),
        }
    }

    if cli.dry_run {
        print!(
            "{}",
            prun_launcher::render(&outcome.plan, &cli.command, config.verbose)
        );
        return Ok(());
    }

    let input = prun_launcher::write_input(&outcome.plan, &cli.command, config.verbose)?;
    let launcher = ProcessLauncher::new(config);
    let status = launcher.launch(&input).await?;

    // The launcher's exit code is prun's exit code
    std::process::exit(status.code().unwrap_or(1));
}
