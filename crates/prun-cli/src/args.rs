//! CLI argument surface
//!
//! The historical surface uses single-dash long options (`-np`, `-ppn`,
//! `-help`). [`normalize_args`] rewrites those spellings to the double-dash
//! forms before clap sees them, stopping at the first non-flag token so the
//! application's own arguments pass through untouched.

use clap::Parser;
use std::path::PathBuf;

/// prun - place processes across allocated hosts and hand off to the launcher
#[derive(Parser, Debug)]
#[command(name = "prun")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Total number of processes to start (defaults to one per allocated slot)
    #[arg(short = 'n', long = "np", value_name = "N", default_value_t = 0)]
    pub nprocs: usize,

    /// Processes per node (derived from the host count when omitted)
    #[arg(long = "ppn", value_name = "N", default_value_t = 0)]
    pub ppn: usize,

    /// Host allocation file, one host per allocated slot
    #[arg(long, value_name = "PATH")]
    pub hostfile: Option<PathBuf>,

    /// Launcher binary to hand the plan to
    #[arg(long, value_name = "PATH")]
    pub launcher: Option<PathBuf>,

    /// TOML configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Plan and print the launcher input without launching
    #[arg(long)]
    pub dry_run: bool,

    /// Application command and its arguments
    #[arg(
        value_name = "COMMAND",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub command: Vec<String>,
}

/// Single-dash long spellings accepted for compatibility
const REWRITES: &[(&str, &str)] = &[
    ("-np", "--np"),
    ("-ppn", "--ppn"),
    ("-hostfile", "--hostfile"),
    ("-launcher", "--launcher"),
    ("-config", "--config"),
    ("-help", "--help"),
    ("-verbose", "--verbose"),
    ("-dry-run", "--dry-run"),
];

/// Flags that consume the following token as their value
const VALUE_FLAGS: &[&str] = &["-n", "--np", "--ppn", "--hostfile", "--launcher", "--config"];

/// Rewrite single-dash long options ahead of clap
pub fn normalize_args<I>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut iter = args.into_iter();
    let mut out: Vec<String> = iter.next().into_iter().collect();

    let mut expect_value = false;
    let mut in_command = false;
    for arg in iter {
        if in_command {
            out.push(arg);
            continue;
        }
        if expect_value {
            expect_value = false;
            out.push(arg);
            continue;
        }
        if arg.starts_with('-') && arg != "-" {
            let rewritten = REWRITES
                .iter()
                .find(|(from, _)| *from == arg)
                .map(|(_, to)| to.to_string())
                .unwrap_or(arg);
            expect_value = VALUE_FLAGS.contains(&rewritten.as_str());
            out.push(rewritten);
        } else {
            // first non-flag token starts the application command
            in_command = true;
            out.push(arg);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(args: &[&str]) -> Vec<String> {
        std::iter::once("prun")
            .chain(args.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_normalize_rewrites_long_flags() {
        let out = normalize_args(argv(&["-np", "4", "-ppn", "2", "a.out"]));
        assert_eq!(out, argv(&["--np", "4", "--ppn", "2", "a.out"]));
    }

    #[test]
    fn test_normalize_stops_at_command() {
        // the application's own -np must not be rewritten
        let out = normalize_args(argv(&["-n", "2", "a.out", "-np", "-help"]));
        assert_eq!(out, argv(&["-n", "2", "a.out", "-np", "-help"]));
    }

    #[test]
    fn test_normalize_leaves_flag_values_alone() {
        let out = normalize_args(argv(&["-hostfile", "-odd-file-name", "a.out"]));
        assert_eq!(out, argv(&["--hostfile", "-odd-file-name", "a.out"]));
    }

    #[test]
    fn test_parse_counts_and_command() {
        let cli = Cli::parse_from(normalize_args(argv(&[
            "-np", "4", "-ppn", "2", "a.out", "--steps", "100",
        ])));
        assert_eq!(cli.nprocs, 4);
        assert_eq!(cli.ppn, 2);
        assert_eq!(
            cli.command,
            vec!["a.out".to_string(), "--steps".to_string(), "100".to_string()]
        );
    }

    #[test]
    fn test_parse_short_count() {
        let cli = Cli::parse_from(normalize_args(argv(&["-n", "8", "a.out"])));
        assert_eq!(cli.nprocs, 8);
        assert_eq!(cli.ppn, 0);
    }

    #[test]
    fn test_parse_defaults() {
        let cli = Cli::parse_from(normalize_args(argv(&["a.out"])));
        assert_eq!(cli.nprocs, 0);
        assert_eq!(cli.ppn, 0);
        assert!(!cli.verbose);
        assert!(!cli.dry_run);
    }

    #[test]
    fn test_parse_rejects_non_numeric_count() {
        let result = Cli::try_parse_from(normalize_args(argv(&["-np", "lots", "a.out"])));
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_rejects_negative_count() {
        let result = Cli::try_parse_from(normalize_args(argv(&["-np", "-4", "a.out"])));
        assert!(result.is_err());
    }
}
