//! Command-line argument definition and processing.

use std::path::PathBuf;

use clap::Parser;

use crate::app::RunOptions;

/// gitseek - Search GitHub repositories by stars from the terminal
#[derive(Parser, Debug)]
#[command(name = "gitseek")]
#[command(version)]
#[command(about = "Search GitHub repositories by stars from the terminal", long_about = None)]
pub struct Args {
    /// Search for this term as soon as the UI starts
    #[arg(short, long)]
    pub search: Option<String>,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Enable verbose output (equivalent to --log-level debug)
    #[arg(short, long)]
    pub verbose: bool,

    /// Search endpoint to query instead of the configured one
    #[arg(long)]
    pub api_url: Option<String>,

    /// Configuration directory (default: ~/.config/gitseek)
    #[arg(long)]
    pub config_dir: Option<PathBuf>,
}

impl Args {
    /// What: Extract the options the runtime needs.
    ///
    /// Output:
    /// - [`RunOptions`] carrying the initial search and endpoint override.
    #[must_use]
    pub fn run_options(&self) -> RunOptions {
        RunOptions {
            initial_search: self.search.clone().filter(|s| !s.trim().is_empty()),
            api_url: self.api_url.clone(),
        }
    }
}

/// What: Determine the log level based on command-line arguments.
///
/// Inputs:
/// - `args`: Parsed command-line arguments.
///
/// Output:
/// - Log level string (trace, debug, info, warn, error).
///
/// Details:
/// - Verbose flag overrides the `--log-level` argument.
/// - `RUST_LOG`, when set, is applied on top of this by the subscriber.
#[must_use]
pub fn determine_log_level(args: &Args) -> String {
    if args.verbose {
        "debug".to_string()
    } else {
        args.log_level.clone()
    }
}
