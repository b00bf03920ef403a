use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::LOCAL_CONFIG_NAME;
use crate::output::OutputFormat;

/// Color output control
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser, Debug)]
#[command(name = "code-checker")]
#[command(author, version, about = "Run Python static-analysis tools and aggregate their results")]
#[command(long_about = "Dispatches a check to pylint, flake8 or pydocstyle and summarizes the output.\n\n\
    Exit codes:\n  \
    0 - Check completed\n  \
    1 - A file scored below --fail-under\n  \
    2 - Configuration or runtime error\n  \
    130 - Interrupted")]
pub struct Cli {
    /// Increase output verbosity (-v echoes tool output, -vv for debug logs)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorChoice,

    /// Skip loading configuration file
    #[arg(long, global = true)]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run a checker on a file or directory
    Check(CheckArgs),

    /// List registered checkers
    List,

    /// Generate a default configuration file
    Init(InitArgs),
}

#[derive(Parser, Debug, Clone)]
#[allow(clippy::struct_excessive_bools)]
pub struct CheckArgs {
    /// File or directory to check
    pub path: PathBuf,

    /// Checker to run (see `code-checker list`)
    #[arg(short, long)]
    pub tool: String,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Only report errors and count them
    #[arg(short, long)]
    pub errors_only: bool,

    /// Restrict the tool to these message codes (comma-separated)
    #[arg(long)]
    pub select: Option<String>,

    /// Score a file needs to count as passing (default: 8.0)
    #[arg(long, allow_negative_numbers = true, conflicts_with = "score_ceiling")]
    pub score_threshold: Option<f64>,

    /// Only list files scoring at or below this value
    #[arg(long, allow_negative_numbers = true)]
    pub score_ceiling: Option<f64>,

    /// Fail when any file scores below this value
    #[arg(long, allow_negative_numbers = true)]
    pub fail_under: Option<f64>,

    /// Timeout per tool invocation in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Run per-file invocations in parallel
    #[arg(long)]
    pub parallel: bool,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Output path for configuration file
    #[arg(short, long, default_value = LOCAL_CONFIG_NAME)]
    pub output: PathBuf,

    /// Overwrite existing configuration
    #[arg(long)]
    pub force: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
