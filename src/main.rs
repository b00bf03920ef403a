use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use code_checker::cli::{Cli, Commands};
use code_checker::commands::{run_check, run_init, run_list};

const fn log_level(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        "error"
    } else if verbose > 0 {
        "debug"
    } else {
        "warn"
    }
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging; RUST_LOG takes precedence over -v/-q
    tracing_subscriber::registry()
        .with(EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level(cli.verbose, cli.quiet).to_string()),
        ))
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    let exit_code = match &cli.command {
        Commands::Check(args) => run_check(args, &cli),
        Commands::List => run_list(),
        Commands::Init(args) => run_init(args),
    };

    std::process::exit(exit_code);
}
