use std::time::Duration;

use tracing::debug;

use crate::adapter::CheckOutcome;
use crate::cancel::CancellationToken;
use crate::cli::{CheckArgs, Cli};
use crate::config::{Config, Configuration};
use crate::output::{JsonFormatter, OutputFormat, OutputFormatter, TextFormatter};
use crate::registry::{CheckRequest, CheckerRegistry};
use crate::runner::{SystemToolRunner, ToolRunner};
use crate::{EXIT_SUCCESS, Result};

use super::context::{color_choice_to_mode, load_config, write_output};

#[must_use]
pub fn run_check(args: &CheckArgs, cli: &Cli) -> i32 {
    match run_check_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {e}");
            e.exit_code()
        }
    }
}

/// Runs one check end to end and writes the rendered outcome.
///
/// # Errors
/// Returns the first configuration, dispatch or output error encountered.
pub fn run_check_impl(args: &CheckArgs, cli: &Cli) -> Result<i32> {
    // 1. Load configuration and apply CLI overrides
    let config = load_config(args.config.as_deref(), cli.no_config)?;
    let configuration = build_configuration(&config, args, cli)?;
    let request = CheckRequest::new(&args.path, &args.tool, configuration);

    // 2. Cancel cooperatively on Ctrl-C
    let cancel = CancellationToken::new();
    install_interrupt_handler(&cancel);

    // 3. Dispatch
    let registry = CheckerRegistry::default();
    let outcome = execute_check(&registry, &request, &SystemToolRunner, &cancel, !cli.quiet)?;

    // 4. Format and write output
    let output = format_outcome(&outcome, args.format, cli)?;
    write_output(args.output.as_deref(), &output)?;

    Ok(EXIT_SUCCESS)
}

/// Merge file settings with command-line flags; flags win.
///
/// # Errors
/// Returns a configuration error if the merged options are out of range.
pub(crate) fn build_configuration(
    config: &Config,
    args: &CheckArgs,
    cli: &Cli,
) -> Result<Configuration> {
    let mut configuration = Configuration::from_config(config)
        .with_verbose(cli.verbose > 0)
        .with_errors_only(args.errors_only);

    if let Some(threshold) = args.score_threshold {
        configuration = configuration.with_score_threshold(threshold);
    }
    if let Some(ceiling) = args.score_ceiling {
        configuration = configuration.with_score_ceiling(ceiling);
    }
    if let Some(floor) = args.fail_under {
        configuration = configuration.with_fail_under(floor);
    }
    if let Some(select) = &args.select {
        configuration = configuration.with_select(select.clone());
    }
    if let Some(secs) = args.timeout {
        configuration = configuration.with_timeout(Some(Duration::from_secs(secs)));
    }
    if args.parallel {
        configuration = configuration.with_parallel(true);
    }

    configuration.validate()?;
    Ok(configuration)
}

pub(crate) fn execute_check(
    registry: &CheckerRegistry,
    request: &CheckRequest,
    runner: &dyn ToolRunner,
    cancel: &CancellationToken,
    show_progress: bool,
) -> Result<CheckOutcome> {
    debug!(
        checker = %request.checker,
        source = %request.source.display(),
        "starting check"
    );
    registry.dispatch(request, runner, cancel, show_progress)
}

pub(crate) fn format_outcome(
    outcome: &CheckOutcome,
    format: OutputFormat,
    cli: &Cli,
) -> Result<String> {
    match format {
        OutputFormat::Text => {
            TextFormatter::with_verbose(color_choice_to_mode(cli.color), cli.verbose)
                .format(outcome)
        }
        OutputFormat::Json => JsonFormatter.format(outcome),
    }
}

fn install_interrupt_handler(cancel: &CancellationToken) {
    let token = cancel.clone();
    if let Err(e) = ctrlc::set_handler(move || token.cancel()) {
        debug!(error = %e, "could not install interrupt handler");
    }
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
