//! Adapters wrapping each external analysis tool behind one contract.
//!
//! The supported tools form a closed set ([`BuiltinChecker`]); each variant
//! knows how to build its command line and turn the captured output into a
//! [`CheckOutcome`].

mod flake8;
mod pydocstyle;
mod pylint;

use std::io::Write;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, info};

use crate::aggregator::{AggregateReport, Aggregator, FileResult, ReportMode};
use crate::cancel::CancellationToken;
use crate::config::Configuration;
use crate::error::{CodeCheckerError, Result};
use crate::output::{ScanProgress, progress_label};
use crate::runner::{Invocation, ToolOutput, ToolRunner};

pub use pylint::{count_errors, is_separator};

/// Everything an adapter needs for one `check` call.
///
/// Nothing here outlives the call; adapters keep no state between runs.
pub struct CheckContext<'a> {
    pub config: &'a Configuration,
    pub runner: &'a dyn ToolRunner,
    pub cancel: &'a CancellationToken,
    pub show_progress: bool,
}

impl<'a> CheckContext<'a> {
    #[must_use]
    pub const fn new(
        config: &'a Configuration,
        runner: &'a dyn ToolRunner,
        cancel: &'a CancellationToken,
    ) -> Self {
        Self {
            config,
            runner,
            cancel,
            show_progress: false,
        }
    }

    #[must_use]
    pub const fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }
}

/// Result of a successful check.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum CheckOutcome {
    /// Structured summary across the checked files.
    Report(AggregateReport),
    /// Tool output returned verbatim for tools without a structured summary.
    Passthrough { checker: String, output: String },
}

/// Uniform contract over one external analysis tool.
pub trait Adapter {
    /// Checker name the adapter is registered under.
    fn name(&self) -> &str;

    /// Executable the adapter invokes.
    fn tool(&self) -> &str;

    /// Check a file or directory.
    ///
    /// # Errors
    /// Returns `ToolUnavailable` if the tool is not on the search path,
    /// `ToolExecutionFailed` if an invocation cannot complete, and
    /// `ScoreBelowFloor` or `Cancelled` when the run is abandoned.
    fn check(&self, source: &Path, ctx: &CheckContext<'_>) -> Result<CheckOutcome>;
}

/// The analysis tools shipped with the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuiltinChecker {
    Pylint,
    Flake8,
    PyDocStyle,
}

impl BuiltinChecker {
    pub const ALL: [Self; 3] = [Self::Pylint, Self::Flake8, Self::PyDocStyle];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pylint => pylint::TOOL,
            Self::Flake8 => flake8::TOOL,
            Self::PyDocStyle => pydocstyle::TOOL,
        }
    }

    /// Build the command line for checking `target`.
    #[must_use]
    pub fn invocation(self, target: &Path, config: &Configuration) -> Invocation {
        match self {
            Self::Pylint => pylint::invocation(target, config),
            Self::Flake8 => flake8::invocation(target, config),
            Self::PyDocStyle => pydocstyle::invocation(target, config),
        }
    }
}

impl Adapter for BuiltinChecker {
    fn name(&self) -> &str {
        self.as_str()
    }

    fn tool(&self) -> &str {
        self.as_str()
    }

    fn check(&self, source: &Path, ctx: &CheckContext<'_>) -> Result<CheckOutcome> {
        ensure_available(ctx.runner, self.tool())?;
        match self {
            Self::Pylint => pylint::check(source, ctx),
            Self::Flake8 => check_whole_source(*self, source, ctx, flake8::count_findings),
            Self::PyDocStyle => {
                check_whole_source(*self, source, ctx, pydocstyle::count_findings)
            }
        }
    }
}

/// Fail with `ToolUnavailable` unless `tool` resolves on the search path.
///
/// # Errors
/// Returns `ToolUnavailable(tool)` when the runner cannot resolve the tool.
pub fn ensure_available(runner: &dyn ToolRunner, tool: &str) -> Result<()> {
    if runner.is_available(tool) {
        Ok(())
    } else {
        Err(CodeCheckerError::ToolUnavailable(tool.to_string()))
    }
}

/// Run one invocation, echoing both streams to stderr in verbose mode.
fn run_tool(ctx: &CheckContext<'_>, invocation: &Invocation) -> Result<ToolOutput> {
    let output = ctx.runner.run(invocation, ctx.config.timeout)?;
    debug!(
        command = %invocation,
        exit_code = ?output.exit_code,
        "tool finished"
    );
    if ctx.config.verbose {
        echo_streams(&output);
    }
    Ok(output)
}

fn echo_streams(output: &ToolOutput) {
    let mut stderr = std::io::stderr().lock();
    // Echo is diagnostic only; a closed stderr must not fail the check
    stderr.write_all(output.stdout.as_bytes()).ok();
    stderr.write_all(output.stderr.as_bytes()).ok();
}

/// Produce a result for every file and feed them to `consume` in file order.
///
/// Cancellation is checked before each file and once more after the last.
/// In parallel mode invocations run on the rayon pool, and results are still
/// consumed in the original order.
fn check_files<P, C>(ctx: &CheckContext<'_>, files: &[PathBuf], produce: P, mut consume: C) -> Result<()>
where
    P: Fn(&Path) -> Result<FileResult> + Sync,
    C: FnMut(FileResult) -> Result<()>,
{
    let total = files.len();
    let progress = ScanProgress::new(total as u64, !ctx.show_progress);

    let step = |index: usize, path: &PathBuf| -> Result<FileResult> {
        ctx.cancel.check()?;
        let label = progress_label(index + 1, total, path);
        info!("{label}");
        progress.set_message(&label);
        let result = produce(path);
        progress.inc();
        result
    };

    let outcome = if ctx.config.parallel {
        files
            .par_iter()
            .enumerate()
            .map(|(index, path)| step(index, path))
            .collect::<Result<Vec<_>>>()
            .and_then(|results| results.into_iter().try_for_each(&mut consume))
    } else {
        files
            .iter()
            .enumerate()
            .try_for_each(|(index, path)| consume(step(index, path)?))
    };

    progress.finish();
    debug!(completed = progress.position(), total, "file checks finished");
    outcome?;

    // An interrupt during the last invocation leaves truncated output behind
    ctx.cancel.check()
}

/// Shared flow for tools that accept a directory and are invoked once.
///
/// Errors-only mode yields a report holding the finding count; otherwise the
/// captured output is passed through.
fn check_whole_source(
    checker: BuiltinChecker,
    source: &Path,
    ctx: &CheckContext<'_>,
    count_findings: fn(&str) -> usize,
) -> Result<CheckOutcome> {
    if !source.exists() {
        return Err(CodeCheckerError::SourceNotFound(source.to_path_buf()));
    }
    ctx.cancel.check()?;

    let output = run_tool(ctx, &checker.invocation(source, ctx.config))?;
    ctx.cancel.check()?;

    if !ctx.config.errors_only {
        return Ok(CheckOutcome::Passthrough {
            checker: checker.as_str().to_string(),
            output: output.combined(),
        });
    }

    let mut aggregator = Aggregator::new(checker.as_str(), ReportMode::ErrorsOnly);
    let count = count_findings(&output.stdout);
    aggregator.record(FileResult::errors(source, output.combined(), count))?;
    Ok(CheckOutcome::Report(aggregator.finish()))
}

/// Common tail of every invocation: configured extra args, then the target.
fn finish_invocation(
    invocation: Invocation,
    checker: &str,
    target: &Path,
    config: &Configuration,
) -> Invocation {
    invocation
        .args(config.tool_args(checker).iter().cloned())
        .arg(target.to_string_lossy())
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
