use std::path::Path;

use tracing::debug;

use crate::aggregator::{Aggregator, FileResult};
use crate::config::Configuration;
use crate::error::Result;
use crate::runner::Invocation;
use crate::scanner::collect_files;
use crate::score::extract_score;

use super::{CheckContext, CheckOutcome, check_files, finish_invocation, run_tool};

pub const TOOL: &str = "pylint";
const EXTENSION: &str = "py";

/// Pylint opens each module's findings with `************* Module <name>`.
const SEPARATOR_PREFIX: &str = "***";

pub fn check(source: &Path, ctx: &CheckContext<'_>) -> Result<CheckOutcome> {
    let files = collect_files(source, EXTENSION)?;
    debug!(files = files.len(), source = %source.display(), "pylint file set");

    let mut aggregator = Aggregator::for_configuration(TOOL, ctx.config);
    check_files(
        ctx,
        &files,
        |path| check_file(path, ctx),
        |result| aggregator.record(result),
    )?;

    Ok(CheckOutcome::Report(aggregator.finish()))
}

fn check_file(path: &Path, ctx: &CheckContext<'_>) -> Result<FileResult> {
    let output = run_tool(ctx, &invocation(path, ctx.config))?;
    let raw_output = output.combined();

    if ctx.config.errors_only {
        let count = count_errors(&output.stdout);
        return Ok(FileResult::errors(path, raw_output, count));
    }

    let score = extract_score(&raw_output);
    Ok(FileResult::scored(path, raw_output, score))
}

pub fn invocation(target: &Path, config: &Configuration) -> Invocation {
    let mut invocation = Invocation::new(TOOL);
    invocation = if config.errors_only {
        invocation.arg("--errors-only")
    } else {
        invocation.arg("--score=y")
    };
    if let Some(select) = &config.select {
        invocation = invocation
            .arg("--disable=all")
            .arg(format!("--enable={select}"));
    }
    finish_invocation(invocation, TOOL, target, config)
}

/// True for the per-module banner lines pylint prints between sections.
#[must_use]
pub fn is_separator(line: &str) -> bool {
    line.trim_start().starts_with(SEPARATOR_PREFIX)
}

/// Number of reported errors: every non-blank line that is not a separator.
#[must_use]
pub fn count_errors(output: &str) -> usize {
    output
        .lines()
        .filter(|line| !line.trim().is_empty() && !is_separator(line))
        .count()
}

#[cfg(test)]
#[path = "pylint_tests.rs"]
mod tests;
