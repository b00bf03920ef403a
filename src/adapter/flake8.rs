use std::path::Path;

use crate::config::Configuration;
use crate::runner::Invocation;

use super::finish_invocation;

pub const TOOL: &str = "flake8";

pub fn invocation(target: &Path, config: &Configuration) -> Invocation {
    let mut invocation = Invocation::new(TOOL);
    if let Some(select) = &config.select {
        invocation = invocation.arg(format!("--select={select}"));
    }
    finish_invocation(invocation, TOOL, target, config)
}

/// flake8 prints one `path:line:col: CODE message` line per finding.
pub fn count_findings(output: &str) -> usize {
    output.lines().filter(|line| !line.trim().is_empty()).count()
}

#[cfg(test)]
#[path = "flake8_tests.rs"]
mod tests;
