use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::config::Configuration;
use crate::runner::Invocation;

use super::finish_invocation;

pub const TOOL: &str = "pydocstyle";

static FINDING_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    // SAFETY: Pattern is a static string known to be valid
    Regex::new(r"^\s+D\d{3}\b").expect("valid finding pattern")
});

pub fn invocation(target: &Path, config: &Configuration) -> Invocation {
    let mut invocation = Invocation::new(TOOL);
    if let Some(select) = &config.select {
        invocation = invocation.arg(format!("--select={select}"));
    }
    finish_invocation(invocation, TOOL, target, config)
}

/// pydocstyle reports each finding as a location header followed by an
/// indented `Dxxx: message` line; only the latter is counted.
pub fn count_findings(output: &str) -> usize {
    output
        .lines()
        .filter(|line| FINDING_PATTERN.is_match(line))
        .count()
}

#[cfg(test)]
#[path = "pydocstyle_tests.rs"]
mod tests;
