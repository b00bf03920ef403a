use std::sync::LazyLock;

use regex::Regex;

static RATING_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    // SAFETY: Pattern is a static string known to be valid
    Regex::new(r"rated at (-?\d+(?:\.\d+)?)/10").expect("valid rating pattern")
});

/// Extract the quality score from a linter report.
///
/// Looks for the first `rated at X/10` line and returns `X`. A report without
/// such a line yields `None`.
#[must_use]
pub fn extract_score(output: &str) -> Option<f64> {
    RATING_PATTERN
        .captures(output)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

#[cfg(test)]
#[path = "score_tests.rs"]
mod tests;
