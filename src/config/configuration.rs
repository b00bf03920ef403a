use std::collections::HashMap;
use std::time::Duration;

use crate::error::{CodeCheckerError, Result};

use super::Config;

/// Score counted as passing when no threshold is configured.
pub const DEFAULT_SCORE_THRESHOLD: f64 = 8.0;

/// Upper bound on a single tool invocation when no timeout is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(300);

/// Highest rating pylint reports. Ratings have no lower bound.
const MAX_SCORE: f64 = 10.0;

/// Options for a single check run.
///
/// Built once per invocation and passed by reference to every adapter call.
/// Adapters ignore the options that do not apply to their tool.
#[derive(Debug, Clone, PartialEq)]
pub struct Configuration {
    pub verbose: bool,
    pub errors_only: bool,
    pub score_threshold: Option<f64>,
    /// Report only files scoring at or below this value.
    pub score_ceiling: Option<f64>,
    /// Finding codes passed through to the tool's selection flag.
    pub select: Option<String>,
    /// Abort the run when a file scores below this value.
    pub fail_under: Option<f64>,
    pub timeout: Option<Duration>,
    pub parallel: bool,
    pub tool_args: HashMap<String, Vec<String>>,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            verbose: false,
            errors_only: false,
            score_threshold: None,
            score_ceiling: None,
            select: None,
            fail_under: None,
            timeout: Some(DEFAULT_TIMEOUT),
            parallel: false,
            tool_args: HashMap::new(),
        }
    }
}

impl Configuration {
    /// Seed a configuration from file settings. Command-line overrides are
    /// applied on top by the caller.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            score_threshold: config.check.score_threshold,
            fail_under: config.check.fail_under,
            timeout: Some(
                config
                    .check
                    .timeout_secs
                    .map_or(DEFAULT_TIMEOUT, Duration::from_secs),
            ),
            parallel: config.check.parallel,
            tool_args: config
                .tools
                .iter()
                .map(|(name, tool)| (name.clone(), tool.args.clone()))
                .collect(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn effective_threshold(&self) -> f64 {
        self.score_threshold.unwrap_or(DEFAULT_SCORE_THRESHOLD)
    }

    /// Extra arguments configured for `checker`.
    #[must_use]
    pub fn tool_args(&self, checker: &str) -> &[String] {
        self.tool_args.get(checker).map_or(&[], Vec::as_slice)
    }

    #[must_use]
    pub const fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    #[must_use]
    pub const fn with_errors_only(mut self, errors_only: bool) -> Self {
        self.errors_only = errors_only;
        self
    }

    #[must_use]
    pub const fn with_score_threshold(mut self, threshold: f64) -> Self {
        self.score_threshold = Some(threshold);
        self
    }

    #[must_use]
    pub const fn with_score_ceiling(mut self, ceiling: f64) -> Self {
        self.score_ceiling = Some(ceiling);
        self
    }

    #[must_use]
    pub fn with_select(mut self, select: impl Into<String>) -> Self {
        self.select = Some(select.into());
        self
    }

    #[must_use]
    pub const fn with_fail_under(mut self, floor: f64) -> Self {
        self.fail_under = Some(floor);
        self
    }

    #[must_use]
    pub const fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub const fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Reject option values no tool could satisfy.
    ///
    /// # Errors
    /// Returns a configuration error naming the offending option.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("score threshold", self.score_threshold),
            ("score ceiling", self.score_ceiling),
            ("fail-under floor", self.fail_under),
        ] {
            if let Some(value) = value
                && (value.is_nan() || value > MAX_SCORE)
            {
                return Err(CodeCheckerError::Config(format!(
                    "{name} must be at most {MAX_SCORE}, got {value}"
                )));
            }
        }

        if self.timeout.is_some_and(|t| t.is_zero()) {
            return Err(CodeCheckerError::Config(
                "timeout must be greater than zero".to_string(),
            ));
        }

        if self.select.as_deref().is_some_and(|s| s.trim().is_empty()) {
            return Err(CodeCheckerError::Config(
                "select filter must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "configuration_tests.rs"]
mod tests;
