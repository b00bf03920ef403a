use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Contents of a `.code-checker.toml` file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub check: CheckConfig,

    /// Per-tool settings keyed by checker name (`[tools.pylint]`).
    #[serde(default)]
    pub tools: HashMap<String, ToolConfig>,
}

/// Defaults for the `check` command.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CheckConfig {
    /// Score counted as passing (default: 8.0).
    pub score_threshold: Option<f64>,

    /// Abort the run when any file scores below this value.
    pub fail_under: Option<f64>,

    /// Per-invocation timeout in seconds (default: 300).
    pub timeout_secs: Option<u64>,

    /// Run per-file invocations in parallel.
    #[serde(default)]
    pub parallel: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ToolConfig {
    /// Extra arguments inserted before the target path.
    #[serde(default)]
    pub args: Vec<String>,
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
