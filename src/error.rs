use std::path::PathBuf;

use thiserror::Error;

use crate::{EXIT_CANCELLED, EXIT_CHECK_FAILED, EXIT_ERROR};

#[derive(Error, Debug)]
pub enum CodeCheckerError {
    #[error("Checker '{0}' is not registered")]
    CheckerNotRegistered(String),

    #[error("Tool '{0}' was not found on PATH")]
    ToolUnavailable(String),

    #[error("Failed to run {tool}: {reason}")]
    ToolExecutionFailed { tool: String, reason: String },

    #[error("Check failed: {} scored {score:.2}, below the minimum of {floor:.2}", path.display())]
    ScoreBelowFloor {
        path: PathBuf,
        score: f64,
        floor: f64,
    },

    #[error("Check cancelled")]
    Cancelled,

    #[error("Source path does not exist: {}", .0.display())]
    SourceNotFound(PathBuf),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read file: {}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

impl CodeCheckerError {
    /// Builds a `ToolExecutionFailed` error for `tool`.
    pub fn execution_failed(tool: &str, reason: impl Into<String>) -> Self {
        Self::ToolExecutionFailed {
            tool: tool.to_string(),
            reason: reason.into(),
        }
    }

    /// Process exit code the orchestrator reports for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::ScoreBelowFloor { .. } => EXIT_CHECK_FAILED,
            Self::Cancelled => EXIT_CANCELLED,
            _ => EXIT_ERROR,
        }
    }
}

pub type Result<T> = std::result::Result<T, CodeCheckerError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
