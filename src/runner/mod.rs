//! Process plumbing for the external analysis tools.
//!
//! Adapters never spawn processes directly; they go through [`ToolRunner`] so
//! that availability checks and tool output can be faked in tests.

mod process;

pub use process::SystemToolRunner;

use std::fmt;
use std::time::Duration;

use crate::error::Result;

/// A command line for one external tool invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
}

impl Invocation {
    #[must_use]
    pub fn new(program: &str) -> Self {
        Self {
            program: program.to_string(),
            args: Vec::new(),
        }
    }

    #[must_use]
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    #[must_use]
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Captured result of a finished tool process.
///
/// A non-zero `exit_code` is not an error: the analysis tools use it to signal
/// findings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolOutput {
    pub stdout: String,
    pub stderr: String,
    /// `None` when the process was terminated by a signal.
    pub exit_code: Option<i32>,
}

impl ToolOutput {
    #[must_use]
    pub fn new(stdout: impl Into<String>, stderr: impl Into<String>, exit_code: i32) -> Self {
        Self {
            stdout: stdout.into(),
            stderr: stderr.into(),
            exit_code: Some(exit_code),
        }
    }

    /// Both streams joined, stdout first.
    #[must_use]
    pub fn combined(&self) -> String {
        if self.stderr.is_empty() {
            return self.stdout.clone();
        }
        if self.stdout.is_empty() || self.stdout.ends_with('\n') {
            format!("{}{}", self.stdout, self.stderr)
        } else {
            format!("{}\n{}", self.stdout, self.stderr)
        }
    }
}

/// Resolves and runs external tools.
pub trait ToolRunner: Send + Sync {
    /// Returns true if `tool` resolves to an executable on the search path.
    fn is_available(&self, tool: &str) -> bool;

    /// Run `invocation` to completion and capture both output streams.
    ///
    /// # Errors
    /// Returns `ToolExecutionFailed` if the process cannot be spawned or
    /// exceeds `timeout`.
    fn run(&self, invocation: &Invocation, timeout: Option<Duration>) -> Result<ToolOutput>;
}

#[cfg(test)]
pub(crate) mod test_fixtures;

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
