//! Scripted [`ToolRunner`] for exercising adapters without real processes.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

use crate::cancel::CancellationToken;
use crate::error::{CodeCheckerError, Result};

use super::{Invocation, ToolOutput, ToolRunner};

/// Answers each invocation with output keyed by its target (the last argument).
pub struct FakeRunner {
    available: HashSet<String>,
    outputs: HashMap<PathBuf, ToolOutput>,
    failing: HashSet<PathBuf>,
    cancel_after: Option<(usize, CancellationToken)>,
    calls: Mutex<Vec<Invocation>>,
}

impl FakeRunner {
    pub fn new() -> Self {
        Self {
            available: HashSet::new(),
            outputs: HashMap::new(),
            failing: HashSet::new(),
            cancel_after: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_tool(mut self, tool: &str) -> Self {
        self.available.insert(tool.to_string());
        self
    }

    pub fn with_output(mut self, target: impl AsRef<Path>, stdout: &str) -> Self {
        self.outputs.insert(
            target.as_ref().to_path_buf(),
            ToolOutput::new(stdout, "", 1),
        );
        self
    }

    pub fn with_streams(mut self, target: impl AsRef<Path>, stdout: &str, stderr: &str) -> Self {
        self.outputs.insert(
            target.as_ref().to_path_buf(),
            ToolOutput::new(stdout, stderr, 1),
        );
        self
    }

    /// Fail the invocation for `target` as if the process could not start.
    pub fn with_failure(mut self, target: impl AsRef<Path>) -> Self {
        self.failing.insert(target.as_ref().to_path_buf());
        self
    }

    /// Cancel `token` once `calls` invocations have run.
    pub fn with_cancel_after(mut self, calls: usize, token: CancellationToken) -> Self {
        self.cancel_after = Some((calls, token));
        self
    }

    pub fn calls(&self) -> Vec<Invocation> {
        self.calls.lock().unwrap().clone()
    }

    pub fn targets(&self) -> Vec<PathBuf> {
        self.calls()
            .iter()
            .filter_map(|c| c.args.last().map(PathBuf::from))
            .collect()
    }
}

impl ToolRunner for FakeRunner {
    fn is_available(&self, tool: &str) -> bool {
        self.available.contains(tool)
    }

    fn run(&self, invocation: &Invocation, _timeout: Option<Duration>) -> Result<ToolOutput> {
        let count = {
            let mut calls = self.calls.lock().unwrap();
            calls.push(invocation.clone());
            calls.len()
        };
        if let Some((limit, token)) = &self.cancel_after
            && count >= *limit
        {
            token.cancel();
        }

        let target = invocation
            .args
            .last()
            .map(PathBuf::from)
            .unwrap_or_default();
        if self.failing.contains(&target) {
            return Err(CodeCheckerError::execution_failed(
                &invocation.program,
                "No such file or directory (os error 2)",
            ));
        }
        Ok(self.outputs.get(&target).cloned().unwrap_or_default())
    }
}
