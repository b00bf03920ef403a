//! Name-to-adapter registry and the single dispatch entry point.

use std::path::PathBuf;

use indexmap::IndexMap;
use tracing::debug;

use crate::adapter::{Adapter, BuiltinChecker, CheckContext, CheckOutcome};
use crate::cancel::CancellationToken;
use crate::config::Configuration;
use crate::error::{CodeCheckerError, Result};
use crate::runner::ToolRunner;

/// Builds a fresh adapter for each dispatched request.
pub type AdapterFactory = Box<dyn Fn() -> Box<dyn Adapter> + Send + Sync>;

/// One logical check: which checker to run, on what, with which settings.
#[derive(Debug, Clone)]
pub struct CheckRequest {
    pub source: PathBuf,
    pub checker: String,
    pub config: Configuration,
}

impl CheckRequest {
    #[must_use]
    pub fn new(source: impl Into<PathBuf>, checker: impl Into<String>, config: Configuration) -> Self {
        Self {
            source: source.into(),
            checker: checker.into(),
            config,
        }
    }
}

pub struct CheckerRegistry {
    factories: IndexMap<String, AdapterFactory>,
}

impl CheckerRegistry {
    /// An empty registry with no checkers bound.
    #[must_use]
    pub fn new() -> Self {
        Self {
            factories: IndexMap::new(),
        }
    }

    /// Bind `name` to `factory`, replacing any existing binding.
    ///
    /// # Errors
    /// Returns a configuration error if `name` is empty.
    pub fn register(&mut self, name: &str, factory: AdapterFactory) -> Result<()> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CodeCheckerError::Config(
                "checker name must not be empty".to_string(),
            ));
        }
        if self.factories.insert(name.to_string(), factory).is_some() {
            debug!(checker = name, "replaced existing checker binding");
        }
        Ok(())
    }

    /// Registered checker names, in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.factories.keys().map(String::as_str)
    }

    /// Run the adapter bound to `request.checker` and return its outcome as is.
    ///
    /// # Errors
    /// Returns `CheckerNotRegistered` for an unknown name, before any tool is
    /// probed. Any adapter error is passed through unchanged.
    pub fn dispatch(
        &self,
        request: &CheckRequest,
        runner: &dyn ToolRunner,
        cancel: &CancellationToken,
        show_progress: bool,
    ) -> Result<CheckOutcome> {
        let factory = self
            .factories
            .get(&request.checker)
            .ok_or_else(|| CodeCheckerError::CheckerNotRegistered(request.checker.clone()))?;

        let adapter = factory();
        debug!(
            checker = adapter.name(),
            tool = adapter.tool(),
            source = %request.source.display(),
            "dispatching check"
        );
        let ctx = CheckContext::new(&request.config, runner, cancel).with_progress(show_progress);
        adapter.check(&request.source, &ctx)
    }
}

impl Default for CheckerRegistry {
    fn default() -> Self {
        let mut registry = Self::new();
        for checker in BuiltinChecker::ALL {
            registry
                .factories
                .insert(checker.as_str().to_string(), Box::new(move || Box::new(checker)));
        }
        registry
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
