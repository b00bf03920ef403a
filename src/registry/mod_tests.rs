use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::*;
use crate::runner::test_fixtures::FakeRunner;

struct StaticAdapter {
    name: &'static str,
    output: &'static str,
}

impl Adapter for StaticAdapter {
    fn name(&self) -> &str {
        self.name
    }

    fn tool(&self) -> &str {
        self.name
    }

    fn check(&self, _source: &Path, _ctx: &CheckContext<'_>) -> Result<CheckOutcome> {
        Ok(CheckOutcome::Passthrough {
            checker: self.name.to_string(),
            output: self.output.to_string(),
        })
    }
}

fn static_factory(name: &'static str, output: &'static str) -> AdapterFactory {
    Box::new(move || Box::new(StaticAdapter { name, output }))
}

fn request(checker: &str) -> CheckRequest {
    CheckRequest::new("src", checker, Configuration::default())
}

#[test]
fn default_registry_has_builtin_checkers_in_order() {
    let registry = CheckerRegistry::default();

    let names: Vec<_> = registry.names().collect();

    assert_eq!(names, vec!["pylint", "flake8", "pydocstyle"]);
}

#[test]
fn new_registry_is_empty() {
    let registry = CheckerRegistry::new();

    assert_eq!(registry.names().count(), 0);
}

#[test]
fn unregistered_checker_is_rejected_before_probing_tools() {
    let registry = CheckerRegistry::default();
    let runner = FakeRunner::new().with_tool("mypy");

    let err = registry
        .dispatch(&request("mypy"), &runner, &CancellationToken::new(), false)
        .unwrap_err();

    assert!(matches!(err, CodeCheckerError::CheckerNotRegistered(ref name) if name == "mypy"));
    assert_eq!(err.to_string(), "Checker 'mypy' is not registered");
    assert!(runner.calls().is_empty());
}

#[test]
fn unregistered_checker_ignores_configuration() {
    let registry = CheckerRegistry::default();
    let config = Configuration::default().with_errors_only(true).with_parallel(true);
    let request = CheckRequest::new("src", "mypy", config);

    let result = registry.dispatch(&request, &FakeRunner::new(), &CancellationToken::new(), false);

    assert!(matches!(result, Err(CodeCheckerError::CheckerNotRegistered(_))));
}

#[test]
fn dispatch_returns_adapter_outcome_untransformed() {
    let mut registry = CheckerRegistry::new();
    registry
        .register("custom", static_factory("custom", "raw output\n"))
        .unwrap();

    let outcome = registry
        .dispatch(&request("custom"), &FakeRunner::new(), &CancellationToken::new(), false)
        .unwrap();

    assert_eq!(
        outcome,
        CheckOutcome::Passthrough {
            checker: "custom".to_string(),
            output: "raw output\n".to_string(),
        }
    );
}

#[test]
fn duplicate_registration_overwrites() {
    let mut registry = CheckerRegistry::new();
    registry.register("custom", static_factory("custom", "first")).unwrap();
    registry.register("custom", static_factory("custom", "second")).unwrap();

    let outcome = registry
        .dispatch(&request("custom"), &FakeRunner::new(), &CancellationToken::new(), false)
        .unwrap();

    assert_eq!(registry.names().count(), 1);
    assert!(matches!(outcome, CheckOutcome::Passthrough { ref output, .. } if output == "second"));
}

#[test]
fn builtin_can_be_replaced() {
    let mut registry = CheckerRegistry::default();
    registry.register("pylint", static_factory("pylint", "stub")).unwrap();

    let outcome = registry
        .dispatch(&request("pylint"), &FakeRunner::new(), &CancellationToken::new(), false)
        .unwrap();

    assert!(matches!(outcome, CheckOutcome::Passthrough { ref output, .. } if output == "stub"));
    let names: Vec<_> = registry.names().collect();
    assert_eq!(names, vec!["pylint", "flake8", "pydocstyle"]);
}

#[test]
fn empty_name_is_rejected() {
    let mut registry = CheckerRegistry::new();

    let err = registry.register("  ", static_factory("x", "")).unwrap_err();

    assert!(matches!(err, CodeCheckerError::Config(_)));
    assert_eq!(registry.names().count(), 0);
}

#[test]
fn factory_runs_once_per_dispatch() {
    let built = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&built);
    let mut registry = CheckerRegistry::new();
    registry
        .register(
            "custom",
            Box::new(move || {
                counter.fetch_add(1, Ordering::SeqCst);
                Box::new(StaticAdapter {
                    name: "custom",
                    output: "",
                })
            }),
        )
        .unwrap();
    let runner = FakeRunner::new();
    let cancel = CancellationToken::new();

    registry.dispatch(&request("custom"), &runner, &cancel, false).unwrap();
    registry.dispatch(&request("custom"), &runner, &cancel, false).unwrap();

    assert_eq!(built.load(Ordering::SeqCst), 2);
}

#[test]
fn builtin_missing_tool_surfaces_unavailable() {
    let registry = CheckerRegistry::default();

    let err = registry
        .dispatch(&request("flake8"), &FakeRunner::new(), &CancellationToken::new(), false)
        .unwrap_err();

    assert!(matches!(err, CodeCheckerError::ToolUnavailable(ref tool) if tool == "flake8"));
}
