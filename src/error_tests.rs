use std::path::PathBuf;

use super::*;

#[test]
fn error_display_checker_not_registered() {
    let err = CodeCheckerError::CheckerNotRegistered("mypy".to_string());
    assert_eq!(err.to_string(), "Checker 'mypy' is not registered");
}

#[test]
fn error_display_tool_unavailable() {
    let err = CodeCheckerError::ToolUnavailable("pylint".to_string());
    assert_eq!(err.to_string(), "Tool 'pylint' was not found on PATH");
}

#[test]
fn error_display_execution_failed() {
    let err = CodeCheckerError::execution_failed("flake8", "timed out after 5s");
    assert_eq!(err.to_string(), "Failed to run flake8: timed out after 5s");
}

#[test]
fn error_display_score_below_floor() {
    let err = CodeCheckerError::ScoreBelowFloor {
        path: PathBuf::from("src/bad.py"),
        score: 3.5,
        floor: 5.0,
    };
    assert_eq!(
        err.to_string(),
        "Check failed: src/bad.py scored 3.50, below the minimum of 5.00"
    );
}

#[test]
fn error_display_file_read() {
    let err = CodeCheckerError::FileRead {
        path: PathBuf::from("config.toml"),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "file not found"),
    };
    assert!(err.to_string().contains("config.toml"));
}

#[test]
fn error_messages_are_single_line() {
    let errors = [
        CodeCheckerError::CheckerNotRegistered("mypy".to_string()),
        CodeCheckerError::ToolUnavailable("pylint".to_string()),
        CodeCheckerError::execution_failed("pylint", "No such file or directory"),
        CodeCheckerError::Cancelled,
        CodeCheckerError::SourceNotFound(PathBuf::from("missing")),
        CodeCheckerError::Config("bad value".to_string()),
    ];
    for err in errors {
        assert!(!err.to_string().contains('\n'), "multi-line: {err}");
    }
}

#[test]
fn exit_codes_follow_error_kind() {
    assert_eq!(
        CodeCheckerError::CheckerNotRegistered("mypy".to_string()).exit_code(),
        EXIT_ERROR
    );
    assert_eq!(
        CodeCheckerError::ToolUnavailable("pylint".to_string()).exit_code(),
        EXIT_ERROR
    );
    assert_eq!(
        CodeCheckerError::ScoreBelowFloor {
            path: PathBuf::from("a.py"),
            score: 1.0,
            floor: 2.0,
        }
        .exit_code(),
        EXIT_CHECK_FAILED
    );
    assert_eq!(CodeCheckerError::Cancelled.exit_code(), EXIT_CANCELLED);
}

#[test]
fn io_error_converts() {
    let err: CodeCheckerError = std::io::Error::other("boom").into();
    assert!(matches!(err, CodeCheckerError::Io(_)));
}
