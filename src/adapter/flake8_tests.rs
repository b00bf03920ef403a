use std::path::Path;

use super::*;

#[test]
fn default_invocation() {
    let invocation = invocation(Path::new("src"), &Configuration::default());

    assert_eq!(invocation.program, "flake8");
    assert_eq!(invocation.args, vec!["src"]);
}

#[test]
fn select_is_passed_through() {
    let config = Configuration::default().with_select("E501,W");

    let invocation = invocation(Path::new("src"), &config);

    assert_eq!(invocation.args, vec!["--select=E501,W", "src"]);
}

#[test]
fn errors_only_adds_no_flag() {
    let config = Configuration::default().with_errors_only(true);

    let invocation = invocation(Path::new("src"), &config);

    assert_eq!(invocation.args, vec!["src"]);
}

#[test]
fn count_findings_counts_non_blank_lines() {
    let output = "src/a.py:1:1: F401 'os' imported but unused\n\n\
                  src/b.py:10:80: E501 line too long (90 > 79 characters)\n";

    assert_eq!(count_findings(output), 2);
    assert_eq!(count_findings(""), 0);
}
