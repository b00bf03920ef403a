use std::fs;

use crate::{CodeCheckerError, EXIT_SUCCESS, Result};

#[must_use]
pub fn run_init(args: &crate::cli::InitArgs) -> i32 {
    match run_init_impl(args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            e.exit_code()
        }
    }
}

/// Initializes a new configuration file.
///
/// # Errors
/// Returns an error if the file already exists (without --force) or cannot be written.
pub fn run_init_impl(args: &crate::cli::InitArgs) -> Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(CodeCheckerError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    fs::write(output_path, generate_config_template())?;

    println!("Created configuration file: {}", output_path.display());
    Ok(())
}

#[must_use]
pub fn generate_config_template() -> String {
    r#"# code-checker configuration file
# Command-line flags take precedence over the values below.

[check]
# Score a file needs to count as passing (default: 8.0)
score_threshold = 8.0

# Fail the run when any file scores below this value (default: unset)
# fail_under = 5.0

# Timeout per tool invocation in seconds (default: 300)
timeout_secs = 300

# Run per-file invocations in parallel (default: false)
parallel = false

# Extra arguments passed to each tool, placed before the target path
# [tools.pylint]
# args = ["--rcfile=.pylintrc"]

# [tools.flake8]
# args = ["--max-line-length=100"]

# [tools.pydocstyle]
# args = ["--convention=google"]
"#
    .to_string()
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
