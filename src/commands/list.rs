use crate::EXIT_SUCCESS;
use crate::registry::CheckerRegistry;

#[must_use]
pub fn run_list() -> i32 {
    print!("{}", format_checker_list(&CheckerRegistry::default()));
    EXIT_SUCCESS
}

/// One registered checker name per line, in registration order.
#[must_use]
pub fn format_checker_list(registry: &CheckerRegistry) -> String {
    registry.names().fold(String::new(), |mut out, name| {
        out.push_str(name);
        out.push('\n');
        out
    })
}

#[cfg(test)]
#[path = "list_tests.rs"]
mod tests;
