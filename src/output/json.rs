use crate::adapter::CheckOutcome;
use crate::error::Result;

use super::OutputFormatter;

pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format(&self, outcome: &CheckOutcome) -> Result<String> {
        let mut json = serde_json::to_string_pretty(outcome)?;
        json.push('\n');
        Ok(json)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
