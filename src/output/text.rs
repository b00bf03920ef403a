use std::io::Write;

use crate::adapter::CheckOutcome;
use crate::aggregator::{AggregateReport, FileScore, ReportMode};
use crate::error::Result;

use super::OutputFormatter;

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if stdout is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// ANSI color codes
mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const RESET: &str = "\x1b[0m";
}

pub struct TextFormatter {
    use_colors: bool,
    verbose: u8,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self::with_verbose(mode, 0)
    }

    #[must_use]
    pub fn with_verbose(mode: ColorMode, verbose: u8) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
            verbose,
        }
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                // Respect NO_COLOR environment variable
                if std::env::var("NO_COLOR").is_ok() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.use_colors {
            return text.to_string();
        }
        format!("{color}{text}{}", ansi::RESET)
    }

    fn format_report(&self, report: &AggregateReport, output: &mut Vec<u8>) {
        writeln!(
            output,
            "{}: {} {} checked",
            report.checker,
            report.files_processed,
            plural(report.files_processed, "file", "files")
        )
        .ok();

        match report.mode {
            ReportMode::Threshold(threshold) => {
                self.format_threshold(report, threshold, output);
            }
            ReportMode::Ceiling(ceiling) => self.format_ceiling(report, ceiling, output),
            ReportMode::ErrorsOnly => {
                let count = report.error_count.to_string();
                let color = if report.error_count == 0 {
                    ansi::GREEN
                } else {
                    ansi::RED
                };
                writeln!(output, "Total errors: {}", self.colorize(&count, color)).ok();
            }
        }

        if let Some(raw) = &report.raw_fallback {
            writeln!(output, "\nTool output:\n{}", raw.trim_end()).ok();
        }
    }

    fn format_threshold(&self, report: &AggregateReport, threshold: f64, output: &mut Vec<u8>) {
        for file in &report.files {
            match file.score {
                Some(score) if score >= threshold => {
                    if self.verbose >= 1 {
                        self.format_file(file, "✓", ansi::GREEN, output);
                    }
                }
                Some(_) => self.format_file(file, "✗", ansi::RED, output),
                None => self.format_file(file, "?", ansi::YELLOW, output),
            }
        }

        writeln!(output, "Average score: {}", format_average(report)).ok();
        let unscored = report.unscored().count();
        if unscored > 0 {
            let count = unscored.to_string();
            writeln!(
                output,
                "Files without a score: {}",
                self.colorize(&count, ansi::YELLOW)
            )
            .ok();
        }
        let passed = format!(
            "{}/{}",
            report.files_above_threshold, report.files_processed
        );
        let color = if report.all_passed() {
            ansi::GREEN
        } else {
            ansi::RED
        };
        writeln!(
            output,
            "Files at or above {threshold:.2}: {}",
            self.colorize(&passed, color)
        )
        .ok();
    }

    fn format_ceiling(&self, report: &AggregateReport, ceiling: f64, output: &mut Vec<u8>) {
        let listed = report.files.iter().filter(|f| f.score.is_some()).count();
        if listed == 0 {
            writeln!(output, "No files scored at or below {ceiling:.2}").ok();
        } else {
            writeln!(output, "Files scoring at or below {ceiling:.2}:").ok();
        }
        for file in &report.files {
            if file.score.is_some() {
                self.format_file(file, "✗", ansi::YELLOW, output);
            } else {
                self.format_file(file, "?", ansi::YELLOW, output);
            }
        }
        writeln!(output, "Average score: {}", format_average(report)).ok();
    }

    fn format_file(&self, file: &FileScore, icon: &str, color: &str, output: &mut Vec<u8>) {
        let score = file
            .score
            .map_or_else(|| "score not found".to_string(), |s| format!("{s:.2}"));
        writeln!(
            output,
            "{icon} {}  {}",
            self.colorize(&score, color),
            file.path.display()
        )
        .ok();
    }
}

fn format_average(report: &AggregateReport) -> String {
    report
        .average_score
        .map_or_else(|| "no scores".to_string(), |avg| format!("{avg:.2}"))
}

const fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new(ColorMode::Auto)
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, outcome: &CheckOutcome) -> Result<String> {
        let mut output = Vec::new();

        match outcome {
            CheckOutcome::Report(report) => self.format_report(report, &mut output),
            CheckOutcome::Passthrough { checker, output: raw } => {
                let raw = raw.trim_end();
                if raw.is_empty() {
                    writeln!(output, "{checker}: no issues found").ok();
                } else {
                    writeln!(output, "{raw}").ok();
                }
            }
        }

        Ok(String::from_utf8_lossy(&output).to_string())
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
