//! Folds per-file results into one [`AggregateReport`].

mod report;
mod result;

pub use report::{AggregateReport, FileScore, ReportMode, SCORE_PRECISION, round_score};
pub use result::FileResult;

use tracing::warn;

use crate::config::Configuration;
use crate::error::{CodeCheckerError, Result};

/// Running statistics for one check.
///
/// The aggregator is the only writer of these totals; results are fed to it
/// one at a time in enumeration order.
#[derive(Debug)]
pub struct Aggregator {
    checker: String,
    mode: ReportMode,
    floor: Option<f64>,
    list_unscored: bool,
    score_sum: f64,
    files_scored: usize,
    files_processed: usize,
    files_above_threshold: usize,
    error_count: usize,
    files: Vec<FileScore>,
    unscored_output: Vec<String>,
}

impl Aggregator {
    #[must_use]
    pub fn new(checker: &str, mode: ReportMode) -> Self {
        Self {
            checker: checker.to_string(),
            mode,
            floor: None,
            list_unscored: !matches!(mode, ReportMode::Ceiling(_)),
            score_sum: 0.0,
            files_scored: 0,
            files_processed: 0,
            files_above_threshold: 0,
            error_count: 0,
            files: Vec::new(),
            unscored_output: Vec::new(),
        }
    }

    /// Aggregator for `checker` with mode, floor and listing taken from `config`.
    ///
    /// Unscored files are always listed outside ceiling mode; in ceiling mode
    /// they are listed only when verbose.
    #[must_use]
    pub fn for_configuration(checker: &str, config: &Configuration) -> Self {
        let mode = ReportMode::from_configuration(config);
        let mut aggregator = Self::new(checker, mode).with_floor(config.fail_under);
        aggregator.list_unscored |= config.verbose;
        aggregator
    }

    #[must_use]
    pub const fn with_floor(mut self, floor: Option<f64>) -> Self {
        self.floor = floor;
        self
    }

    /// Fold one file's result into the totals.
    ///
    /// # Errors
    /// Returns `ScoreBelowFloor` when a floor is set and the file scores
    /// under it; the run should then be abandoned.
    pub fn record(&mut self, result: FileResult) -> Result<()> {
        self.files_processed += 1;

        if self.mode == ReportMode::ErrorsOnly {
            if result.is_error {
                self.error_count += result.error_count;
            }
            return Ok(());
        }

        let Some(score) = result.score else {
            warn!(path = %result.path.display(), "score not found in tool output");
            if self.list_unscored {
                self.files.push(FileScore {
                    path: result.path,
                    score: None,
                });
            }
            self.unscored_output.push(result.raw_output);
            return Ok(());
        };

        if let Some(floor) = self.floor
            && score < floor
        {
            return Err(CodeCheckerError::ScoreBelowFloor {
                path: result.path,
                score,
                floor,
            });
        }

        self.score_sum += score;
        self.files_scored += 1;

        match self.mode {
            ReportMode::Threshold(threshold) => {
                if score >= threshold {
                    self.files_above_threshold += 1;
                }
                self.files.push(FileScore {
                    path: result.path,
                    score: Some(score),
                });
            }
            ReportMode::Ceiling(ceiling) => {
                if score <= ceiling {
                    self.files.push(FileScore {
                        path: result.path,
                        score: Some(score),
                    });
                }
            }
            ReportMode::ErrorsOnly => {}
        }

        Ok(())
    }

    #[must_use]
    pub fn finish(self) -> AggregateReport {
        #[allow(clippy::cast_precision_loss)]
        let average_score =
            (self.files_scored > 0).then(|| round_score(self.score_sum / self.files_scored as f64));

        let raw_fallback = (self.mode != ReportMode::ErrorsOnly
            && self.files_scored == 0
            && !self.unscored_output.is_empty())
        .then(|| self.unscored_output.join("\n"));

        AggregateReport {
            checker: self.checker,
            mode: self.mode,
            average_score,
            files_above_threshold: self.files_above_threshold,
            files_processed: self.files_processed,
            files_scored: self.files_scored,
            error_count: self.error_count,
            files: self.files,
            raw_fallback,
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
