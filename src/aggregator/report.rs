use std::path::PathBuf;

use serde::Serialize;

use crate::config::Configuration;

/// Decimal places kept when presenting an average score.
pub const SCORE_PRECISION: i32 = 2;

/// How per-file results are summarized. Exactly one mode applies per run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "value")]
pub enum ReportMode {
    /// Count files scoring at or above the threshold.
    Threshold(f64),
    /// List only files scoring at or below the ceiling.
    Ceiling(f64),
    /// Total the findings reported by the tool; no scores.
    ErrorsOnly,
}

impl ReportMode {
    #[must_use]
    pub fn from_configuration(config: &Configuration) -> Self {
        if config.errors_only {
            Self::ErrorsOnly
        } else if let Some(ceiling) = config.score_ceiling {
            Self::Ceiling(ceiling)
        } else {
            Self::Threshold(config.effective_threshold())
        }
    }
}

/// One listed file. `score` is `None` when the tool output had no rating.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileScore {
    pub path: PathBuf,
    pub score: Option<f64>,
}

/// Summary of a check across a file set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateReport {
    pub checker: String,
    pub mode: ReportMode,
    /// Mean of the found scores, rounded to [`SCORE_PRECISION`] places.
    pub average_score: Option<f64>,
    pub files_above_threshold: usize,
    pub files_processed: usize,
    pub files_scored: usize,
    pub error_count: usize,
    /// Listed files in enumeration order.
    pub files: Vec<FileScore>,
    /// Raw tool output, kept when no file produced a score.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_fallback: Option<String>,
}

impl AggregateReport {
    /// Files whose output had no rating line.
    pub fn unscored(&self) -> impl Iterator<Item = &FileScore> {
        self.files.iter().filter(|f| f.score.is_none())
    }

    /// True when every processed file met the threshold. An unscored file
    /// counts as not passing.
    #[must_use]
    pub fn all_passed(&self) -> bool {
        matches!(self.mode, ReportMode::Threshold(_))
            && self.files_above_threshold == self.files_processed
    }
}

#[must_use]
pub fn round_score(value: f64) -> f64 {
    let factor = 10f64.powi(SCORE_PRECISION);
    (value * factor).round() / factor
}
