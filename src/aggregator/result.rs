use std::path::{Path, PathBuf};

/// Normalized outcome of running one tool against one file.
///
/// In score mode `score` carries the extracted rating (or `None` when the
/// report had no rating line). In errors-only mode `is_error` is set and
/// `error_count` holds the number of reported findings.
#[derive(Debug, Clone, PartialEq)]
pub struct FileResult {
    pub path: PathBuf,
    pub raw_output: String,
    pub score: Option<f64>,
    pub is_error: bool,
    pub error_count: usize,
}

impl FileResult {
    #[must_use]
    pub fn scored(path: &Path, raw_output: String, score: Option<f64>) -> Self {
        Self {
            path: path.to_path_buf(),
            raw_output,
            score,
            is_error: false,
            error_count: 0,
        }
    }

    #[must_use]
    pub fn errors(path: &Path, raw_output: String, error_count: usize) -> Self {
        Self {
            path: path.to_path_buf(),
            raw_output,
            score: None,
            is_error: true,
            error_count,
        }
    }
}
