mod filter;

pub use filter::{ExtensionFilter, FileFilter};

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{CodeCheckerError, Result};

/// Trait for scanning directories and finding files.
pub trait FileScanner {
    /// Scan a directory and return all matching file paths.
    ///
    /// # Errors
    /// Returns an error if the directory cannot be read.
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>>;
}

/// Recursive scanner yielding regular files in lexicographic order.
///
/// Entries are sorted by file name within each directory, so repeated scans of
/// an unchanged tree return the same sequence.
pub struct DirectoryScanner<F: FileFilter> {
    filter: F,
}

impl<F: FileFilter> DirectoryScanner<F> {
    #[must_use]
    pub const fn new(filter: F) -> Self {
        Self { filter }
    }

    fn scan_impl(&self, root: &Path) -> Vec<PathBuf> {
        WalkDir::new(root)
            .sort_by_file_name()
            .into_iter()
            .filter_map(std::result::Result::ok)
            .filter(|e| e.file_type().is_file())
            .map(|e| e.path().to_path_buf())
            .filter(|p| self.filter.should_include(p))
            .collect()
    }
}

impl<F: FileFilter> FileScanner for DirectoryScanner<F> {
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>> {
        Ok(self.scan_impl(root))
    }
}

/// Resolve a source path to the files a per-file tool should check.
///
/// A directory expands to every file with `extension` beneath it; a single
/// file is returned as-is regardless of its extension.
///
/// # Errors
/// Returns `SourceNotFound` if `source` does not exist.
pub fn collect_files(source: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    if source.is_file() {
        return Ok(vec![source.to_path_buf()]);
    }
    if !source.is_dir() {
        return Err(CodeCheckerError::SourceNotFound(source.to_path_buf()));
    }

    DirectoryScanner::new(ExtensionFilter::new([extension])).scan(source)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
