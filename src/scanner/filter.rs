use std::path::Path;

pub trait FileFilter {
    fn should_include(&self, path: &Path) -> bool;
}

/// Accepts files whose extension is one of a fixed set.
pub struct ExtensionFilter {
    extensions: Vec<String>,
}

impl ExtensionFilter {
    #[must_use]
    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            extensions: extensions.into_iter().map(Into::into).collect(),
        }
    }
}

impl FileFilter for ExtensionFilter {
    fn should_include(&self, path: &Path) -> bool {
        if self.extensions.is_empty() {
            return true;
        }

        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|e| e == ext))
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
