use std::io::IsTerminal;
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

const TEMPLATE: &str = "{spinner:.green} {prefix} [{bar:30.cyan/blue}] {pos}/{len} {wide_msg}";

/// Per-file progress for a check, drawn on stderr.
///
/// Hidden when progress is not wanted or stderr is not a terminal. The
/// completion count is kept separately so it stays exact under rayon.
#[derive(Clone)]
pub struct ScanProgress {
    bar: ProgressBar,
    done: Arc<AtomicU64>,
}

impl ScanProgress {
    #[must_use]
    pub fn new(total: u64, quiet: bool) -> Self {
        Self::new_with_visibility(total, quiet, std::io::stderr().is_terminal())
    }

    fn new_with_visibility(total: u64, quiet: bool, is_tty: bool) -> Self {
        let bar = if quiet || !is_tty {
            ProgressBar::hidden()
        } else {
            let bar = ProgressBar::with_draw_target(Some(total), ProgressDrawTarget::stderr());
            bar.set_style(
                ProgressStyle::with_template(TEMPLATE)
                    // SAFETY: Template is a static string with valid format specifiers
                    .expect("valid template")
                    .progress_chars("=> "),
            );
            bar.set_prefix("Checking");
            bar
        };

        Self {
            bar,
            done: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Show `label` as the file currently in flight.
    pub fn set_message(&self, label: &str) {
        self.bar.set_message(label.to_string());
    }

    /// Mark one more file as done.
    pub fn inc(&self) {
        let done = self.done.fetch_add(1, Ordering::Relaxed) + 1;
        self.bar.set_position(done);
    }

    #[must_use]
    pub fn position(&self) -> u64 {
        self.done.load(Ordering::Relaxed)
    }

    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

/// `[k/n] path` label for the `index`-th (1-based) of `total` files.
#[must_use]
pub fn progress_label(index: usize, total: usize, path: &Path) -> String {
    format!("[{index}/{total}] {}", path.display())
}

#[cfg(test)]
#[path = "progress_tests.rs"]
mod tests;
