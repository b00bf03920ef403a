use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::error::{CodeCheckerError, Result};

/// Cooperative cancellation flag shared between the Ctrl-C handler and a run.
///
/// Cloning yields a handle to the same flag.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// Returns `Err(Cancelled)` once the token has been cancelled.
    ///
    /// # Errors
    /// Returns `CodeCheckerError::Cancelled` if cancellation was requested.
    pub fn check(&self) -> Result<()> {
        if self.is_cancelled() {
            Err(CodeCheckerError::Cancelled)
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
#[path = "cancel_tests.rs"]
mod tests;
