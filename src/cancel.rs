//! Cooperative cancellation for long-running fills and playback.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Shared abort flag.
///
/// Clones observe the same flag. The engines check it after every emitted
/// pixel and stop with a partial result once it is set.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    /// Create a token that is not cancelled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    /// Whether cancellation was requested.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }

    /// Cancel from a background thread once `timeout` has elapsed.
    pub fn cancel_after(&self, timeout: Duration) {
        let token = self.clone();
        std::thread::spawn(move || {
            std::thread::sleep(timeout);
            log::debug!("deadline of {timeout:?} reached, cancelling");
            token.cancel();
        });
    }

    /// Clear a previous request so the token can be reused.
    pub fn reset(&self) {
        self.flag.store(false, Ordering::Relaxed);
    }
}
