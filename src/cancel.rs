use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// Cooperative cancellation flag for pixel scans.
///
/// Scans check it between samples and stop early, keeping whatever they
/// computed so far. Clones share the same flag.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// A token that cancels itself once `timeout` has elapsed.
    pub fn with_deadline(timeout: Duration) -> Self {
        let token = Self::new();
        let trigger = token.clone();
        thread::spawn(move || {
            thread::sleep(timeout);
            trigger.cancel();
        });
        token
    }

    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}
