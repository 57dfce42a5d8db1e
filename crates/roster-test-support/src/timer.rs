//! Test timer: completes immediately and remembers what was asked of it.

use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use roster_core::time::Timer;

/// A timer that yields once instead of sleeping and records every requested
/// duration in order.
#[derive(Debug, Default)]
pub struct InstantTimer {
    requested: Mutex<Vec<Duration>>,
}

impl InstantTimer {
    /// Creates a timer with an empty record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the durations requested so far.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn requested(&self) -> Vec<Duration> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait]
impl Timer for InstantTimer {
    async fn sleep(&self, duration: Duration) {
        self.requested.lock().unwrap().push(duration);
        tokio::task::yield_now().await;
    }
}
