//! Time sources.
//!
//! Two seams: [`Clock`] stamps events with wall-clock time, and [`Timer`]
//! suspends the reveal between steps. Tests substitute a fixed clock and a
//! timer that records the requested delays without sleeping.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Source of the current time for event metadata.
pub trait Clock: Send + Sync {
    /// Returns the current time.
    fn now(&self) -> DateTime<Utc>;
}

/// Suspends the calling task for a duration without blocking the thread.
#[async_trait]
pub trait Timer: Send + Sync {
    /// Completes once `duration` has elapsed.
    async fn sleep(&self, duration: Duration);
}

/// Clock backed by the system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Timer backed by the tokio runtime clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioTimer;

#[async_trait]
impl Timer for TokioTimer {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_tokio_timer_waits_for_the_full_duration() {
        let started = tokio::time::Instant::now();
        TokioTimer.sleep(Duration::from_millis(500)).await;
        assert!(started.elapsed() >= Duration::from_millis(500));
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_duration_completes_without_advancing() {
        let started = tokio::time::Instant::now();
        TokioTimer.sleep(Duration::ZERO).await;
        assert!(started.elapsed() < Duration::from_millis(1));
    }
}
