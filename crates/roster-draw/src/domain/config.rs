//! Draw configuration.

use std::time::Duration;

/// Lowest number in the pool.
pub const POOL_MIN: u32 = 1;
/// Highest number in the pool.
pub const POOL_MAX: u32 = 25;
/// How many numbers each draw selects.
pub const DRAW_COUNT: usize = 5;
/// Suspense delay between accepting a draw and the first reveal step.
pub const PRE_ROLL: Duration = Duration::from_millis(2_000);
/// Delay before each reveal step.
pub const PER_STEP: Duration = Duration::from_millis(500);
/// Delay between the last reveal and the finished event.
pub const FINISH_DELAY: Duration = Duration::from_millis(1_000);

/// Parameters of a draw session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawConfig {
    /// Lowest number in the pool (inclusive).
    pub pool_min: u32,
    /// Highest number in the pool (inclusive).
    pub pool_max: u32,
    /// Number of distinct values per draw.
    pub draw_count: usize,
    /// Wait before revealing begins.
    pub pre_roll: Duration,
    /// Wait before each reveal step.
    pub per_step: Duration,
    /// Wait after the last reveal step.
    pub finish_delay: Duration,
}

impl Default for DrawConfig {
    fn default() -> Self {
        Self {
            pool_min: POOL_MIN,
            pool_max: POOL_MAX,
            draw_count: DRAW_COUNT,
            pre_roll: PRE_ROLL,
            per_step: PER_STEP,
            finish_delay: FINISH_DELAY,
        }
    }
}

impl DrawConfig {
    /// Returns a copy with the three reveal delays replaced.
    #[must_use]
    pub fn with_delays(self, pre_roll: Duration, per_step: Duration, finish_delay: Duration) -> Self {
        Self {
            pre_roll,
            per_step,
            finish_delay,
            ..self
        }
    }

}
