//! Uniform sampling without replacement.

use roster_core::error::DomainError;
use roster_core::rng::DeterministicRng;
use serde::{Deserialize, Serialize};

/// The sorted result of one sampling operation.
///
/// Values are distinct and strictly increasing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Draw(Vec<u32>);

impl Draw {
    /// Returns the drawn values in ascending order.
    #[must_use]
    pub fn values(&self) -> &[u32] {
        &self.0
    }

    /// Returns the value at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<u32> {
        self.0.get(index).copied()
    }

    /// Number of drawn values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the draw holds no values.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Draws `count` distinct values uniformly from `pool_min..=pool_max` and
/// returns them sorted ascending.
///
/// Each pick takes a uniform index into the values not yet picked and
/// removes it, so every `count`-subset of the pool is equally likely.
///
/// # Errors
///
/// Returns `DomainError::InvalidParameters` if `count` is zero, the pool is
/// empty (`pool_min > pool_max`), or `count` exceeds the pool size.
pub fn sample(
    pool_min: u32,
    pool_max: u32,
    count: usize,
    rng: &mut dyn DeterministicRng,
) -> Result<Draw, DomainError> {
    let invalid = || DomainError::InvalidParameters {
        count,
        pool_min,
        pool_max,
    };

    if count == 0 || pool_min > pool_max {
        return Err(invalid());
    }
    let pool_size = u64::from(pool_max - pool_min) + 1;
    if !u64::try_from(count).is_ok_and(|count| count <= pool_size) {
        return Err(invalid());
    }

    // `picked` stays sorted, so the n-th unpicked value is found by walking
    // past every picked value at or below it. The pool is never materialized.
    let mut picked: Vec<u32> = Vec::with_capacity(count);
    let mut remaining = pool_size;
    for _ in 0..count {
        let last = u32::try_from(remaining - 1).map_err(|_| invalid())?;
        let value = nth_unpicked(&picked, pool_min, rng.next_u32_range(0, last));
        let at = picked.partition_point(|&p| p < value);
        picked.insert(at, value);
        remaining -= 1;
    }

    Ok(Draw(picked))
}

fn nth_unpicked(picked: &[u32], pool_min: u32, index: u32) -> u32 {
    let mut value = pool_min + index;
    for &p in picked {
        if p > value {
            break;
        }
        value += 1;
    }
    value
}
