//! Domain error types.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised by the sampler and the roster state machine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// The requested draw cannot be taken from the pool.
    #[error("invalid draw parameters: cannot draw {count} distinct values from {pool_min}..={pool_max}")]
    InvalidParameters {
        /// Number of values requested.
        count: usize,
        /// Lowest value in the pool.
        pool_min: u32,
        /// Highest value in the pool.
        pool_max: u32,
    },

    /// A roster transition was attempted from a state that does not allow it.
    #[error("cannot {operation} while {state}")]
    InvalidTransition {
        /// The attempted transition.
        operation: &'static str,
        /// The state the roster was in.
        state: String,
    },
}

impl DomainError {
    /// Classifies the error for the presentation layer.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidParameters { .. } => ErrorKind::InvalidParameters,
            Self::InvalidTransition { .. } => ErrorKind::InvalidTransition,
        }
    }
}

/// Machine-readable error classification carried by failure events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Draw count exceeds the pool size, is zero, or the pool is empty.
    InvalidParameters,
    /// Internal state machine misuse.
    InvalidTransition,
}
