//! Events emitted by the roster during a draw session.

use roster_core::error::ErrorKind;
use roster_core::event::EventMetadata;
use serde::{Deserialize, Serialize};

/// Event payload variants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DrawEventKind {
    /// A draw was accepted and is being sampled.
    Started,
    /// One value of the draw is revealed.
    Revealed {
        /// Zero-based position within the draw.
        index: usize,
        /// The revealed value.
        value: u32,
    },
    /// Every value has been revealed.
    Finished {
        /// All drawn values, ascending.
        values: Vec<u32>,
    },
    /// The draw attempt failed and the roster is idle again.
    Failed {
        /// Error classification.
        kind: ErrorKind,
        /// Human-readable description.
        message: String,
    },
    /// The last draw was cleared.
    Cleared,
}

impl DrawEventKind {
    /// Routing name of this event kind.
    #[must_use]
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::Started => "roster.started",
            Self::Revealed { .. } => "roster.revealed",
            Self::Finished { .. } => "roster.finished",
            Self::Failed { .. } => "roster.failed",
            Self::Cleared => "roster.cleared",
        }
    }
}

/// Event envelope delivered to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawEvent {
    /// Event metadata.
    pub metadata: EventMetadata,
    /// Event-specific payload.
    pub kind: DrawEventKind,
}
