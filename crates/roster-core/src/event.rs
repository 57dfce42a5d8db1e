//! Event metadata shared by every emitted event.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Metadata attached to every emitted event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventMetadata {
    /// Unique event identifier.
    pub event_id: Uuid,
    /// Type name for routing (e.g. `roster.revealed`).
    pub event_type: String,
    /// The draw this event belongs to, if any.
    pub draw_id: Option<Uuid>,
    /// Monotonically increasing position in the session's event stream.
    pub sequence_number: i64,
    /// Timestamp of event creation.
    pub occurred_at: DateTime<Utc>,
}
