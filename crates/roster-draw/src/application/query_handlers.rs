//! Query handlers for the roster.
//!
//! The presentation layer never touches the roster directly; it reads
//! these read-only views instead.

use serde::Serialize;
use uuid::Uuid;

use crate::domain::aggregates::{DrawState, Roster};

/// Read-only view of the roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RosterView {
    /// Current lifecycle state.
    pub state: DrawState,
    /// Identifier of the current or last draw.
    pub draw_id: Option<Uuid>,
    /// Every drawn value, ascending. Empty until sampling completes.
    pub values: Vec<u32>,
    /// Values revealed so far.
    pub revealed: Vec<u32>,
}

impl RosterView {
    /// Whether `start()` would be accepted.
    #[must_use]
    pub fn can_start(&self) -> bool {
        self.state == DrawState::Idle
    }

    /// Whether `reset()` would be accepted.
    #[must_use]
    pub fn can_reset(&self) -> bool {
        !self.state.is_busy()
    }

    /// Whether a finished draw is on display.
    #[must_use]
    pub fn has_result(&self) -> bool {
        self.state == DrawState::Idle && !self.values.is_empty()
    }
}

/// Builds the view of a roster.
#[must_use]
pub fn view_roster(roster: &Roster) -> RosterView {
    RosterView {
        state: roster.state(),
        draw_id: roster.draw_id(),
        values: roster
            .draw()
            .map(|draw| draw.values().to_vec())
            .unwrap_or_default(),
        revealed: roster.revealed().to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::sampler::sample;
    use roster_test_support::{MockRng, fixed_clock};

    #[test]
    fn test_view_of_new_roster_is_idle_and_empty() {
        let view = view_roster(&Roster::new());
        assert_eq!(view.state, DrawState::Idle);
        assert!(view.draw_id.is_none());
        assert!(view.values.is_empty());
        assert!(view.can_start());
        assert!(view.can_reset());
        assert!(!view.has_result());
    }

    #[test]
    fn test_view_mid_reveal_shows_partial_progress() {
        let clock = fixed_clock();
        let draw_id = Uuid::new_v4();
        let mut roster = Roster::new();
        roster.begin(draw_id, &clock).unwrap();
        roster
            .record_draw(sample(1, 25, 5, &mut MockRng).unwrap())
            .unwrap();
        roster.begin_reveal().unwrap();
        roster.reveal_next(&clock).unwrap();
        roster.reveal_next(&clock).unwrap();

        let view = view_roster(&roster);

        assert_eq!(view.state, DrawState::Revealing);
        assert_eq!(view.draw_id, Some(draw_id));
        assert_eq!(view.values, vec![1, 2, 3, 4, 5]);
        assert_eq!(view.revealed, vec![1, 2]);
        assert!(!view.can_start());
        assert!(!view.can_reset());
    }

    #[test]
    fn test_view_serializes_state_snake_case() {
        let json = serde_json::to_value(view_roster(&Roster::new())).unwrap();
        assert_eq!(json["state"], "idle");
        assert_eq!(json["values"], serde_json::json!([]));
    }
}
