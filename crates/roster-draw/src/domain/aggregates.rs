//! The roster aggregate: owner of the draw lifecycle.

use std::fmt;

use roster_core::error::DomainError;
use roster_core::event::EventMetadata;
use roster_core::time::Clock;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::events::{DrawEvent, DrawEventKind};
use super::sampler::Draw;

/// Draw lifecycle state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DrawState {
    /// No draw in progress.
    Idle,
    /// A draw was accepted; sampling and pre-roll are underway.
    Drawing,
    /// Values are being revealed one at a time.
    Revealing,
    /// Every value was revealed; about to return to idle.
    Complete,
}

impl DrawState {
    /// Whether a draw is in flight.
    #[must_use]
    pub fn is_busy(self) -> bool {
        matches!(self, Self::Drawing | Self::Revealing)
    }

    /// Lowercase name used in logs and error messages.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Drawing => "drawing",
            Self::Revealing => "revealing",
            Self::Complete => "complete",
        }
    }
}

impl fmt::Display for DrawState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The aggregate holding the draw state and the current draw.
///
/// Every transition checks the current state and either returns the event
/// to emit or `DomainError::InvalidTransition`, leaving the roster untouched.
#[derive(Debug)]
pub struct Roster {
    state: DrawState,
    draw_id: Option<Uuid>,
    draw: Option<Draw>,
    revealed: usize,
    /// Sequence number of the last emitted event.
    sequence: i64,
}

impl Default for Roster {
    fn default() -> Self {
        Self::new()
    }
}

impl Roster {
    /// Creates an idle roster with no draw.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: DrawState::Idle,
            draw_id: None,
            draw: None,
            revealed: 0,
            sequence: 0,
        }
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn state(&self) -> DrawState {
        self.state
    }

    /// Identifier of the current or last draw.
    #[must_use]
    pub fn draw_id(&self) -> Option<Uuid> {
        self.draw_id
    }

    /// The current or last draw, once sampled.
    #[must_use]
    pub fn draw(&self) -> Option<&Draw> {
        self.draw.as_ref()
    }

    /// Values revealed so far, in reveal order.
    #[must_use]
    pub fn revealed(&self) -> &[u32] {
        match &self.draw {
            Some(draw) => &draw.values()[..self.revealed],
            None => &[],
        }
    }

    fn ensure(&self, allowed: &[DrawState], operation: &'static str) -> Result<(), DomainError> {
        if allowed.contains(&self.state) {
            Ok(())
        } else {
            Err(DomainError::InvalidTransition {
                operation,
                state: self.state.to_string(),
            })
        }
    }

    fn event(&mut self, kind: DrawEventKind, clock: &dyn Clock) -> DrawEvent {
        self.sequence += 1;
        DrawEvent {
            metadata: EventMetadata {
                event_id: Uuid::new_v4(),
                event_type: kind.event_type().to_owned(),
                draw_id: self.draw_id,
                sequence_number: self.sequence,
                occurred_at: clock.now(),
            },
            kind,
        }
    }

    /// Accepts a new draw, dropping the previous one.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTransition` unless the roster is idle.
    pub fn begin(&mut self, draw_id: Uuid, clock: &dyn Clock) -> Result<DrawEvent, DomainError> {
        self.ensure(&[DrawState::Idle], "start a draw")?;
        self.state = DrawState::Drawing;
        self.draw_id = Some(draw_id);
        self.draw = None;
        self.revealed = 0;
        Ok(self.event(DrawEventKind::Started, clock))
    }

    /// Stores the sampled draw for the pending reveal.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTransition` unless the roster is drawing.
    pub fn record_draw(&mut self, draw: Draw) -> Result<(), DomainError> {
        self.ensure(&[DrawState::Drawing], "record a draw")?;
        self.draw = Some(draw);
        Ok(())
    }

    /// Abandons the draw in flight and returns to idle.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTransition` unless a draw is in flight.
    pub fn abort(&mut self, cause: &DomainError, clock: &dyn Clock) -> Result<DrawEvent, DomainError> {
        self.ensure(&[DrawState::Drawing, DrawState::Revealing], "abort a draw")?;
        let event = self.event(
            DrawEventKind::Failed {
                kind: cause.kind(),
                message: cause.to_string(),
            },
            clock,
        );
        self.state = DrawState::Idle;
        self.draw_id = None;
        self.draw = None;
        self.revealed = 0;
        Ok(event)
    }

    /// Moves from the pre-roll into revealing.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTransition` unless the roster is drawing
    /// and a draw has been recorded.
    pub fn begin_reveal(&mut self) -> Result<(), DomainError> {
        self.ensure(&[DrawState::Drawing], "begin revealing")?;
        if self.draw.is_none() {
            return Err(DomainError::InvalidTransition {
                operation: "begin revealing without a draw",
                state: self.state.to_string(),
            });
        }
        self.state = DrawState::Revealing;
        Ok(())
    }

    /// Reveals the next value of the draw.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTransition` unless the roster is
    /// revealing with values left to reveal.
    pub fn reveal_next(&mut self, clock: &dyn Clock) -> Result<DrawEvent, DomainError> {
        self.ensure(&[DrawState::Revealing], "reveal")?;
        let index = self.revealed;
        let Some(value) = self.draw.as_ref().and_then(|draw| draw.get(index)) else {
            return Err(DomainError::InvalidTransition {
                operation: "reveal past the end of the draw",
                state: self.state.to_string(),
            });
        };
        self.revealed += 1;
        Ok(self.event(DrawEventKind::Revealed { index, value }, clock))
    }

    /// Completes the reveal once every value is out.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTransition` unless the roster is
    /// revealing and every value has been revealed.
    pub fn finish(&mut self, clock: &dyn Clock) -> Result<DrawEvent, DomainError> {
        self.ensure(&[DrawState::Revealing], "finish")?;
        let values = match &self.draw {
            Some(draw) if self.revealed == draw.len() => draw.values().to_vec(),
            _ => {
                return Err(DomainError::InvalidTransition {
                    operation: "finish before every value is revealed",
                    state: self.state.to_string(),
                });
            }
        };
        self.state = DrawState::Complete;
        Ok(self.event(DrawEventKind::Finished { values }, clock))
    }

    /// Returns a completed roster to idle, keeping the last draw visible.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTransition` unless the roster is complete.
    pub fn settle(&mut self) -> Result<(), DomainError> {
        self.ensure(&[DrawState::Complete], "settle")?;
        self.state = DrawState::Idle;
        Ok(())
    }

    /// Drops the last draw.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTransition` while a draw is in flight.
    pub fn clear(&mut self, clock: &dyn Clock) -> Result<DrawEvent, DomainError> {
        self.ensure(&[DrawState::Idle, DrawState::Complete], "reset")?;
        let event = self.event(DrawEventKind::Cleared, clock);
        self.state = DrawState::Idle;
        self.draw_id = None;
        self.draw = None;
        self.revealed = 0;
        Ok(event)
    }

    /// Returns to idle from any state without emitting an event, dropping
    /// whatever draw was in flight.
    pub fn recover(&mut self) {
        self.state = DrawState::Idle;
        self.draw_id = None;
        self.draw = None;
        self.revealed = 0;
    }
}
