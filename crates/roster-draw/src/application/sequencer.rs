//! The reveal sequencer.
//!
//! Drives the roster through `Idle -> Drawing -> Revealing -> Complete ->
//! Idle` on a spawned task, suspending on the injected [`Timer`] between
//! steps. Events are pushed into an unbounded channel while the roster lock
//! is held, so the receiver sees them in transition order.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use roster_core::error::DomainError;
use roster_core::rng::{DeterministicRng, SystemRng};
use roster_core::time::{Clock, SystemClock, Timer, TokioTimer};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;
use tracing::{debug, error, info, instrument, warn};
use uuid::Uuid;

use crate::application::query_handlers::{RosterView, view_roster};
use crate::domain::aggregates::{DrawState, Roster};
use crate::domain::config::DrawConfig;
use crate::domain::events::DrawEvent;
use crate::domain::sampler::sample;

/// Result of [`RevealSequencer::start`].
#[derive(Debug)]
pub enum StartOutcome {
    /// A draw was accepted and is running on `task`.
    Started {
        /// Identifier of the new draw.
        draw_id: Uuid,
        /// The task driving the draw; completes once the roster is idle.
        task: JoinHandle<()>,
    },
    /// A draw was already in flight; nothing changed.
    Ignored(DrawState),
}

impl StartOutcome {
    /// Whether the call started a draw.
    #[must_use]
    pub fn is_started(&self) -> bool {
        matches!(self, Self::Started { .. })
    }
}

/// Result of [`RevealSequencer::reset`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetOutcome {
    /// The last draw was dropped and `Cleared` emitted.
    Cleared,
    /// A draw was in flight; nothing changed.
    Rejected(DrawState),
}

struct Shared {
    config: DrawConfig,
    roster: Mutex<Roster>,
    rng: Mutex<Box<dyn DeterministicRng>>,
    clock: Arc<dyn Clock>,
    timer: Arc<dyn Timer>,
    events: UnboundedSender<DrawEvent>,
}

impl Shared {
    fn roster(&self) -> MutexGuard<'_, Roster> {
        // Every transition leaves the roster consistent, so a panic elsewhere
        // cannot leave it half-updated.
        self.roster.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn emit(&self, event: DrawEvent) {
        if self.events.send(event).is_err() {
            debug!("event receiver dropped; event discarded");
        }
    }
}

/// Handle to a draw session.
///
/// Cloning is cheap; every clone drives the same roster. `start` and
/// `reset` return immediately and report their effects through the event
/// channel handed out by [`RevealSequencer::new`].
#[derive(Clone)]
pub struct RevealSequencer {
    shared: Arc<Shared>,
}

impl fmt::Debug for RevealSequencer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RevealSequencer")
            .field("config", &self.shared.config)
            .field("state", &self.shared.roster().state())
            .finish_non_exhaustive()
    }
}

impl RevealSequencer {
    /// Creates a sequencer and the receiving end of its event channel.
    #[must_use]
    pub fn new(
        config: DrawConfig,
        rng: impl DeterministicRng + 'static,
        clock: Arc<dyn Clock>,
        timer: Arc<dyn Timer>,
    ) -> (Self, UnboundedReceiver<DrawEvent>) {
        let (events, receiver) = mpsc::unbounded_channel();
        let shared = Shared {
            config,
            roster: Mutex::new(Roster::new()),
            rng: Mutex::new(Box::new(rng)),
            clock,
            timer,
            events,
        };
        (
            Self {
                shared: Arc::new(shared),
            },
            receiver,
        )
    }

    /// Creates a sequencer drawing from `rng`, stamped by the system clock
    /// and paced by tokio timers.
    #[must_use]
    pub fn with_system(
        config: DrawConfig,
        rng: SystemRng,
    ) -> (Self, UnboundedReceiver<DrawEvent>) {
        Self::new(
            config,
            rng,
            Arc::new(SystemClock),
            Arc::new(TokioTimer),
        )
    }

    /// Starts a draw if the roster is idle.
    ///
    /// Emits `Started` before returning and spawns the task that samples and
    /// reveals. Must be called from within a tokio runtime.
    pub fn start(&self) -> StartOutcome {
        let draw_id = Uuid::new_v4();
        {
            let mut roster = self.shared.roster();
            match roster.begin(draw_id, self.shared.clock.as_ref()) {
                Ok(event) => self.shared.emit(event),
                Err(err) => {
                    debug!(state = %roster.state(), error = %err, "start ignored");
                    return StartOutcome::Ignored(roster.state());
                }
            }
        }

        info!(%draw_id, "draw started");
        let task = tokio::spawn(run_draw(Arc::clone(&self.shared), draw_id));
        StartOutcome::Started { draw_id, task }
    }

    /// Drops the last draw if no draw is in flight.
    pub fn reset(&self) -> ResetOutcome {
        let mut roster = self.shared.roster();
        match roster.clear(self.shared.clock.as_ref()) {
            Ok(event) => {
                self.shared.emit(event);
                info!("roster cleared");
                ResetOutcome::Cleared
            }
            Err(err) => {
                debug!(state = %roster.state(), error = %err, "reset rejected");
                ResetOutcome::Rejected(roster.state())
            }
        }
    }

    /// Returns a read-only view of the roster.
    #[must_use]
    pub fn snapshot(&self) -> RosterView {
        view_roster(&self.shared.roster())
    }
}

#[instrument(skip(shared))]
async fn run_draw(shared: Arc<Shared>, draw_id: Uuid) {
    if let Err(err) = drive(&shared).await {
        error!(error = %err, "draw sequence out of step with roster; returning to idle");
        shared.roster().recover();
    }
}

async fn drive(shared: &Shared) -> Result<(), DomainError> {
    let config = shared.config;
    let clock = shared.clock.as_ref();

    let sampled = {
        let mut rng = shared.rng.lock().unwrap_or_else(PoisonError::into_inner);
        sample(config.pool_min, config.pool_max, config.draw_count, &mut **rng)
    };
    let draw = match sampled {
        Ok(draw) => draw,
        Err(err) => {
            warn!(error = %err, "sampling failed; returning to idle");
            let event = shared.roster().abort(&err, clock)?;
            shared.emit(event);
            return Ok(());
        }
    };

    debug!(values = ?draw.values(), "draw sampled");
    let count = draw.len();
    shared.roster().record_draw(draw)?;

    shared.timer.sleep(config.pre_roll).await;
    shared.roster().begin_reveal()?;

    for _ in 0..count {
        shared.timer.sleep(config.per_step).await;
        let event = shared.roster().reveal_next(clock)?;
        debug!(event_type = %event.metadata.event_type, sequence = event.metadata.sequence_number, "revealed");
        shared.emit(event);
    }

    shared.timer.sleep(config.finish_delay).await;
    {
        let mut roster = shared.roster();
        let event = roster.finish(clock)?;
        shared.emit(event);
        roster.settle()?;
    }

    info!("draw complete");
    Ok(())
}
