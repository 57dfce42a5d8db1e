//! Test presenter: records every callback it receives.

use roster_core::error::ErrorKind;
use roster_draw::application::presenter::Presenter;
use uuid::Uuid;

/// One recorded presenter callback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresenterCall {
    /// `on_started` was called.
    Started,
    /// `on_reveal` was called.
    Reveal {
        /// Position within the draw.
        index: usize,
        /// The revealed value.
        value: u32,
    },
    /// `on_finished` was called with these values.
    Finished(Vec<u32>),
    /// `on_error` was called with this kind.
    Error(ErrorKind),
    /// `on_cleared` was called.
    Cleared,
}

/// A presenter that appends each callback to an in-memory log.
#[derive(Debug, Default)]
pub struct RecordingPresenter {
    calls: Vec<PresenterCall>,
}

impl RecordingPresenter {
    /// Creates a presenter with an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded callbacks in delivery order.
    #[must_use]
    pub fn calls(&self) -> &[PresenterCall] {
        &self.calls
    }
}

impl Presenter for RecordingPresenter {
    fn on_started(&mut self, _draw_id: Uuid) {
        self.calls.push(PresenterCall::Started);
    }

    fn on_reveal(&mut self, index: usize, value: u32) {
        self.calls.push(PresenterCall::Reveal { index, value });
    }

    fn on_finished(&mut self, values: &[u32]) {
        self.calls.push(PresenterCall::Finished(values.to_vec()));
    }

    fn on_error(&mut self, kind: ErrorKind, _message: &str) {
        self.calls.push(PresenterCall::Error(kind));
    }

    fn on_cleared(&mut self) {
        self.calls.push(PresenterCall::Cleared);
    }
}
