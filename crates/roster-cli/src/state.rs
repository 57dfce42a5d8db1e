//! Shared application state.

use roster_draw::application::sequencer::RevealSequencer;

use crate::config::Settings;

/// State shared by the input loop and the presenter wiring.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Handle to the draw session.
    pub sequencer: RevealSequencer,
    /// Resolved settings.
    pub settings: Settings,
}

impl AppState {
    /// Create new application state.
    #[must_use]
    pub fn new(sequencer: RevealSequencer, settings: Settings) -> Self {
        Self {
            sequencer,
            settings,
        }
    }
}
