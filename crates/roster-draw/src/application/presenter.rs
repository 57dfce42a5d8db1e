//! Presentation seam.
//!
//! The sequencer only emits [`DrawEvent`]s. A presentation layer implements
//! [`Presenter`] and is fed from the event channel by [`pump`].

use roster_core::error::ErrorKind;
use tokio::sync::mpsc::UnboundedReceiver;
use uuid::Uuid;

use crate::domain::events::{DrawEvent, DrawEventKind};

/// Callbacks invoked for each emitted event.
///
/// Every callback defaults to doing nothing. Presenters that want the whole
/// envelope override [`Presenter::present`] instead.
pub trait Presenter: Send {
    /// A draw was accepted; sampling and pre-roll are underway.
    fn on_started(&mut self, _draw_id: Uuid) {}

    /// The value at `index` of the draw is revealed.
    fn on_reveal(&mut self, _index: usize, _value: u32) {}

    /// Every value has been revealed.
    fn on_finished(&mut self, _values: &[u32]) {}

    /// The draw attempt failed.
    fn on_error(&mut self, _kind: ErrorKind, _message: &str) {}

    /// The last draw was cleared.
    fn on_cleared(&mut self) {}

    /// Routes an event to the matching callback.
    fn present(&mut self, event: &DrawEvent) {
        match &event.kind {
            DrawEventKind::Started => {
                if let Some(draw_id) = event.metadata.draw_id {
                    self.on_started(draw_id);
                }
            }
            DrawEventKind::Revealed { index, value } => self.on_reveal(*index, *value),
            DrawEventKind::Finished { values } => self.on_finished(values),
            DrawEventKind::Failed { kind, message } => self.on_error(*kind, message),
            DrawEventKind::Cleared => self.on_cleared(),
        }
    }
}

/// Delivers events to `presenter` until every sender is dropped.
///
/// Returns the number of events delivered.
pub async fn pump<P>(mut events: UnboundedReceiver<DrawEvent>, presenter: &mut P) -> usize
where
    P: Presenter + ?Sized,
{
    let mut delivered = 0;
    while let Some(event) = events.recv().await {
        presenter.present(&event);
        delivered += 1;
    }
    delivered
}
