//! JSON-lines rendering of draw events for an external UI.

use std::io::Write;

use roster_draw::application::presenter::Presenter;
use roster_draw::domain::events::DrawEvent;
use tracing::warn;

/// Writes each event envelope as one line of JSON.
#[derive(Debug)]
pub struct JsonLinesPresenter<W> {
    out: W,
}

impl<W: Write> JsonLinesPresenter<W> {
    /// Creates a presenter writing to `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Consumes the presenter, returning the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write + Send> Presenter for JsonLinesPresenter<W> {
    fn present(&mut self, event: &DrawEvent) {
        let written = serde_json::to_writer(&mut self.out, event)
            .map_err(std::io::Error::from)
            .and_then(|()| self.out.write_all(b"\n"))
            .and_then(|()| self.out.flush());
        if let Err(err) = written {
            warn!(error = %err, event_type = %event.metadata.event_type, "failed to write event");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_core::event::EventMetadata;
    use roster_core::time::Clock;
    use roster_draw::domain::events::DrawEventKind;
    use roster_test_support::fixed_clock;
    use uuid::Uuid;

    fn event(sequence_number: i64, kind: DrawEventKind) -> DrawEvent {
        DrawEvent {
            metadata: EventMetadata {
                event_id: Uuid::new_v4(),
                event_type: kind.event_type().to_owned(),
                draw_id: Some(Uuid::new_v4()),
                sequence_number,
                occurred_at: fixed_clock().now(),
            },
            kind,
        }
    }

    #[test]
    fn test_each_event_is_one_json_line() {
        let mut presenter = JsonLinesPresenter::new(Vec::new());
        presenter.present(&event(1, DrawEventKind::Started));
        presenter.present(&event(2, DrawEventKind::Revealed { index: 0, value: 3 }));

        let text = String::from_utf8(presenter.into_inner()).unwrap();
        let lines: Vec<serde_json::Value> = text
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["metadata"]["event_type"], "roster.started");
        assert_eq!(lines[0]["kind"]["type"], "started");
        assert_eq!(lines[1]["metadata"]["sequence_number"], 2);
        assert_eq!(lines[1]["kind"]["value"], 3);
    }

    #[test]
    fn test_lines_round_trip_to_events() {
        let original = event(
            3,
            DrawEventKind::Finished {
                values: vec![3, 7, 12, 19, 25],
            },
        );
        let mut presenter = JsonLinesPresenter::new(Vec::new());
        presenter.present(&original);

        let text = String::from_utf8(presenter.into_inner()).unwrap();
        let parsed: DrawEvent = serde_json::from_str(text.trim_end()).unwrap();
        assert_eq!(parsed, original);
    }
}
