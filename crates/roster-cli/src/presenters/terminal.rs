//! Localized terminal rendering of draw events.

use std::collections::BTreeSet;
use std::fmt::Write as _;
use std::io::Write;

use roster_core::error::ErrorKind;
use roster_draw::application::presenter::Presenter;
use roster_draw::domain::config::DrawConfig;
use tracing::warn;
use uuid::Uuid;

use crate::messages;

/// Numbers per grid row.
const GRID_COLUMNS: usize = 5;

/// Renders the pool as a grid, bracketing selected numbers.
#[must_use]
pub fn render_grid(pool_min: u32, pool_max: u32, selected: &BTreeSet<u32>) -> String {
    let mut grid = String::new();
    let numbers: Vec<u32> = (pool_min..=pool_max).collect();
    for row in numbers.chunks(GRID_COLUMNS) {
        let cells: Vec<String> = row
            .iter()
            .map(|n| {
                if selected.contains(n) {
                    format!("[{n:>2}]")
                } else {
                    format!(" {n:>2} ")
                }
            })
            .collect();
        let _ = writeln!(grid, "{}", cells.join(" ").trim_end());
    }
    grid
}

/// Writes dialogs and the number grid for each event.
///
/// Write failures are logged and otherwise ignored; a broken terminal must
/// not stall the draw.
#[derive(Debug)]
pub struct TerminalPresenter<W> {
    out: W,
    config: DrawConfig,
    selected: BTreeSet<u32>,
}

impl<W: Write> TerminalPresenter<W> {
    /// Creates a presenter writing to `out`.
    pub fn new(out: W, config: DrawConfig) -> Self {
        Self {
            out,
            config,
            selected: BTreeSet::new(),
        }
    }

    /// Consumes the presenter, returning the writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn write(&mut self, text: &str) {
        if let Err(err) = self.out.write_all(text.as_bytes()).and_then(|()| self.out.flush()) {
            warn!(error = %err, "failed to write to terminal");
        }
    }

    fn grid(&self) -> String {
        render_grid(self.config.pool_min, self.config.pool_max, &self.selected)
    }
}

impl<W: Write + Send> Presenter for TerminalPresenter<W> {
    fn on_started(&mut self, _draw_id: Uuid) {
        self.selected.clear();
        self.write(&format!("\n{}\n", messages::DRAWING));
    }

    fn on_reveal(&mut self, index: usize, value: u32) {
        self.selected.insert(value);
        self.write(&format!("  ✨ {}번째 당번: {value}번\n", index + 1));
    }

    fn on_finished(&mut self, values: &[u32]) {
        let text = format!(
            "\n{}\n{} {}\n\n{}\n{}\n",
            messages::SUCCESS_TITLE,
            messages::SELECTED_LABEL,
            messages::number_list(values),
            self.grid(),
            messages::SUCCESS_FOOTER,
        );
        self.write(&text);
    }

    fn on_error(&mut self, _kind: ErrorKind, message: &str) {
        self.write(&format!("⚠️  {} {message}\n", messages::WARNING_TITLE));
    }

    fn on_cleared(&mut self) {
        self.selected.clear();
        let text = format!(
            "ℹ️  {} {}\n\n{}\n{}\n",
            messages::RESET_DONE,
            messages::RESET_DONE_BODY,
            self.grid(),
            messages::IDLE_PROMPT,
        );
        self.write(&text);
    }
}
