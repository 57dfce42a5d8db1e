//! Presenters that render draw events to a writer.

mod json;
mod terminal;

pub use json::JsonLinesPresenter;
pub use terminal::{TerminalPresenter, render_grid};
