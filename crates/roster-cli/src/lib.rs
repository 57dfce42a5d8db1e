//! Terminal host for the duty roster picker.
//!
//! Owns everything the draw engine leaves to a presentation layer: dialog
//! text, the number grid, key bindings, and reset confirmation.

pub mod config;
pub mod error;
pub mod input;
pub mod messages;
pub mod presenters;
pub mod session;
pub mod state;
