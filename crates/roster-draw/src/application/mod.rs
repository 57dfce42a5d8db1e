//! Application layer: the reveal sequencer and its presentation seam.

pub mod presenter;
pub mod query_handlers;
pub mod sequencer;
