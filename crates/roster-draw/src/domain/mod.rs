//! Domain model: configuration, sampling, the roster state machine, and
//! the events it emits.

pub mod aggregates;
pub mod config;
pub mod events;
pub mod sampler;
