//! Duty roster picker: sampling and timed reveal.
//!
//! Picks a fixed number of distinct duty numbers uniformly from a
//! contiguous pool, then plays the result back one number at a time
//! through an event channel that a presentation layer consumes.

pub mod application;
pub mod domain;
