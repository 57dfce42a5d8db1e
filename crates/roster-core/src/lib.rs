//! Roster Core: shared abstractions.
//!
//! This crate defines the seams the draw engine is built on: randomness,
//! time, events, and the domain error type. It contains no presentation
//! code.

pub mod error;
pub mod event;
pub mod rng;
pub mod time;
