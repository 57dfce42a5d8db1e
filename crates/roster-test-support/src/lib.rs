//! Shared test doubles for the duty roster picker.

mod clock;
mod presenter;
mod rng;
mod timer;

pub use clock::{FixedClock, fixed_clock};
pub use presenter::{PresenterCall, RecordingPresenter};
pub use rng::{MockRng, SequenceRng};
pub use timer::InstantTimer;
