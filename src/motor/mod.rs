//! Motor module for velocity-stepper.
//!
//! Provides the half-step phase table, the four-line output abstraction and the
//! step sequencer that runs on the motor execution context.

mod outputs;
pub mod phase;
mod sequencer;
pub mod state;

pub use outputs::{CoilPins, PhaseOutputs};
pub use phase::{PhasePattern, HALF_STEP_SEQUENCE, PHASE_COUNT};
pub use sequencer::{PollOutcome, StepSequencer};
pub use state::SequencerState;
