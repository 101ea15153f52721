//! Control module for velocity-stepper.
//!
//! The control execution context: command intake, velocity ramping and status
//! reporting.

mod control_loop;
mod status;

pub use control_loop::ControlLoop;
#[cfg(feature = "std")]
pub use status::StdoutSink;
pub use status::{FmtSink, StatusEvent, StatusSink};
