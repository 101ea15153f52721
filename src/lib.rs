//! # velocity-stepper
//!
//! Velocity-commanded 4-phase stepper drive with acceleration ramping, split
//! across two polling loops.
//!
//! ## Features
//!
//! - **Two execution contexts**: a control loop (serial commands, velocity
//!   ramping, status) and a motor loop (step timing), sharing only position and
//!   velocity through lock-free atomics
//! - **embedded-hal 1.0**: four `OutputPin`s drive the coils, an
//!   `embedded-hal-nb` serial receiver supplies commands
//! - **Half-step sequencing**: 8-entry commutation table, hold timeout that
//!   de-energises idle coils
//! - **no_std compatible**: core library works without standard library
//! - **Configuration-driven**: drive and control parameters from TOML, with
//!   defaults matching the reference firmware
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use velocity_stepper::{CoilPins, ControlLoop, SharedState, StepSequencer, SystemConfig};
//!
//! static STATE: StaticCell<SharedState> = StaticCell::new();
//! let (control, motor) = STATE.init(SharedState::new()).split();
//! let config = SystemConfig::default();
//!
//! // Core 1: step timing
//! let coils = CoilPins::new(pin_a, pin_b, pin_c, pin_d);
//! core1.spawn(move || StepSequencer::new(coils, motor, &config.drive).run(&timer));
//!
//! // Core 0: commands and ramping
//! ControlLoop::new(control, uart_rx, FmtSink::new(usb), &config.control, timer.now_us_32())
//!     .run(&timer);
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Enables file I/O and TOML parsing, `StdClock` and `StdoutSink`
//! - `defmt`: Enables defmt logging for embedded targets

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

#[macro_use]
mod fmt;

// Core modules
pub mod clock;
pub mod command;
pub mod config;
pub mod control;
pub mod error;
pub mod motion;
pub mod motor;
pub mod shared;

// Re-exports for ergonomic API
pub use clock::Monotonic;
pub use command::{Command, CommandDecoder, CommandIngestor};
pub use config::{validate_config, CommandMode, ControlConfig, DriveConfig, SystemConfig};
pub use control::{ControlLoop, FmtSink, StatusEvent, StatusSink};
pub use error::{Error, Result};
pub use motion::{Direction, Integrator, StepTiming};
pub use motor::{CoilPins, PhaseOutputs, PhasePattern, PollOutcome, SequencerState, StepSequencer};
pub use shared::{ControlHandle, MotorHandle, SharedState};

// Configuration loading (std only)
#[cfg(feature = "std")]
pub use config::{load_config, parse_config};

#[cfg(feature = "std")]
pub use clock::StdClock;
#[cfg(feature = "std")]
pub use control::StdoutSink;

// Unit types
pub use config::units::{RevPerSec, RevPerSecSquared};
