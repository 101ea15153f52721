//! Configuration module for velocity-stepper.
//!
//! Provides the drive and control configuration types, with defaults matching the
//! reference firmware, and loading from TOML files (with `std` feature).

mod control;
mod drive;
#[cfg(feature = "std")]
mod loader;
mod system;
pub mod units;
mod validation;

pub use control::{CommandMode, ControlConfig, DEFAULT_FIXED_POINT_SCALE, DEFAULT_REPORT_INTERVAL_US};
pub use drive::{DriveConfig, DEFAULT_MAX_HOLD_US, DEFAULT_MIN_VELOCITY, DEFAULT_STEPS_PER_REVOLUTION};
pub use system::SystemConfig;
pub use validation::validate_config;

#[cfg(feature = "std")]
pub use loader::{load_config, parse_config};

// Re-export unit types at config level
pub use units::{RevPerSec, RevPerSecSquared};
