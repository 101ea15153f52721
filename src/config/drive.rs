//! Motor-side drive configuration.

use serde::Deserialize;

use super::units::RevPerSec;

/// Half-steps per revolution of a 200-step motor.
pub const DEFAULT_STEPS_PER_REVOLUTION: u32 = 400;

/// Below this magnitude the motor does not step.
pub const DEFAULT_MIN_VELOCITY: RevPerSec = RevPerSec(0.01);

/// Coils are released when no step happened for this long.
pub const DEFAULT_MAX_HOLD_US: u64 = 100_000;

/// Step timing parameters for the motor loop.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DriveConfig {
    /// Position counts per revolution. One count is one phase-table entry (a half-step),
    /// so this must be a multiple of the table length.
    pub steps_per_revolution: u32,

    /// Minimum |velocity| that produces steps.
    #[serde(rename = "min_velocity_rev_per_sec")]
    pub min_velocity: RevPerSec,

    /// Maximum time the coils stay energised without a new step, in microseconds.
    pub max_hold_us: u64,
}

impl DriveConfig {
    /// Step interval in microseconds at 1 rev/s.
    #[inline]
    pub fn micros_per_step_at_unit_velocity(&self) -> f32 {
        1_000_000.0 / self.steps_per_revolution as f32
    }
}

impl Default for DriveConfig {
    fn default() -> Self {
        Self {
            steps_per_revolution: DEFAULT_STEPS_PER_REVOLUTION,
            min_velocity: DEFAULT_MIN_VELOCITY,
            max_hold_us: DEFAULT_MAX_HOLD_US,
        }
    }
}
