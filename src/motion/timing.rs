//! Velocity to step interval conversion.

use crate::config::units::RevPerSec;
use crate::config::DriveConfig;

/// Step timing derived from [`DriveConfig`].
///
/// Computed once; the motor loop asks it for an interval on every poll.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepTiming {
    /// Interval at 1 rev/s, in microseconds.
    micros_per_step: f32,
    /// Minimum |velocity| that steps.
    min_velocity: f32,
}

impl StepTiming {
    /// Derive timing from the drive configuration.
    pub fn from_config(config: &DriveConfig) -> Self {
        Self {
            micros_per_step: config.micros_per_step_at_unit_velocity(),
            min_velocity: config.min_velocity.magnitude(),
        }
    }

    /// Interval between steps at `velocity`, in microseconds.
    ///
    /// `None` when the motor should not step: below the threshold, exactly
    /// zero, or a NaN or infinite velocity. The zero check holds even for an
    /// unvalidated config with a zero threshold.
    #[inline]
    pub fn interval_us(&self, velocity: RevPerSec) -> Option<f32> {
        if !velocity.is_finite() {
            return None;
        }
        let speed = velocity.magnitude();
        if speed == 0.0 || speed < self.min_velocity {
            return None;
        }
        Some(self.micros_per_step / speed)
    }
}

impl Default for StepTiming {
    fn default() -> Self {
        Self::from_config(&DriveConfig::default())
    }
}
