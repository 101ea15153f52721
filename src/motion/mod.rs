//! Motion module for velocity-stepper.
//!
//! Provides velocity ramping (integration of commanded acceleration) and the
//! velocity-to-step-interval conversion used by the motor loop.

mod integrator;
mod timing;

pub use integrator::Integrator;
pub use timing::StepTiming;

use crate::config::units::RevPerSec;

/// Direction of a single step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Position counts up.
    Forward,
    /// Position counts down.
    Reverse,
}

impl Direction {
    /// Direction implied by the sign of a velocity. Zero maps to reverse.
    #[inline]
    pub fn from_velocity(velocity: RevPerSec) -> Self {
        if velocity.value() > 0.0 {
            Direction::Forward
        } else {
            Direction::Reverse
        }
    }

    /// Get the sign multiplier.
    #[inline]
    pub fn sign(self) -> i32 {
        match self {
            Direction::Forward => 1,
            Direction::Reverse => -1,
        }
    }
}
