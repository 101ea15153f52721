//! Unit types for physical quantities.
//!
//! Provides type-safe representations of velocity and acceleration so the
//! control and motor paths cannot confuse rev/s with rev/s².

use core::ops::Add;

use serde::Deserialize;

/// Angular velocity in revolutions per second. The sign is the direction.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Deserialize)]
#[serde(transparent)]
pub struct RevPerSec(pub f32);

impl RevPerSec {
    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> f32 {
        self.0
    }

    /// Magnitude, ignoring direction.
    #[inline]
    pub fn magnitude(self) -> f32 {
        libm::fabsf(self.0)
    }

    /// `false` for NaN and infinities.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }
}

impl Add for RevPerSec {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

/// Angular acceleration in revolutions per second squared.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Deserialize)]
#[serde(transparent)]
pub struct RevPerSecSquared(pub f32);

impl RevPerSecSquared {
    /// No acceleration.
    pub const ZERO: Self = Self(0.0);

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> f32 {
        self.0
    }

    /// Velocity change accumulated over `dt_us` microseconds.
    #[inline]
    pub fn over_micros(self, dt_us: u32) -> RevPerSec {
        RevPerSec(self.0 * dt_us as f32 / 1_000_000.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_magnitude_ignores_direction() {
        assert_eq!(RevPerSec(-2.5).magnitude(), 2.5);
        assert_eq!(RevPerSec(2.5).magnitude(), 2.5);
    }

    #[test]
    fn test_acceleration_over_time() {
        // 5 rev/s² for 2 s
        let dv = RevPerSecSquared(5.0).over_micros(2_000_000);
        assert!((dv.value() - 10.0).abs() < 1e-4);
    }

    #[test]
    fn test_non_finite_detection() {
        assert!(!RevPerSec(f32::NAN).is_finite());
        assert!(!RevPerSec(f32::INFINITY).is_finite());
        assert!(!RevPerSec(f32::NEG_INFINITY).is_finite());
        assert!(RevPerSec(-1.0e6).is_finite());
    }
}
