//! Forward-Euler velocity integration with a drift-free report schedule.

use crate::config::units::{RevPerSec, RevPerSecSquared};
use crate::config::ControlConfig;
use crate::shared::ControlHandle;

/// Integrates the commanded acceleration into the shared velocity.
///
/// Timestamps are 32-bit microseconds and all differences use wrapping
/// subtraction, so the ~71 minute timer rollover is harmless. The loop rate is
/// whatever the control context achieves; `dt` is always measured.
#[derive(Debug, Clone)]
pub struct Integrator {
    acceleration: RevPerSecSquared,
    previous_us: u32,
    last_report_us: u32,
    report_interval_us: u32,
}

impl Integrator {
    /// Start integrating from `now_us` with zero acceleration.
    pub fn new(now_us: u32, report_interval_us: u32) -> Self {
        Self {
            acceleration: RevPerSecSquared::ZERO,
            previous_us: now_us,
            last_report_us: now_us,
            report_interval_us,
        }
    }

    /// Start integrating with the report interval from `config`.
    pub fn from_config(now_us: u32, config: &ControlConfig) -> Self {
        Self::new(now_us, config.report_interval_us)
    }

    /// Current acceleration.
    #[inline]
    pub fn acceleration(&self) -> RevPerSecSquared {
        self.acceleration
    }

    /// Replace the acceleration. Takes effect from the next `update`.
    #[inline]
    pub fn set_acceleration(&mut self, acceleration: RevPerSecSquared) {
        self.acceleration = acceleration;
    }

    /// Advance velocity by `acceleration * dt` and return the new velocity.
    pub fn update(&mut self, now_us: u32, control: &ControlHandle<'_>) -> RevPerSec {
        let dt = now_us.wrapping_sub(self.previous_us);
        self.previous_us = now_us;

        let velocity = control.velocity() + self.acceleration.over_micros(dt);
        control.set_velocity(velocity);
        velocity
    }

    /// `true` once per report interval.
    ///
    /// The threshold advances by whole intervals, so late polls do not
    /// accumulate drift.
    pub fn snapshot_due(&mut self, now_us: u32) -> bool {
        if now_us.wrapping_sub(self.last_report_us) >= self.report_interval_us {
            self.last_report_us = self.last_report_us.wrapping_add(self.report_interval_us);
            true
        } else {
            false
        }
    }
}
