//! System configuration - root configuration structure.

use serde::Deserialize;

use super::control::ControlConfig;
use super::drive::DriveConfig;

/// Root configuration structure from TOML.
///
/// Every table and field is optional; missing values take the firmware defaults.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SystemConfig {
    /// Step timing for the motor loop.
    pub drive: DriveConfig,

    /// Command grammar and reporting for the control loop.
    pub control: ControlConfig,
}

impl SystemConfig {
    /// Configuration for the direct velocity-set profile.
    pub fn velocity_profile() -> Self {
        let mut config = Self::default();
        config.control.mode = super::CommandMode::Velocity;
        config
    }
}
