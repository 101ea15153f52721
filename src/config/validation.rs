//! Configuration validation.

use crate::error::{ConfigError, Error, Result};
use crate::motor::PHASE_COUNT;

use super::{ControlConfig, DriveConfig, SystemConfig};

/// Validate a system configuration.
///
/// Checks:
/// - Steps per revolution is a positive multiple of the phase table length
/// - Minimum velocity is finite and positive
/// - Hold time and report interval are non-zero
/// - Fixed-point scale is non-zero
pub fn validate_config(config: &SystemConfig) -> Result<()> {
    validate_drive(&config.drive)?;
    validate_control(&config.control)?;
    Ok(())
}

fn validate_drive(drive: &DriveConfig) -> Result<()> {
    // Position indexes the phase table modulo its length, so a revolution must
    // span whole electrical cycles.
    if drive.steps_per_revolution == 0 || drive.steps_per_revolution % PHASE_COUNT as u32 != 0 {
        return Err(Error::Config(ConfigError::InvalidStepsPerRevolution(
            drive.steps_per_revolution,
        )));
    }

    let min = drive.min_velocity.value();
    if !min.is_finite() || min <= 0.0 {
        return Err(Error::Config(ConfigError::InvalidMinVelocity(min)));
    }

    if drive.max_hold_us == 0 {
        return Err(Error::Config(ConfigError::InvalidHoldTime(drive.max_hold_us)));
    }

    Ok(())
}

fn validate_control(control: &ControlConfig) -> Result<()> {
    if control.fixed_point_scale == 0 {
        return Err(Error::Config(ConfigError::InvalidFixedPointScale(
            control.fixed_point_scale,
        )));
    }

    if control.report_interval_us == 0 {
        return Err(Error::Config(ConfigError::InvalidReportInterval(
            control.report_interval_us,
        )));
    }

    Ok(())
}
