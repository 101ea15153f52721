//! Unit tests for configuration validation.

use velocity_stepper::config::{parse_config, validate_config, RevPerSec, SystemConfig};
use velocity_stepper::error::{ConfigError, Error};

/// Test validation of the default configuration.
#[test]
fn test_default_config_passes_validation() {
    assert!(validate_config(&SystemConfig::default()).is_ok());
    assert!(validate_config(&SystemConfig::velocity_profile()).is_ok());
}

/// Steps per revolution must line up with the 8-entry phase table.
#[test]
fn test_steps_per_revolution_must_match_table() {
    for (steps, ok) in [(400, true), (8, true), (1600, true), (0, false), (200 + 4, false), (401, false)] {
        let mut config = SystemConfig::default();
        config.drive.steps_per_revolution = steps;
        assert_eq!(validate_config(&config).is_ok(), ok, "steps_per_revolution = {}", steps);
    }
}

/// Test validation fails for a negative threshold.
#[test]
fn test_negative_min_velocity_fails() {
    let mut config = SystemConfig::default();
    config.drive.min_velocity = RevPerSec(-0.01);

    let result = validate_config(&config);
    assert!(matches!(result, Err(Error::Config(ConfigError::InvalidMinVelocity(_)))));
}

/// Test validation of zero-valued periods and scales through the parser.
#[test]
fn test_zero_values_fail() {
    let cases = [
        ("[drive]\nmax_hold_us = 0\n", "hold"),
        ("[control]\nreport_interval_us = 0\n", "report"),
        ("[control]\nfixed_point_scale = 0\n", "scale"),
    ];

    for (toml_str, which) in cases {
        let result = parse_config(toml_str);
        let ok = match (which, &result) {
            ("hold", Err(Error::Config(ConfigError::InvalidHoldTime(0)))) => true,
            ("report", Err(Error::Config(ConfigError::InvalidReportInterval(0)))) => true,
            ("scale", Err(Error::Config(ConfigError::InvalidFixedPointScale(0)))) => true,
            _ => false,
        };
        assert!(ok, "{}: unexpected {:?}", which, result);
    }
}
