//! Unit tests for TOML configuration parsing.

use velocity_stepper::config::{parse_config, CommandMode, SystemConfig};

/// Test parsing a complete configuration from TOML.
#[test]
fn test_parse_full_config() {
    let toml_str = r#"
[drive]
steps_per_revolution = 400
min_velocity_rev_per_sec = 0.02
max_hold_us = 250000

[control]
mode = "acceleration"
fixed_point_scale = 1000
report_interval_us = 500000
"#;

    let config: SystemConfig = toml::from_str(toml_str).expect("Failed to parse TOML");

    assert_eq!(config.drive.steps_per_revolution, 400);
    assert!((config.drive.min_velocity.value() - 0.02).abs() < 1e-6);
    assert_eq!(config.drive.max_hold_us, 250_000);
    assert_eq!(config.control.mode, CommandMode::Acceleration);
    assert_eq!(config.control.fixed_point_scale, 1000);
    assert_eq!(config.control.report_interval_us, 500_000);
}

/// Test that omitted tables fall back to the firmware defaults.
#[test]
fn test_partial_config_uses_defaults() {
    let toml_str = r#"
[control]
mode = "velocity"
"#;

    let config = parse_config(toml_str).expect("Failed to parse TOML");
    assert_eq!(config.control.mode, CommandMode::Velocity);
    assert_eq!(config.drive, SystemConfig::default().drive);
    assert_eq!(config.control.report_interval_us, 1_000_000);
}

/// Test that an integer is accepted where a float is expected.
#[test]
fn test_integer_min_velocity() {
    let toml_str = r#"
[drive]
min_velocity_rev_per_sec = 1
"#;

    let config = parse_config(toml_str).expect("Failed to parse TOML");
    assert_eq!(config.drive.min_velocity.value(), 1.0);
}

/// Test that unknown command modes are rejected during parsing.
#[test]
fn test_unknown_mode_rejected() {
    let toml_str = r#"
[control]
mode = "position"
"#;

    let result: Result<SystemConfig, _> = toml::from_str(toml_str);
    assert!(result.is_err(), "Should reject unknown command mode");
}
