//! Control-side configuration: command grammar and reporting.

use serde::Deserialize;

/// Acceleration commands are integers in hundredths of rev/s².
pub const DEFAULT_FIXED_POINT_SCALE: u32 = 100;

/// Position/velocity snapshot period.
pub const DEFAULT_REPORT_INTERVAL_US: u32 = 1_000_000;

/// Which command grammar the serial channel speaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommandMode {
    /// `[-]<digits>` lines, scaled fixed-point acceleration integrated into velocity.
    #[default]
    Acceleration,
    /// Whitespace-delimited float tokens written straight to velocity.
    Velocity,
}

/// Control loop configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ControlConfig {
    /// Active command grammar.
    pub mode: CommandMode,

    /// Divisor applied to decoded acceleration integers.
    pub fixed_point_scale: u32,

    /// Period of position/velocity snapshots, in microseconds.
    pub report_interval_us: u32,
}

impl Default for ControlConfig {
    fn default() -> Self {
        Self {
            mode: CommandMode::default(),
            fixed_point_scale: DEFAULT_FIXED_POINT_SCALE,
            report_interval_us: DEFAULT_REPORT_INTERVAL_US,
        }
    }
}
