//! Error types for velocity-stepper.
//!
//! Provides unified error handling across configuration, command decoding and motor output.
//! None of these are fatal: both polling loops log them and keep running.

use core::fmt;

/// Result type alias using the library's Error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for all velocity-stepper operations.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Configuration parsing or validation error
    Config(ConfigError),
    /// Command decoding or transport error
    Command(CommandError),
    /// Motor output error
    Motor(MotorError),
}

/// Configuration-related errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Failed to parse TOML configuration
    ParseError(heapless::String<128>),
    /// Steps per revolution must be positive and a multiple of the phase table length
    InvalidStepsPerRevolution(u32),
    /// Minimum stepping velocity must be finite and > 0
    InvalidMinVelocity(f32),
    /// Maximum hold time must be > 0
    InvalidHoldTime(u64),
    /// Snapshot report interval must be > 0
    InvalidReportInterval(u32),
    /// Fixed-point scale for acceleration commands must be > 0
    InvalidFixedPointScale(u32),
    /// File I/O error (std only)
    #[cfg(feature = "std")]
    IoError(heapless::String<128>),
}

/// Command channel errors.
#[derive(Debug, Clone, PartialEq)]
pub enum CommandError {
    /// Token could not be parsed as a number (truncated to 32 bytes)
    Malformed(heapless::String<32>),
    /// The serial source reported a receive error
    Serial,
}

/// Motor output errors.
#[derive(Debug, Clone, PartialEq)]
pub enum MotorError {
    /// Pin operation failed
    PinError,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(e) => write!(f, "Configuration error: {}", e),
            Error::Command(e) => write!(f, "Command error: {}", e),
            Error::Motor(e) => write!(f, "Motor error: {}", e),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            ConfigError::InvalidStepsPerRevolution(v) => {
                write!(f, "Invalid steps per revolution: {}. Must be a positive multiple of 8", v)
            }
            ConfigError::InvalidMinVelocity(v) => {
                write!(f, "Invalid minimum velocity: {}. Must be finite and > 0", v)
            }
            ConfigError::InvalidHoldTime(v) => write!(f, "Invalid max hold time: {} us. Must be > 0", v),
            ConfigError::InvalidReportInterval(v) => {
                write!(f, "Invalid report interval: {} us. Must be > 0", v)
            }
            ConfigError::InvalidFixedPointScale(v) => {
                write!(f, "Invalid fixed-point scale: {}. Must be > 0", v)
            }
            #[cfg(feature = "std")]
            ConfigError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::Malformed(token) => write!(f, "Invalid input: '{}'", token),
            CommandError::Serial => write!(f, "Serial receive error"),
        }
    }
}

impl fmt::Display for MotorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MotorError::PinError => write!(f, "GPIO pin operation failed"),
        }
    }
}

// Conversion impls
impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<CommandError> for Error {
    fn from(e: CommandError) -> Self {
        Error::Command(e)
    }
}

impl From<MotorError> for Error {
    fn from(e: MotorError) -> Self {
        Error::Motor(e)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

#[cfg(feature = "std")]
impl std::error::Error for CommandError {}

#[cfg(feature = "std")]
impl std::error::Error for MotorError {}

#[cfg(feature = "defmt")]
impl defmt::Format for CommandError {
    fn format(&self, f: defmt::Formatter) {
        match self {
            CommandError::Malformed(token) => defmt::write!(f, "Malformed({=str})", token.as_str()),
            CommandError::Serial => defmt::write!(f, "Serial"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for MotorError {
    fn format(&self, f: defmt::Formatter) {
        match self {
            MotorError::PinError => defmt::write!(f, "PinError"),
        }
    }
}
