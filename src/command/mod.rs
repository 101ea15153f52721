//! Command channel for velocity-stepper.
//!
//! Decodes the host's byte stream into [`Command`]s. Two grammars exist, one per
//! [`CommandMode`]:
//!
//! - acceleration: `[-]<digits>` terminated by `\r` or `\n`, in hundredths of rev/s²;
//! - velocity: whitespace-delimited float tokens, in rev/s.

mod accumulator;
mod ingestor;
mod token;

pub use accumulator::AccelerationDecoder;
pub use ingestor::CommandIngestor;
pub use token::{VelocityDecoder, MAX_TOKEN_LEN};

use crate::config::units::{RevPerSec, RevPerSecSquared};
use crate::config::{CommandMode, ControlConfig};
use crate::error::CommandError;

/// A decoded host command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// New acceleration for the integrator.
    SetAcceleration(RevPerSecSquared),
    /// New velocity, bypassing the integrator.
    SetVelocity(RevPerSec),
}

/// The decoder for the configured grammar.
#[derive(Debug, Clone)]
pub enum CommandDecoder {
    /// Fixed-point acceleration lines.
    Acceleration(AccelerationDecoder),
    /// Float velocity tokens.
    Velocity(VelocityDecoder),
}

impl CommandDecoder {
    /// Decoder for `config.mode`.
    pub fn from_config(config: &ControlConfig) -> Self {
        match config.mode {
            CommandMode::Acceleration => {
                CommandDecoder::Acceleration(AccelerationDecoder::new(config.fixed_point_scale))
            }
            CommandMode::Velocity => CommandDecoder::Velocity(VelocityDecoder::new()),
        }
    }

    /// Feed one received byte.
    ///
    /// Returns a command when the byte completes one.
    ///
    /// # Errors
    ///
    /// `CommandError::Malformed` when a velocity token does not parse.
    pub fn feed(&mut self, byte: u8) -> Result<Option<Command>, CommandError> {
        match self {
            CommandDecoder::Acceleration(decoder) => Ok(decoder.feed(byte)),
            CommandDecoder::Velocity(decoder) => decoder.feed(byte),
        }
    }
}

impl Default for CommandDecoder {
    fn default() -> Self {
        Self::from_config(&ControlConfig::default())
    }
}
