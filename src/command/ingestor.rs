//! Polls the serial source one byte at a time.

use embedded_hal_nb::serial::Read;

use crate::config::ControlConfig;
use crate::error::CommandError;

use super::{Command, CommandDecoder};

/// Non-blocking command reader over an `embedded-hal-nb` serial receiver.
pub struct CommandIngestor<S> {
    source: S,
    decoder: CommandDecoder,
}

impl<S: Read<u8>> CommandIngestor<S> {
    /// Reader using `decoder`.
    pub fn new(source: S, decoder: CommandDecoder) -> Self {
        Self { source, decoder }
    }

    /// Reader speaking the grammar selected in `config`.
    pub fn from_config(source: S, config: &ControlConfig) -> Self {
        Self::new(source, CommandDecoder::from_config(config))
    }

    /// Read at most one byte and decode it.
    ///
    /// `Ok(None)` covers both "no byte ready" and "byte consumed, command not
    /// complete yet".
    ///
    /// # Errors
    ///
    /// `CommandError::Malformed` for a rejected token, `CommandError::Serial`
    /// when the receiver reports an error.
    pub fn poll(&mut self) -> Result<Option<Command>, CommandError> {
        match self.source.read() {
            Ok(byte) => self.decoder.feed(byte),
            Err(nb::Error::WouldBlock) => Ok(None),
            Err(nb::Error::Other(_)) => Err(CommandError::Serial),
        }
    }

    /// Borrow the serial source.
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::units::RevPerSecSquared;
    use embedded_hal_nb::serial::{ErrorKind, ErrorType};

    /// Hands out one scripted result per read.
    struct Script {
        steps: heapless::Deque<nb::Result<u8, ErrorKind>, 16>,
    }

    impl Script {
        fn new(steps: &[nb::Result<u8, ErrorKind>]) -> Self {
            let mut deque = heapless::Deque::new();
            for step in steps {
                deque.push_back(step.clone()).unwrap();
            }
            Self { steps: deque }
        }
    }

    impl ErrorType for Script {
        type Error = ErrorKind;
    }

    impl Read<u8> for Script {
        fn read(&mut self) -> nb::Result<u8, ErrorKind> {
            self.steps.pop_front().unwrap_or(Err(nb::Error::WouldBlock))
        }
    }

    #[test]
    fn test_one_byte_per_poll() {
        let script = Script::new(&[Ok(b'1'), Err(nb::Error::WouldBlock), Ok(b'0'), Ok(b'0'), Ok(b'\n')]);
        let mut ingestor = CommandIngestor::new(script, CommandDecoder::default());

        assert_eq!(ingestor.poll(), Ok(None));
        assert_eq!(ingestor.poll(), Ok(None));
        assert_eq!(ingestor.poll(), Ok(None));
        assert_eq!(ingestor.poll(), Ok(None));
        assert_eq!(
            ingestor.poll(),
            Ok(Some(Command::SetAcceleration(RevPerSecSquared(1.0))))
        );
        assert_eq!(ingestor.poll(), Ok(None));
    }

    #[test]
    fn test_serial_error_is_reported() {
        let script = Script::new(&[Err(nb::Error::Other(ErrorKind::Overrun))]);
        let mut ingestor = CommandIngestor::new(script, CommandDecoder::default());

        assert_eq!(ingestor.poll(), Err(CommandError::Serial));
        assert_eq!(ingestor.poll(), Ok(None));
    }
}
