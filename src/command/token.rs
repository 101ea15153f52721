//! Whitespace-delimited velocity token decoder.

use heapless::String;

use crate::config::units::RevPerSec;
use crate::error::CommandError;

use super::Command;

/// Longest token kept; longer tokens are reported as malformed.
pub const MAX_TOKEN_LEN: usize = 32;

/// Collects bytes up to ASCII whitespace and parses them as an `f32` velocity.
#[derive(Debug, Clone, Default)]
pub struct VelocityDecoder {
    token: String<MAX_TOKEN_LEN>,
    overflowed: bool,
}

impl VelocityDecoder {
    /// Empty decoder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one byte.
    ///
    /// # Errors
    ///
    /// `CommandError::Malformed` carrying the token when it is not a finite
    /// float or is longer than [`MAX_TOKEN_LEN`].
    pub fn feed(&mut self, byte: u8) -> Result<Option<Command>, CommandError> {
        if byte.is_ascii_whitespace() {
            if self.token.is_empty() && !self.overflowed {
                return Ok(None);
            }
            let result = self.parse();
            self.token.clear();
            self.overflowed = false;
            return result.map(Some);
        }

        if self.token.push(char::from(byte)).is_err() {
            self.overflowed = true;
        }
        Ok(None)
    }

    fn parse(&self) -> Result<Command, CommandError> {
        if !self.overflowed {
            if let Ok(value) = self.token.parse::<f32>() {
                if value.is_finite() {
                    return Ok(Command::SetVelocity(RevPerSec(value)));
                }
            }
        }
        Err(CommandError::Malformed(self.token.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed_str(decoder: &mut VelocityDecoder, input: &str) -> Result<Option<Command>, CommandError> {
        let mut last = Ok(None);
        for &b in input.as_bytes() {
            match decoder.feed(b) {
                Ok(None) => {}
                other => last = other,
            }
        }
        last
    }

    #[test]
    fn test_parses_float_token() {
        let mut decoder = VelocityDecoder::new();
        assert_eq!(
            feed_str(&mut decoder, "-1.5\n"),
            Ok(Some(Command::SetVelocity(RevPerSec(-1.5))))
        );
    }

    #[test]
    fn test_leading_whitespace_is_skipped() {
        let mut decoder = VelocityDecoder::new();
        assert_eq!(
            feed_str(&mut decoder, "  \t 2 "),
            Ok(Some(Command::SetVelocity(RevPerSec(2.0))))
        );
    }

    #[test]
    fn test_invalid_token() {
        let mut decoder = VelocityDecoder::new();
        let result = feed_str(&mut decoder, "abc ");
        assert_eq!(
            result,
            Err(CommandError::Malformed(String::try_from("abc").unwrap()))
        );

        // Decoder recovers for the next token.
        assert_eq!(
            feed_str(&mut decoder, "3 "),
            Ok(Some(Command::SetVelocity(RevPerSec(3.0))))
        );
    }

    #[test]
    fn test_non_finite_tokens_rejected() {
        let mut decoder = VelocityDecoder::new();
        assert!(matches!(feed_str(&mut decoder, "nan "), Err(CommandError::Malformed(_))));
        assert!(matches!(feed_str(&mut decoder, "inf "), Err(CommandError::Malformed(_))));
    }

    #[test]
    fn test_overlong_token() {
        let mut decoder = VelocityDecoder::new();
        let long = "1111111111111111111111111111111111111111 ";
        match feed_str(&mut decoder, long) {
            Err(CommandError::Malformed(token)) => assert_eq!(token.len(), MAX_TOKEN_LEN),
            other => panic!("unexpected {:?}", other),
        }
    }
}
