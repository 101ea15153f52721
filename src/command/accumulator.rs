//! Fixed-point acceleration line decoder.

use crate::config::units::RevPerSecSquared;
use crate::config::DEFAULT_FIXED_POINT_SCALE;

use super::Command;

/// Accumulates `[-]<digits>` and emits an acceleration on `\r` or `\n`.
///
/// - digits append to the accumulator (saturating at `i32::MAX`);
/// - `-` anywhere in the line makes the value negative;
/// - any other byte is ignored;
/// - every terminator emits, so a bare `\n` sets the acceleration to zero;
/// - a `\n` directly after `\r` is swallowed, so `\r\n` yields one command.
#[derive(Debug, Clone)]
pub struct AccelerationDecoder {
    scale: f32,
    accumulator: i32,
    negative: bool,
    after_cr: bool,
}

impl AccelerationDecoder {
    /// Decoder dividing decoded integers by `scale`. A zero scale is treated as 1.
    pub fn new(scale: u32) -> Self {
        Self {
            scale: scale.max(1) as f32,
            accumulator: 0,
            negative: false,
            after_cr: false,
        }
    }

    /// Feed one byte.
    pub fn feed(&mut self, byte: u8) -> Option<Command> {
        let after_cr = core::mem::replace(&mut self.after_cr, byte == b'\r');
        match byte {
            b'-' => self.negative = true,
            b'0'..=b'9' => {
                self.accumulator = self
                    .accumulator
                    .saturating_mul(10)
                    .saturating_add((byte - b'0') as i32);
            }
            b'\n' if after_cr => {}
            b'\r' | b'\n' => {
                let magnitude = self.accumulator as f32 / self.scale;
                let value = if self.negative { -magnitude } else { magnitude };
                self.reset();
                return Some(Command::SetAcceleration(RevPerSecSquared(value)));
            }
            _ => {}
        }
        None
    }

    /// Drop a partially received line.
    pub fn reset(&mut self) {
        self.accumulator = 0;
        self.negative = false;
    }
}

impl Default for AccelerationDecoder {
    fn default() -> Self {
        Self::new(DEFAULT_FIXED_POINT_SCALE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed_all(decoder: &mut AccelerationDecoder, input: &[u8]) -> heapless::Vec<Command, 8> {
        let mut out = heapless::Vec::new();
        for &b in input {
            if let Some(cmd) = decoder.feed(b) {
                out.push(cmd).unwrap();
            }
        }
        out
    }

    #[test]
    fn test_positive_value() {
        let mut decoder = AccelerationDecoder::default();
        let cmds = feed_all(&mut decoder, b"500\n");
        assert_eq!(cmds.as_slice(), &[Command::SetAcceleration(RevPerSecSquared(5.0))]);
    }

    #[test]
    fn test_negative_value_and_reset() {
        let mut decoder = AccelerationDecoder::default();
        let cmds = feed_all(&mut decoder, b"-250\r125\r");
        assert_eq!(
            cmds.as_slice(),
            &[
                Command::SetAcceleration(RevPerSecSquared(-2.5)),
                Command::SetAcceleration(RevPerSecSquared(1.25)),
            ]
        );
    }

    #[test]
    fn test_garbage_is_ignored() {
        let mut decoder = AccelerationDecoder::default();
        let cmds = feed_all(&mut decoder, b"a1x0.0 \n");
        assert_eq!(cmds.as_slice(), &[Command::SetAcceleration(RevPerSecSquared(1.0))]);
    }

    #[test]
    fn test_crlf_emits_once() {
        let mut decoder = AccelerationDecoder::default();
        let cmds = feed_all(&mut decoder, b"300\r\n-100\r\n");
        assert_eq!(
            cmds.as_slice(),
            &[
                Command::SetAcceleration(RevPerSecSquared(3.0)),
                Command::SetAcceleration(RevPerSecSquared(-1.0)),
            ]
        );
    }

    #[test]
    fn test_bare_terminator_sets_zero() {
        let mut decoder = AccelerationDecoder::default();
        let cmds = feed_all(&mut decoder, b"500\n\n\r");
        assert_eq!(
            cmds.as_slice(),
            &[
                Command::SetAcceleration(RevPerSecSquared(5.0)),
                Command::SetAcceleration(RevPerSecSquared(0.0)),
                Command::SetAcceleration(RevPerSecSquared(0.0)),
            ]
        );
    }

    #[test]
    fn test_zero_scale_does_not_divide_by_zero() {
        let mut decoder = AccelerationDecoder::new(0);
        let cmds = feed_all(&mut decoder, b"7\n");
        assert_eq!(cmds.as_slice(), &[Command::SetAcceleration(RevPerSecSquared(7.0))]);
    }

    #[test]
    fn test_zero_is_a_command() {
        let mut decoder = AccelerationDecoder::default();
        let cmds = feed_all(&mut decoder, b"0\n");
        assert_eq!(cmds.as_slice(), &[Command::SetAcceleration(RevPerSecSquared(0.0))]);
    }

    #[test]
    fn test_overflow_saturates() {
        let mut decoder = AccelerationDecoder::default();
        let cmds = feed_all(&mut decoder, b"99999999999999\n");
        assert_eq!(
            cmds.as_slice(),
            &[Command::SetAcceleration(RevPerSecSquared(i32::MAX as f32 / 100.0))]
        );
    }
}
