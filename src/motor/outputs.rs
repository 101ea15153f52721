//! The four drive lines.

use embedded_hal::digital::{OutputPin, PinState};

use crate::error::MotorError;

use super::phase::PhasePattern;

/// Sink for phase patterns.
pub trait PhaseOutputs {
    /// Drive all four lines to `pattern`.
    fn apply(&mut self, pattern: PhasePattern) -> Result<(), MotorError>;

    /// Drive all four lines low.
    fn release(&mut self) -> Result<(), MotorError> {
        self.apply(PhasePattern::OFF)
    }
}

impl<T: PhaseOutputs + ?Sized> PhaseOutputs for &mut T {
    fn apply(&mut self, pattern: PhasePattern) -> Result<(), MotorError> {
        (**self).apply(pattern)
    }
}

/// Four individually typed GPIO outputs, lines A..D.
///
/// Pins are written in order A, B, C, D.
pub struct CoilPins<A, B, C, D>
where
    A: OutputPin,
    B: OutputPin,
    C: OutputPin,
    D: OutputPin,
{
    a: A,
    b: B,
    c: C,
    d: D,
}

impl<A, B, C, D> CoilPins<A, B, C, D>
where
    A: OutputPin,
    B: OutputPin,
    C: OutputPin,
    D: OutputPin,
{
    /// Take ownership of the four pins. Pins are not touched until the first pattern.
    pub fn new(a: A, b: B, c: C, d: D) -> Self {
        Self { a, b, c, d }
    }

    /// Give the pins back.
    pub fn into_inner(self) -> (A, B, C, D) {
        (self.a, self.b, self.c, self.d)
    }
}

impl<A, B, C, D> PhaseOutputs for CoilPins<A, B, C, D>
where
    A: OutputPin,
    B: OutputPin,
    C: OutputPin,
    D: OutputPin,
{
    fn apply(&mut self, pattern: PhasePattern) -> Result<(), MotorError> {
        let [a, b, c, d] = pattern.lines();
        self.a.set_state(PinState::from(a)).map_err(|_| MotorError::PinError)?;
        self.b.set_state(PinState::from(b)).map_err(|_| MotorError::PinError)?;
        self.c.set_state(PinState::from(c)).map_err(|_| MotorError::PinError)?;
        self.d.set_state(PinState::from(d)).map_err(|_| MotorError::PinError)?;
        Ok(())
    }
}

/// Same-typed pins, e.g. type-erased HAL pins.
impl<P: OutputPin> PhaseOutputs for [P; 4] {
    fn apply(&mut self, pattern: PhasePattern) -> Result<(), MotorError> {
        for (pin, level) in self.iter_mut().zip(pattern.lines()) {
            pin.set_state(PinState::from(level)).map_err(|_| MotorError::PinError)?;
        }
        Ok(())
    }
}
