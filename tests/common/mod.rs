//! Test doubles shared by the integration and property tests.

#![allow(dead_code)]

use std::cell::Cell;
use std::collections::VecDeque;

use embedded_hal_nb::serial::{ErrorKind, ErrorType, Read};
use velocity_stepper::error::MotorError;
use velocity_stepper::{Monotonic, PhaseOutputs, PhasePattern};

/// Clock advanced by hand.
#[derive(Default)]
pub struct ManualClock {
    now: Cell<u64>,
}

impl ManualClock {
    pub fn at(us: u64) -> Self {
        Self { now: Cell::new(us) }
    }

    pub fn set(&self, us: u64) {
        self.now.set(us);
    }

    pub fn advance(&self, us: u64) -> u64 {
        let next = self.now.get() + us;
        self.now.set(next);
        next
    }
}

impl Monotonic for ManualClock {
    fn now_us(&self) -> u64 {
        self.now.get()
    }
}

/// Serial receiver fed from a queue; empty queue reads as `WouldBlock`.
#[derive(Default)]
pub struct ByteQueue {
    bytes: VecDeque<u8>,
}

impl ByteQueue {
    pub fn with(input: &[u8]) -> Self {
        Self {
            bytes: input.iter().copied().collect(),
        }
    }

    pub fn push(&mut self, input: &[u8]) {
        self.bytes.extend(input.iter().copied());
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl ErrorType for ByteQueue {
    type Error = ErrorKind;
}

impl Read<u8> for ByteQueue {
    fn read(&mut self) -> nb::Result<u8, ErrorKind> {
        self.bytes.pop_front().ok_or(nb::Error::WouldBlock)
    }
}

/// Output lines that remember their level and every write.
#[derive(Default)]
pub struct Lines {
    pub current: PhasePattern,
    pub history: Vec<PhasePattern>,
}

impl Lines {
    pub fn all_off(&self) -> bool {
        self.current == PhasePattern::OFF
    }

    /// Written patterns excluding releases.
    pub fn steps(&self) -> Vec<PhasePattern> {
        self.history
            .iter()
            .copied()
            .filter(|p| *p != PhasePattern::OFF)
            .collect()
    }
}

impl PhaseOutputs for Lines {
    fn apply(&mut self, pattern: PhasePattern) -> Result<(), MotorError> {
        self.current = pattern;
        self.history.push(pattern);
        Ok(())
    }
}

/// Index of `pattern` in the half-step table.
pub fn table_index(pattern: PhasePattern) -> usize {
    velocity_stepper::motor::HALF_STEP_SEQUENCE
        .iter()
        .position(|p| *p == pattern)
        .expect("pattern not in table")
}
