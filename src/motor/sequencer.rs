//! Step sequencer: turns the shared velocity into timed phase patterns.

use crate::clock::Monotonic;
use crate::config::DriveConfig;
use crate::error::MotorError;
use crate::motion::{Direction, StepTiming};
use crate::shared::MotorHandle;

use super::outputs::PhaseOutputs;
use super::phase;
use super::state::SequencerState;

/// Result of one [`StepSequencer::poll`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollOutcome {
    /// State after the poll.
    pub state: SequencerState,
    /// Set when this poll emitted a step.
    pub step: Option<Direction>,
}

/// Motor-context polling state machine.
///
/// Each poll:
/// 1. reads the velocity published by the control loop;
/// 2. below the threshold (or NaN/inf) does nothing on the step path;
/// 3. otherwise, once more than `interval_us` has passed since the last step,
///    asserts the pattern for the current position and moves the position one
///    count in the direction of the velocity;
/// 4. independently, releases all lines once no step happened for longer than
///    the hold limit.
pub struct StepSequencer<'a, O: PhaseOutputs> {
    outputs: O,
    shared: MotorHandle<'a>,
    timing: StepTiming,
    max_hold_us: u64,
    last_step_us: u64,
    /// Lines may be driven; cleared once released.
    energized: bool,
    /// Latched while the velocity is non-finite, to log once per episode.
    faulted: bool,
}

impl<'a, O: PhaseOutputs> StepSequencer<'a, O> {
    /// Create a sequencer. The last step time starts at 0.
    ///
    /// The lines are assumed to be in an unknown state, so the first hold
    /// timeout drives them low.
    pub fn new(outputs: O, shared: MotorHandle<'a>, config: &DriveConfig) -> Self {
        Self {
            outputs,
            shared,
            timing: StepTiming::from_config(config),
            max_hold_us: config.max_hold_us,
            last_step_us: 0,
            energized: true,
            faulted: false,
        }
    }

    /// One iteration of the motor loop at time `now_us`.
    ///
    /// # Errors
    ///
    /// Returns `MotorError::PinError` if an output write fails. The sequencer
    /// stays consistent and the next poll retries.
    pub fn poll(&mut self, now_us: u64) -> Result<PollOutcome, MotorError> {
        let velocity = self.shared.velocity();
        let mut state = SequencerState::Idle;
        let mut step = None;

        if !velocity.is_finite() {
            if !self.faulted {
                warn!("non-finite velocity, holding position");
                self.faulted = true;
            }
        } else {
            self.faulted = false;
        }

        if let Some(interval_us) = self.timing.interval_us(velocity) {
            state = SequencerState::Stepping;

            if now_us.wrapping_sub(self.last_step_us) as f32 > interval_us {
                self.last_step_us = now_us;
                self.energized = true;
                self.outputs.apply(phase::pattern_for(self.shared.position()))?;

                let direction = Direction::from_velocity(velocity);
                self.shared.advance(direction);
                step = Some(direction);
            }
        }

        if now_us.wrapping_sub(self.last_step_us) > self.max_hold_us {
            state = SequencerState::Holding;
            if self.energized {
                self.outputs.release()?;
                self.energized = false;
                debug!("hold timeout, lines released");
            }
        }

        Ok(PollOutcome { state, step })
    }

    /// Poll forever as fast as the core allows. Output errors are logged and
    /// the loop keeps going.
    pub fn run<C: Monotonic>(mut self, clock: &C) -> ! {
        loop {
            if let Err(e) = self.poll(clock.now_us()) {
                error!("step output failed: {}", e);
            }
        }
    }

    /// Time of the last step, in microseconds.
    #[inline]
    pub fn last_step_us(&self) -> u64 {
        self.last_step_us
    }

    /// `false` once the hold timeout has released the lines.
    #[inline]
    pub fn is_energized(&self) -> bool {
        self.energized
    }

    /// Borrow the output sink.
    #[inline]
    pub fn outputs(&self) -> &O {
        &self.outputs
    }

    /// Stop sequencing and return the output sink.
    pub fn into_outputs(self) -> O {
        self.outputs
    }
}
