//! Control-context loop: integrate, ingest, report.

use embedded_hal_nb::serial::Read;

use crate::clock::Monotonic;
use crate::command::{Command, CommandIngestor};
use crate::config::ControlConfig;
use crate::error::CommandError;
use crate::motion::Integrator;
use crate::shared::ControlHandle;

use super::status::{StatusEvent, StatusSink};

/// Owns everything the control context runs.
///
/// One [`poll`](ControlLoop::poll) is one iteration of the firmware's main loop:
/// 1. integrate acceleration over the time since the previous iteration;
/// 2. read and decode at most one byte;
/// 3. emit a snapshot when the report interval has elapsed.
pub struct ControlLoop<'a, S, K> {
    control: ControlHandle<'a>,
    ingestor: CommandIngestor<S>,
    integrator: Integrator,
    sink: K,
}

impl<'a, S, K> ControlLoop<'a, S, K>
where
    S: Read<u8>,
    K: StatusSink,
{
    /// Build the loop. `now_us` seeds the integrator's time base.
    pub fn new(control: ControlHandle<'a>, source: S, sink: K, config: &ControlConfig, now_us: u32) -> Self {
        Self {
            control,
            ingestor: CommandIngestor::from_config(source, config),
            integrator: Integrator::from_config(now_us, config),
            sink,
        }
    }

    /// One iteration at time `now_us`. Returns the command accepted in this
    /// iteration, if any.
    pub fn poll(&mut self, now_us: u32) -> Option<Command> {
        self.integrator.update(now_us, &self.control);

        let accepted = match self.ingestor.poll() {
            Ok(Some(command)) => {
                self.dispatch(command);
                Some(command)
            }
            Ok(None) => None,
            Err(CommandError::Malformed(token)) => {
                warn!("invalid input: {=str}", token.as_str());
                self.sink.emit(&StatusEvent::InvalidInput(token));
                None
            }
            Err(CommandError::Serial) => {
                warn!("serial receive error");
                None
            }
        };

        if self.integrator.snapshot_due(now_us) {
            self.sink.emit(&StatusEvent::Snapshot {
                position: self.control.position(),
                velocity: self.control.velocity(),
            });
        }

        accepted
    }

    fn dispatch(&mut self, command: Command) {
        match command {
            Command::SetAcceleration(acceleration) => {
                self.integrator.set_acceleration(acceleration);
                info!("acceleration set: {}", acceleration.value());
                self.sink.emit(&StatusEvent::AccelerationSet(acceleration));
            }
            Command::SetVelocity(velocity) => {
                self.control.set_velocity(velocity);
                info!("velocity set: {}", velocity.value());
                self.sink.emit(&StatusEvent::VelocitySet(velocity));
            }
        }
    }

    /// Poll forever as fast as the core allows.
    pub fn run<C: Monotonic>(mut self, clock: &C) -> ! {
        loop {
            self.poll(clock.now_us_32());
        }
    }

    /// The integrator, for inspection.
    pub fn integrator(&self) -> &Integrator {
        &self.integrator
    }

    /// The shared-state handle.
    pub fn control(&self) -> &ControlHandle<'a> {
        &self.control
    }

    /// Borrow the status sink.
    pub fn sink(&self) -> &K {
        &self.sink
    }

    /// Borrow the serial source, e.g. to queue test input.
    pub fn source_mut(&mut self) -> &mut S {
        self.ingestor.source_mut()
    }
}
