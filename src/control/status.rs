//! Observability channel: acknowledgments, snapshots and invalid-input notices.

use core::fmt;

use crate::command::MAX_TOKEN_LEN;
use crate::config::units::{RevPerSec, RevPerSecSquared};

/// One line of status output.
///
/// The text produced by `Display` is for humans; only the event kinds are stable.
#[derive(Debug, Clone, PartialEq)]
pub enum StatusEvent {
    /// An acceleration command was accepted.
    AccelerationSet(RevPerSecSquared),
    /// A velocity command was accepted.
    VelocitySet(RevPerSec),
    /// Periodic position/velocity report.
    Snapshot {
        /// Step counter.
        position: u32,
        /// Commanded velocity.
        velocity: RevPerSec,
    },
    /// A token could not be parsed; nothing changed.
    InvalidInput(heapless::String<MAX_TOKEN_LEN>),
}

impl fmt::Display for StatusEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusEvent::AccelerationSet(a) => write!(f, "Acceleration set: {}", a.value()),
            StatusEvent::VelocitySet(v) => write!(f, "Velocity set: {}", v.value()),
            StatusEvent::Snapshot { position, velocity } => {
                write!(f, "Position: {} Velocity: {}", position, velocity.value())
            }
            StatusEvent::InvalidInput(token) => write!(f, "Invalid input: '{}'", token),
        }
    }
}

/// Where status events go.
pub trait StatusSink {
    /// Deliver one event. Must not block for long; the control loop is waiting.
    fn emit(&mut self, event: &StatusEvent);
}

impl<T: StatusSink + ?Sized> StatusSink for &mut T {
    fn emit(&mut self, event: &StatusEvent) {
        (**self).emit(event)
    }
}

/// Discards everything.
impl StatusSink for () {
    fn emit(&mut self, _event: &StatusEvent) {}
}

/// Keeps events until full, then drops new ones.
impl<const N: usize> StatusSink for heapless::Vec<StatusEvent, N> {
    fn emit(&mut self, event: &StatusEvent) {
        let _ = self.push(event.clone());
    }
}

/// Writes one text line per event to any `core::fmt::Write`.
///
/// Write errors are ignored: a stalled console must not stop the control loop.
#[derive(Debug, Default)]
pub struct FmtSink<W> {
    writer: W,
}

impl<W: fmt::Write> FmtSink<W> {
    /// Wrap a writer.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Borrow the writer.
    pub fn writer(&self) -> &W {
        &self.writer
    }

    /// Unwrap the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: fmt::Write> StatusSink for FmtSink<W> {
    fn emit(&mut self, event: &StatusEvent) {
        let _ = writeln!(self.writer, "{}", event);
    }
}

/// Prints each event on stdout.
#[cfg(feature = "std")]
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

#[cfg(feature = "std")]
impl StatusSink for StdoutSink {
    fn emit(&mut self, event: &StatusEvent) {
        println!("{}", event);
    }
}
