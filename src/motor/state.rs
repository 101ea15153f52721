//! Step sequencer states.

/// What the motor loop did on its last poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SequencerState {
    /// |velocity| below threshold, or not a finite number: no stepping.
    #[default]
    Idle,
    /// Timing steps for the current velocity.
    Stepping,
    /// No step for longer than the hold limit; lines forced low.
    ///
    /// Overrides `Idle`/`Stepping`: a very slow velocity can be stepping and
    /// holding in alternation.
    Holding,
}
