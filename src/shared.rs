//! State shared between the control loop and the motor loop.
//!
//! Two scalars cross the boundary: the step `position` and the commanded
//! `velocity`. Each has exactly one writer:
//!
//! | field      | writer                     | reader                        |
//! |------------|----------------------------|-------------------------------|
//! | `velocity` | [`ControlHandle`]          | [`MotorHandle`] (every poll)  |
//! | `position` | [`MotorHandle`]            | [`ControlHandle`] (display)   |
//!
//! Both are relaxed atomics. A stale velocity read delays or advances one step by
//! at most one interval; a stale position read only affects the snapshot text.
//! No ordering between the two fields is required.

use core::sync::atomic::{AtomicU32, Ordering};

use crate::config::units::RevPerSec;
use crate::motion::Direction;

/// Cross-context position/velocity cell.
///
/// Place it where both execution contexts can reach it (a `static` on a
/// dual-core MCU, a local borrowed by scoped threads on a host), then
/// [`split`](SharedState::split) it once.
#[derive(Debug, Default)]
pub struct SharedState {
    position: AtomicU32,
    /// `f32` bit pattern.
    velocity: AtomicU32,
}

impl SharedState {
    /// Position 0, velocity 0.0.
    pub const fn new() -> Self {
        Self {
            position: AtomicU32::new(0),
            // 0.0f32 is all-zero bits.
            velocity: AtomicU32::new(0),
        }
    }

    /// Current step counter.
    #[inline]
    pub fn position(&self) -> u32 {
        self.position.load(Ordering::Relaxed)
    }

    /// Current commanded velocity.
    #[inline]
    pub fn velocity(&self) -> RevPerSec {
        RevPerSec(f32::from_bits(self.velocity.load(Ordering::Relaxed)))
    }

    /// Hand out the single writer for each field.
    ///
    /// Taking `&mut self` guarantees only one pair of handles is alive at a time.
    pub fn split(&mut self) -> (ControlHandle<'_>, MotorHandle<'_>) {
        let shared: &SharedState = self;
        (ControlHandle { shared }, MotorHandle { shared })
    }
}

/// Control-context view: writes velocity, reads position.
#[derive(Debug)]
pub struct ControlHandle<'a> {
    shared: &'a SharedState,
}

impl ControlHandle<'_> {
    /// Publish a new velocity to the motor loop.
    #[inline]
    pub fn set_velocity(&self, velocity: RevPerSec) {
        self.shared
            .velocity
            .store(velocity.value().to_bits(), Ordering::Relaxed);
    }

    /// Last published velocity.
    #[inline]
    pub fn velocity(&self) -> RevPerSec {
        self.shared.velocity()
    }

    /// Step counter, for display only.
    #[inline]
    pub fn position(&self) -> u32 {
        self.shared.position()
    }
}

/// Motor-context view: reads velocity, writes position.
#[derive(Debug)]
pub struct MotorHandle<'a> {
    shared: &'a SharedState,
}

impl MotorHandle<'_> {
    /// Velocity as currently published by the control loop.
    #[inline]
    pub fn velocity(&self) -> RevPerSec {
        self.shared.velocity()
    }

    /// Step counter.
    #[inline]
    pub fn position(&self) -> u32 {
        self.shared.position()
    }

    /// Move the counter by one step, wrapping modulo 2^32.
    ///
    /// Load and store instead of `fetch_add`: this handle is the only writer, and
    /// plain loads/stores exist on cores without atomic read-modify-write.
    #[inline]
    pub fn advance(&self, direction: Direction) -> u32 {
        let next = match direction {
            Direction::Forward => self.position().wrapping_add(1),
            Direction::Reverse => self.position().wrapping_sub(1),
        };
        self.shared.position.store(next, Ordering::Relaxed);
        next
    }
}
