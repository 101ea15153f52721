//! Monotonic microsecond time source.

/// A free-running microsecond counter.
///
/// Implement this over the MCU timer (for example the RP2040 64-bit timer) or use
/// [`StdClock`] on a host. The value must never go backwards; wrapping is
/// tolerated because every consumer uses wrapping subtraction.
pub trait Monotonic {
    /// Microseconds since an arbitrary fixed origin.
    fn now_us(&self) -> u64;

    /// Low 32 bits of [`now_us`](Monotonic::now_us), for the control loop.
    #[inline]
    fn now_us_32(&self) -> u32 {
        self.now_us() as u32
    }
}

impl<T: Monotonic + ?Sized> Monotonic for &T {
    #[inline]
    fn now_us(&self) -> u64 {
        (**self).now_us()
    }
}

/// Host clock backed by [`std::time::Instant`].
#[cfg(feature = "std")]
#[derive(Debug, Clone, Copy)]
pub struct StdClock {
    origin: std::time::Instant,
}

#[cfg(feature = "std")]
impl StdClock {
    /// Clock starting at zero now.
    pub fn new() -> Self {
        Self {
            origin: std::time::Instant::now(),
        }
    }
}

#[cfg(feature = "std")]
impl Default for StdClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "std")]
impl Monotonic for StdClock {
    fn now_us(&self) -> u64 {
        self.origin.elapsed().as_micros() as u64
    }
}
