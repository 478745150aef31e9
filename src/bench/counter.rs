//! Cycle counter sources.

/// Monotonic cycle (or time) counter read around a timed loop.
///
/// [`Harness`](super::Harness) enables the counter once before any sample is taken and disables
/// it after the last one; only [`CycleCounter::read`] is called in between.
pub trait CycleCounter {
    /// Make the counter readable.
    fn enable(&mut self);

    /// Current counter value. Must be monotonic between `enable` and `disable`.
    fn read(&mut self) -> u64;

    /// Release the counter.
    fn disable(&mut self);
}

/// [`CycleCounter`] backed by [`std::time::Instant`], counting nanoseconds.
///
/// Used where no hardware cycle counter is reachable from user space.
#[cfg(feature = "std")]
#[derive(Clone, Copy, Debug)]
pub struct InstantCounter {
    origin: std::time::Instant,
}

#[cfg(feature = "std")]
impl InstantCounter {
    /// Create a counter whose origin is now.
    pub fn new() -> Self {
        Self {
            origin: std::time::Instant::now(),
        }
    }
}

#[cfg(feature = "std")]
impl Default for InstantCounter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "std")]
impl CycleCounter for InstantCounter {
    fn enable(&mut self) {
        self.origin = std::time::Instant::now();
    }

    #[inline]
    fn read(&mut self) -> u64 {
        u64::try_from(self.origin.elapsed().as_nanos()).unwrap_or(u64::MAX)
    }

    fn disable(&mut self) {}
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use super::{CycleCounter, InstantCounter};

    #[test]
    fn instant_counter_is_monotonic() {
        let mut counter = InstantCounter::new();
        counter.enable();
        let t0 = counter.read();
        let t1 = counter.read();
        assert!(t1 >= t0);
        counter.disable();
    }
}
