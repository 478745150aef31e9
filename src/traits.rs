//! Traits provided by this crate

#[cfg(feature = "rand_core")]
use rand_core::RngCore;

/// Random number generation support.
#[cfg(feature = "rand_core")]
pub trait Random: Sized {
    /// Generate a random value.
    ///
    /// Benchmark and test operands only need uniformly distributed bits, so any [`RngCore`] will
    /// do; callers who need unpredictability should pass a CSPRNG.
    fn random<R: RngCore + ?Sized>(rng: &mut R) -> Self;
}
