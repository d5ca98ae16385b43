//! Random number sources feeding the random fields of a UUIDv7

use std::sync::{Mutex, PoisonError};

use rand::RngCore;

/// Number of random bytes drawn for each identifier
pub const RANDOM_BYTES: usize = 10;

/// A source of the random bits packed next to the timestamp.
///
/// The bits serve collision avoidance only; they need not be cryptographically secure, but must
/// not repeat at the rates a process generates identifiers. Sources are shared by reference across
/// threads, so implementations handle their own interior mutability.
pub trait RandSource {
    /// Fills `dest` with random bytes.
    fn fill_random(&self, dest: &mut [u8; RANDOM_BYTES]);
}

/// The default source, backed by the thread-local generator of the `rand` crate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThreadRandom;

impl RandSource for ThreadRandom {
    #[inline]
    fn fill_random(&self, dest: &mut [u8; RANDOM_BYTES]) {
        rand::rng().fill_bytes(dest);
    }
}

/// An adapter that shares any [`RngCore`] across threads behind a mutex.
///
/// Useful for reproducible output with a seeded RNG:
///
/// ```rust
/// use mono_uuid7::{SharedRng, Uuid7Generator};
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let g = Uuid7Generator::new().with_rand_source(SharedRng::new(StdRng::seed_from_u64(42)));
/// println!("{}", g.get_next().unwrap());
/// ```
#[derive(Debug, Default)]
pub struct SharedRng<R>(Mutex<R>);

impl<R: RngCore> SharedRng<R> {
    /// Wraps the given RNG.
    pub const fn new(rng: R) -> Self {
        Self(Mutex::new(rng))
    }

    /// Consumes the adapter, returning the wrapped RNG.
    pub fn into_inner(self) -> R {
        self.0.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<R: RngCore> RandSource for SharedRng<R> {
    fn fill_random(&self, dest: &mut [u8; RANDOM_BYTES]) {
        // RNG state stays usable after a panic elsewhere
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .fill_bytes(dest);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_thread_random_varies() {
        let mut a = [0u8; RANDOM_BYTES];
        let mut b = [0u8; RANDOM_BYTES];
        ThreadRandom.fill_random(&mut a);
        ThreadRandom.fill_random(&mut b);
        assert_ne!(a, b);
    }

    #[test]
    fn test_shared_rng_is_reproducible() {
        let first = SharedRng::new(StdRng::seed_from_u64(7));
        let second = SharedRng::new(StdRng::seed_from_u64(7));
        let mut a = [0u8; RANDOM_BYTES];
        let mut b = [0u8; RANDOM_BYTES];
        for _ in 0..4 {
            first.fill_random(&mut a);
            second.fill_random(&mut b);
            assert_eq!(a, b);
        }
    }
}
