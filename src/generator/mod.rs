//! Core UUIDv7 generator implementation
//!
//! Split into modules for testability:
//! - `state` - Last-issued timestamp packed for lock-free CAS
//! - `time` - Wall-clock time utilities
//! - `seed` - Seeding and the ratchet
//! - `generate` - Timestamp reservation and drift policy

mod generate;
mod seed;
mod state;
mod time;

use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};

use tracing::debug;

use crate::config::Uuid7Config;
use crate::error::Uuid7Error;
use crate::rand_source::{RandSource, ThreadRandom};

pub use seed::Seed;
use state::State;
pub(crate) use time::unix_time_ms;

/// Stored in `max_drift_ms` when no drift cap is configured
const NO_DRIFT_CAP: i64 = -1;

/// Lock-free UUIDv7 generator with cache-line alignment
///
/// Every identifier issued by one instance carries a timestamp strictly greater than all
/// identifiers it issued before, including under concurrent use from many threads. Requests
/// arriving faster than one per millisecond are served from a virtual clock that runs ahead of
/// the wall clock by one millisecond per identifier; [`Uuid7Config`] bounds that drift.
///
/// # Examples
///
/// ```rust
/// use mono_uuid7::Uuid7Generator;
/// use std::{sync::Arc, thread};
///
/// let g = Arc::new(Uuid7Generator::new());
/// let handles: Vec<_> = (0..4)
///     .map(|_| {
///         let g = Arc::clone(&g);
///         thread::spawn(move || g.get_next().unwrap())
///     })
///     .collect();
/// for h in handles {
///     println!("{}", h.join().unwrap());
/// }
/// ```
#[derive(Debug)]
#[repr(align(64))]
pub struct Uuid7Generator<R = ThreadRandom> {
    // === Hot path fields ===
    pub(crate) state: AtomicI64,
    max_drift_ms: AtomicI64,
    throw_on_drift_cap: AtomicBool,

    // === Cold path fields ===
    rand: R,
}

impl Uuid7Generator {
    /// Create a generator seeded from the wall clock, with default configuration
    pub fn new() -> Self {
        Self::with_config(Uuid7Config::default())
    }

    /// Create a generator seeded from the wall clock, with custom configuration
    pub fn with_config(config: Uuid7Config) -> Self {
        let generator = Self::unseeded(config);
        generator.state.store(unix_time_ms(), Ordering::Release);
        debug!(
            last_issued_ms = generator.state.load(Ordering::Relaxed),
            max_drift_ms = ?config.max_drift_ms(),
            throw_on_drift_cap = config.throw_on_drift_cap(),
            "created UUIDv7 generator seeded from wall clock"
        );
        generator
    }

    /// Create a generator seeded from a UUIDv7 or a Unix timestamp in milliseconds
    ///
    /// Fails with [`Uuid7Error::InvalidSeed`] if the seed is a UUID of another version.
    pub fn from_seed(seed: impl Into<Seed>, config: Uuid7Config) -> Result<Self, Uuid7Error> {
        let seed_ms = seed.into().unix_ms()?;
        let generator = Self::unseeded(config);
        generator.state.store(seed_ms, Ordering::Release);
        debug!(
            last_issued_ms = seed_ms,
            max_drift_ms = ?config.max_drift_ms(),
            throw_on_drift_cap = config.throw_on_drift_cap(),
            "created UUIDv7 generator from seed"
        );
        Ok(generator)
    }

    /// Create a generator that has neither issued nor been seeded
    pub(crate) fn unseeded(config: Uuid7Config) -> Self {
        Self {
            state: AtomicI64::new(State::UNSET),
            max_drift_ms: AtomicI64::new(config.max_drift_ms().unwrap_or(NO_DRIFT_CAP)),
            throw_on_drift_cap: AtomicBool::new(config.throw_on_drift_cap()),
            rand: ThreadRandom,
        }
    }
}

impl Default for Uuid7Generator {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> Uuid7Generator<R> {
    /// Replace the random source, keeping state and configuration
    pub fn with_rand_source<S: RandSource>(self, rand: S) -> Uuid7Generator<S> {
        Uuid7Generator {
            state: self.state,
            max_drift_ms: self.max_drift_ms,
            throw_on_drift_cap: self.throw_on_drift_cap,
            rand,
        }
    }

    /// Last reserved or seeded timestamp, or `None` while unseeded
    #[inline]
    pub fn last_issued_unix_ms(&self) -> Option<i64> {
        self.load_state().last_ms()
    }

    /// Snapshot of the current drift policy
    pub fn config(&self) -> Uuid7Config {
        Uuid7Config::new(self.max_drift_ms(), self.throws_on_drift_cap())
    }

    /// Change the drift cap; `None` removes it
    ///
    /// Takes effect for reservations that start after the store becomes visible.
    pub fn set_max_drift_ms(&self, max_drift_ms: Option<i64>) -> Result<(), Uuid7Error> {
        Uuid7Config::validate_max_drift(max_drift_ms)?;
        self.max_drift_ms
            .store(max_drift_ms.unwrap_or(NO_DRIFT_CAP), Ordering::Relaxed);
        Ok(())
    }

    /// Choose between failing (`true`) and clamping (`false`) at the drift cap
    pub fn set_throw_on_drift_cap(&self, throw: bool) {
        self.throw_on_drift_cap.store(throw, Ordering::Relaxed);
    }

    #[inline(always)]
    pub(crate) fn load_state(&self) -> State {
        State::from_raw(self.state.load(Ordering::Acquire))
    }

    #[inline(always)]
    pub(crate) fn max_drift_ms(&self) -> Option<i64> {
        match self.max_drift_ms.load(Ordering::Relaxed) {
            NO_DRIFT_CAP => None,
            ms => Some(ms),
        }
    }

    #[inline(always)]
    pub(crate) fn throws_on_drift_cap(&self) -> bool {
        self.throw_on_drift_cap.load(Ordering::Relaxed)
    }
}
