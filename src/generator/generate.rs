//! UUIDv7 generation logic
//!
//! Reserves a millisecond with a CAS retry loop, then encodes it

use std::sync::atomic::Ordering;

use tracing::trace;

use super::state::State;
use super::{unix_time_ms, Uuid7Generator};
use crate::codec::{self, MAX_UNIX_TS_MS};
use crate::error::Uuid7Error;
use crate::rand_source::RandSource;
use crate::Uuid;

impl<R: RandSource> Uuid7Generator<R> {
    /// Generate a new UUIDv7 at the current wall-clock time
    ///
    /// Fails only with [`Uuid7Error::DriftExceeded`], and only when the generator is configured
    /// to throw at its drift cap.
    #[inline]
    pub fn get_next(&self) -> Result<Uuid, Uuid7Error> {
        self.get_next_at(unix_time_ms())
    }

    /// Generate a new UUIDv7 treating `at_ms` as the current time
    ///
    /// The embedded timestamp is `at_ms` if that is later than every timestamp issued so far, or
    /// one millisecond past the last issued timestamp otherwise.
    ///
    /// # Panics
    ///
    /// Panics if `at_ms` is outside `0..=MAX_UNIX_TS_MS`. Once the generator has issued
    /// `MAX_UNIX_TS_MS` itself, later identifiers repeat that timestamp and differ only in their
    /// random bits.
    #[inline]
    pub fn get_next_at(&self, at_ms: i64) -> Result<Uuid, Uuid7Error> {
        assert_timestamp_in_range(at_ms);
        let reserved = self.reserve(at_ms)?;
        Ok(codec::encode(reserved, &self.rand))
    }

    /// Generate a new UUIDv7 ignoring the drift policy
    pub(crate) fn get_next_unbounded_at(&self, at_ms: i64) -> Uuid {
        assert_timestamp_in_range(at_ms);
        let reserved = loop {
            let current = self.load_state();
            let next = current.next_after(at_ms);
            if self.cas_state(current, State::new(next)) {
                break next;
            }
        };
        codec::encode(reserved, &self.rand)
    }

    /// Reserve a millisecond for exclusive use by the caller
    ///
    /// Returns the timestamp to embed. No state is changed on error.
    pub(crate) fn reserve(&self, at_ms: i64) -> Result<i64, Uuid7Error> {
        loop {
            let current = self.load_state();
            let mut next = current.next_after(at_ms);
            let mut stored = next;

            if let Some(max_drift_ms) = self.max_drift_ms() {
                let drift_ms = next - at_ms;
                if drift_ms > max_drift_ms {
                    if self.throws_on_drift_cap() {
                        return Err(Uuid7Error::DriftExceeded {
                            drift_ms,
                            max_drift_ms,
                        });
                    }
                    next = at_ms.saturating_add(max_drift_ms);
                    // state never moves backwards even when the clamp repeats a timestamp
                    stored = next.max(current.raw());
                    trace!(at_ms, next, max_drift_ms, "clamped reservation to drift cap");
                }
            }

            if self.cas_state(current, State::new(stored)) {
                return Ok(next);
            }
        }
    }

    /// Atomic compare-and-swap on state
    #[inline(always)]
    pub(crate) fn cas_state(&self, expected: State, new: State) -> bool {
        self.state
            .compare_exchange_weak(expected.raw(), new.raw(), Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }
}

#[inline(always)]
fn assert_timestamp_in_range(unix_ts_ms: i64) {
    assert!(
        (0..=MAX_UNIX_TS_MS).contains(&unix_ts_ms),
        "timestamp {unix_ts_ms} is outside the 48-bit UUIDv7 range"
    );
}
