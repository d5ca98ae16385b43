//! Last-issued timestamp state
//!
//! A single `i64` holding the most recently reserved (or seeded) millisecond, so that every
//! reservation is one lock-free CAS

use crate::codec::MAX_UNIX_TS_MS;

/// Snapshot of the generator state: last reserved millisecond, or `UNSET`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct State(i64);

impl State {
    /// Sentinel for a generator that has neither issued nor been seeded
    pub const UNSET: i64 = -1;

    /// Create state from a reserved millisecond
    #[inline(always)]
    pub const fn new(unix_ts_ms: i64) -> Self {
        Self(unix_ts_ms)
    }

    /// Last reserved millisecond, or `None` while unseeded
    #[inline(always)]
    pub const fn last_ms(self) -> Option<i64> {
        if self.0 > Self::UNSET {
            Some(self.0)
        } else {
            None
        }
    }

    /// Smallest millisecond strictly after this state that is not before `at_ms`
    ///
    /// Pinned to `MAX_UNIX_TS_MS` once the 48-bit range is used up.
    #[inline(always)]
    pub const fn next_after(self, at_ms: i64) -> i64 {
        let next = if at_ms > self.0 {
            at_ms
        } else {
            self.0.saturating_add(1)
        };
        if next > MAX_UNIX_TS_MS {
            MAX_UNIX_TS_MS
        } else {
            next
        }
    }

    /// Get raw i64 value for atomic operations
    #[inline(always)]
    pub const fn raw(self) -> i64 {
        self.0
    }

    /// Create state from raw i64 value
    #[inline(always)]
    pub const fn from_raw(raw: i64) -> Self {
        Self(raw)
    }
}
