//! Time utilities for UUIDv7 generation
//!
//! Provides wall-clock time in milliseconds since the Unix epoch

use std::time::{SystemTime, UNIX_EPOCH};

/// Get current wall-clock time in milliseconds since Unix epoch
///
/// A clock set before the epoch reads as 0.
#[inline(always)]
pub fn unix_time_ms() -> i64 {
    millis_since_epoch(SystemTime::now())
}

#[inline(always)]
fn millis_since_epoch(now: SystemTime) -> i64 {
    now.duration_since(UNIX_EPOCH)
        .map_or(0, |d| i64::try_from(d.as_millis()).unwrap_or(i64::MAX))
}
