//! Configuration for the UUIDv7 generator

mod builder;

pub use builder::Uuid7ConfigBuilder;
use builder::{DEFAULT_MAX_DRIFT_MS, DEFAULT_THROW_ON_DRIFT_CAP};

use crate::error::Uuid7Error;

/// Drift policy of a [`Uuid7Generator`](crate::Uuid7Generator)
///
/// When identifiers are requested faster than one per millisecond, the generator reserves
/// timestamps ahead of the clock. `max_drift_ms` caps how far ahead it may run; at the cap the
/// generator either clamps the timestamp or, with `throw_on_drift_cap`, fails the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Uuid7Config {
    max_drift_ms: Option<i64>,
    throw_on_drift_cap: bool,
}

impl Uuid7Config {
    pub(crate) const fn new(max_drift_ms: Option<i64>, throw_on_drift_cap: bool) -> Self {
        Self {
            max_drift_ms,
            throw_on_drift_cap,
        }
    }

    /// Create config from builder
    pub(crate) fn from_builder(b: Uuid7ConfigBuilder) -> Self {
        Self::new(b.max_drift_ms, b.throw_on_drift_cap)
    }

    /// Create a new configuration builder
    pub fn builder() -> Uuid7ConfigBuilder {
        Uuid7ConfigBuilder::new()
    }

    #[inline(always)]
    pub const fn max_drift_ms(&self) -> Option<i64> {
        self.max_drift_ms
    }

    #[inline(always)]
    pub const fn throw_on_drift_cap(&self) -> bool {
        self.throw_on_drift_cap
    }

    /// Check a drift cap before it is stored
    pub(crate) fn validate_max_drift(max_drift_ms: Option<i64>) -> Result<(), Uuid7Error> {
        match max_drift_ms {
            Some(ms) if ms < 0 => Err(Uuid7Error::InvalidMaxDrift { max_drift_ms: ms }),
            _ => Ok(()),
        }
    }
}

impl Default for Uuid7Config {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DRIFT_MS, DEFAULT_THROW_ON_DRIFT_CAP)
    }
}
