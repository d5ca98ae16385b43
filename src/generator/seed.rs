//! Seeding and the last-issued ratchet

use std::sync::atomic::Ordering;

use chrono::{DateTime, Utc};
use tracing::debug;

use super::Uuid7Generator;
use crate::codec::{self, MAX_UNIX_TS_MS};
use crate::error::Uuid7Error;
use crate::Uuid;

/// A starting point for a generator's sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Seed {
    /// A previously issued identifier; must be a UUIDv7
    Uuid(Uuid),
    /// A Unix timestamp in milliseconds; never rejected
    ///
    /// Values past `MAX_UNIX_TS_MS` are pinned to it. Negative values leave an unseeded
    /// generator unseeded and never move a seeded one.
    UnixMs(i64),
}

impl Seed {
    /// Timestamp this seed stands for
    pub fn unix_ms(&self) -> Result<i64, Uuid7Error> {
        match self {
            Seed::Uuid(id) => codec::try_extract_unix_ms(id).ok_or(Uuid7Error::InvalidSeed {
                version: id.version(),
            }),
            Seed::UnixMs(ms) => Ok((*ms).min(MAX_UNIX_TS_MS)),
        }
    }
}

impl From<Uuid> for Seed {
    fn from(id: Uuid) -> Self {
        Seed::Uuid(id)
    }
}

impl From<i64> for Seed {
    fn from(unix_ms: i64) -> Self {
        Seed::UnixMs(unix_ms)
    }
}

impl From<DateTime<Utc>> for Seed {
    fn from(dt: DateTime<Utc>) -> Self {
        Seed::UnixMs(dt.timestamp_millis())
    }
}

impl<R> Uuid7Generator<R> {
    /// Advance the last issued timestamp to at least the seed's timestamp
    ///
    /// Seeding with a time earlier than the last issued one changes nothing, so the sequence never
    /// regresses. Safe to call concurrently with generation. Fails with
    /// [`Uuid7Error::InvalidSeed`] for a non-v7 UUID, leaving the state untouched.
    pub fn initialize_from(&self, seed: impl Into<Seed>) -> Result<(), Uuid7Error> {
        let seed_ms = seed.into().unix_ms()?;
        let previous = self.state.fetch_max(seed_ms, Ordering::AcqRel);
        if seed_ms > previous {
            debug!(previous, seed_ms, "advanced generator to seed");
        }
        Ok(())
    }
}
