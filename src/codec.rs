//! Bit-level UUIDv7 codec
//!
//! Layout (RFC 9562), most significant bit first:
//!
//! ```text
//!  0                   1                   2                   3
//!  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                          unix_ts_ms                           |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |          unix_ts_ms           |  ver  |        rand_a         |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |var|                        rand_b                             |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                            rand_b                             |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! ```

use crate::rand_source::{RandSource, RANDOM_BYTES};
use crate::Uuid;

/// Largest timestamp representable in the 48-bit `unix_ts_ms` field
pub const MAX_UNIX_TS_MS: i64 = (1 << 48) - 1;

/// Version nibble of UUIDv7
pub const VERSION_7: u8 = 7;

/// Creates a UUIDv7 from `unix_ts_ms`, drawing the random fields from `rand`.
///
/// # Panics
///
/// Panics if `unix_ts_ms` is outside `0..=MAX_UNIX_TS_MS`.
#[inline]
pub fn encode<S: RandSource + ?Sized>(unix_ts_ms: i64, rand: &S) -> Uuid {
    let mut random = [0u8; RANDOM_BYTES];
    rand.fill_random(&mut random);
    encode_with_random(unix_ts_ms, random)
}

/// Creates a UUIDv7 from `unix_ts_ms` and caller-supplied random bytes.
///
/// The low nibble of `random[0]` and `random[1]` form the 12-bit `rand_a` field; `random[2..]`
/// fill `rand_b`, with the top two bits of `random[2]` replaced by the variant.
///
/// # Panics
///
/// Panics if `unix_ts_ms` is outside `0..=MAX_UNIX_TS_MS`.
pub const fn encode_with_random(unix_ts_ms: i64, random: [u8; RANDOM_BYTES]) -> Uuid {
    if unix_ts_ms < 0 || unix_ts_ms > MAX_UNIX_TS_MS {
        panic!("`unix_ts_ms` must be a 48-bit unsigned integer");
    }
    let ts = unix_ts_ms as u64;

    Uuid::from_bytes([
        (ts >> 40) as u8,
        (ts >> 32) as u8,
        (ts >> 24) as u8,
        (ts >> 16) as u8,
        (ts >> 8) as u8,
        ts as u8,
        (VERSION_7 << 4) | (random[0] & 0x0f),
        random[1],
        0x80 | (random[2] & 0x3f),
        random[3],
        random[4],
        random[5],
        random[6],
        random[7],
        random[8],
        random[9],
    ])
}

/// Returns true if the version field of `id` equals 7. The variant field is not examined.
#[inline(always)]
pub const fn is_version7(id: &Uuid) -> bool {
    id.version() == VERSION_7
}

/// Returns the 48-bit `unix_ts_ms` field of `id` if it is a UUIDv7, or `None` otherwise.
#[inline]
pub const fn try_extract_unix_ms(id: &Uuid) -> Option<i64> {
    if !is_version7(id) {
        return None;
    }
    let b = id.as_bytes();
    let ts = ((b[0] as u64) << 40)
        | ((b[1] as u64) << 32)
        | ((b[2] as u64) << 24)
        | ((b[3] as u64) << 16)
        | ((b[4] as u64) << 8)
        | (b[5] as u64);
    Some(ts as i64)
}
