//! The 128-bit identifier value type

use std::{fmt, str};

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::codec;

/// Length of the 8-4-4-4-12 form
const CANONICAL_LEN: usize = 36;

/// Byte offsets of the hyphens in the 8-4-4-4-12 form
const HYPHENS: [usize; 4] = [8, 13, 18, 23];

/// Represents a Universally Unique IDentifier stored as a 16-byte big-endian array.
///
/// Values produced by this crate are UUIDv7, but any 128-bit value can be held, parsed and
/// inspected, so that foreign identifiers can be validated before they are used as seeds.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
pub struct Uuid([u8; 16]);

impl Uuid {
    /// Nil UUID (00000000-0000-0000-0000-000000000000)
    pub const NIL: Self = Self([0x00; 16]);

    /// Max UUID (ffffffff-ffff-ffff-ffff-ffffffffffff)
    pub const MAX: Self = Self([0xff; 16]);

    /// Creates a UUID from its 16-byte big-endian representation.
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    /// Returns a reference to the underlying byte array.
    pub const fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    /// Returns the 4-bit version field.
    #[inline(always)]
    pub const fn version(&self) -> u8 {
        self.0[6] >> 4
    }

    /// Returns the top two bits of the variant byte (`0b10` for RFC 9562 UUIDs).
    #[inline(always)]
    pub const fn variant_bits(&self) -> u8 {
        self.0[8] >> 6
    }

    /// Returns true if the version field equals 7.
    #[inline(always)]
    pub const fn is_version7(&self) -> bool {
        codec::is_version7(self)
    }

    /// Returns the embedded Unix timestamp in milliseconds, or `None` if this is not a UUIDv7.
    #[inline(always)]
    pub const fn unix_ts_ms(&self) -> Option<i64> {
        codec::try_extract_unix_ms(self)
    }

    /// Returns the embedded timestamp as a UTC date-time, or `None` if this is not a UUIDv7.
    pub fn datetime(&self) -> Option<DateTime<Utc>> {
        self.unix_ts_ms()
            .and_then(DateTime::<Utc>::from_timestamp_millis)
    }

    /// Writes the 8-4-4-4-12 lowercase hexadecimal form into a stack buffer.
    fn encode_hex(&self) -> [u8; 36] {
        const DIGITS: &[u8; 16] = b"0123456789abcdef";

        let mut buffer = [0u8; 36];
        let mut pos = 0;
        for (i, e) in self.0.iter().enumerate() {
            buffer[pos] = DIGITS[(e >> 4) as usize];
            buffer[pos + 1] = DIGITS[(e & 15) as usize];
            pos += 2;
            if i == 3 || i == 5 || i == 7 || i == 9 {
                buffer[pos] = b'-';
                pos += 1;
            }
        }
        buffer
    }
}

impl fmt::Display for Uuid {
    /// Returns the 8-4-4-4-12 canonical hexadecimal string representation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let buffer = self.encode_hex();
        f.write_str(str::from_utf8(&buffer).map_err(|_| fmt::Error)?)
    }
}

impl str::FromStr for Uuid {
    type Err = ParseError;

    /// Parses the 8-4-4-4-12 hexadecimal form, accepting either case.
    fn from_str(src: &str) -> Result<Self, Self::Err> {
        if src.len() != CANONICAL_LEN {
            return Err(ParseError::InvalidLength { len: src.len() });
        }

        let mut dst = [0u8; 16];
        let mut nibbles = 0;
        // indices are byte offsets; the first non-ASCII char is always rejected
        for (index, found) in src.char_indices() {
            if HYPHENS.contains(&index) {
                if found != '-' {
                    return Err(ParseError::InvalidCharacter {
                        found,
                        index,
                        expected: "'-'",
                    });
                }
                continue;
            }
            let digit = found.to_digit(16).ok_or(ParseError::InvalidCharacter {
                found,
                index,
                expected: "a hex digit",
            })? as u8;
            dst[nibbles / 2] |= if nibbles % 2 == 0 { digit << 4 } else { digit };
            nibbles += 1;
        }
        Ok(Self(dst))
    }
}

impl From<Uuid> for [u8; 16] {
    fn from(src: Uuid) -> Self {
        src.0
    }
}

impl From<[u8; 16]> for Uuid {
    fn from(src: [u8; 16]) -> Self {
        Self(src)
    }
}

impl From<Uuid> for u128 {
    fn from(src: Uuid) -> Self {
        Self::from_be_bytes(src.0)
    }
}

impl From<u128> for Uuid {
    fn from(src: u128) -> Self {
        Self(src.to_be_bytes())
    }
}

impl From<Uuid> for String {
    fn from(src: Uuid) -> Self {
        src.to_string()
    }
}

impl TryFrom<&str> for Uuid {
    type Error = ParseError;

    fn try_from(src: &str) -> Result<Self, Self::Error> {
        src.parse()
    }
}

impl AsRef<[u8]> for Uuid {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Error parsing a string that is not in the canonical 8-4-4-4-12 form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
pub enum ParseError {
    /// The string is not 36 bytes long
    #[error("UUID string is {len} bytes long. Expected 36 bytes")]
    InvalidLength { len: usize },

    /// A character is out of place
    #[error("Unexpected character {found:?} at byte {index}. Expected {expected}")]
    InvalidCharacter {
        found: char,
        index: usize,
        expected: &'static str,
    },
}

#[cfg(feature = "uuid")]
mod uuid_support {
    use super::Uuid;

    impl From<Uuid> for uuid::Uuid {
        fn from(src: Uuid) -> Self {
            uuid::Uuid::from_bytes(src.0)
        }
    }

    impl From<uuid::Uuid> for Uuid {
        fn from(src: uuid::Uuid) -> Self {
            Self(src.into_bytes())
        }
    }
}

#[cfg(feature = "serde")]
mod serde_support {
    use super::{fmt, Uuid};
    use serde::{de, Deserializer, Serializer};

    impl serde::Serialize for Uuid {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            if serializer.is_human_readable() {
                serializer.serialize_str(&self.to_string())
            } else {
                serializer.serialize_bytes(self.as_bytes())
            }
        }
    }

    impl<'de> serde::Deserialize<'de> for Uuid {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            if deserializer.is_human_readable() {
                deserializer.deserialize_str(UuidVisitor)
            } else {
                deserializer.deserialize_bytes(UuidVisitor)
            }
        }
    }

    struct UuidVisitor;

    impl<'de> de::Visitor<'de> for UuidVisitor {
        type Value = Uuid;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(formatter, "a UUID string or 16 bytes")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
            value.parse::<Self::Value>().map_err(de::Error::custom)
        }

        fn visit_bytes<E: de::Error>(self, value: &[u8]) -> Result<Self::Value, E> {
            <[u8; 16]>::try_from(value)
                .map(Self::Value::from)
                .map_err(|_| E::invalid_length(value.len(), &self))
        }
    }

}
