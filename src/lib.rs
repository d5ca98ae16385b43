//! # mono-uuid7
//!
//! Time-ordered UUID version 7 identifiers (RFC 9562) with strict per-generator monotonicity.
//!
//! Identifiers from one [`Uuid7Generator`] are:
//! - 📈 Time-sorted: the 48-bit Unix millisecond timestamp leads the value
//! - 🔄 Strictly monotonic, even many per millisecond
//! - 🔒 Lock-free and thread-safe
//!
//! ```rust
//! use mono_uuid7::Uuid7Generator;
//!
//! let g = Uuid7Generator::new();
//! let a = g.get_next()?;
//! let b = g.get_next()?;
//! assert!(a.unix_ts_ms() < b.unix_ts_ms());
//! # Ok::<(), mono_uuid7::Uuid7Error>(())
//! ```
//!
//! When requests outpace the clock, each identifier takes the millisecond after the last one, so
//! the embedded timestamps may run ahead of real time. [`Uuid7Config`] can cap that drift.

#![forbid(unsafe_code)]

pub mod codec;
mod config;
mod error;
mod generator;
mod global;
mod id;
mod rand_source;

#[cfg(test)]
pub mod tests;

// Re-export main types
pub use config::{Uuid7Config, Uuid7ConfigBuilder};
pub use error::Uuid7Error;
pub use generator::{Seed, Uuid7Generator};
pub use global::{uuid7, uuid7_at};
pub use id::{ParseError, Uuid};
pub use rand_source::{RandSource, SharedRng, ThreadRandom, RANDOM_BYTES};
