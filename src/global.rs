//! Process-wide default generator and entry point functions

use once_cell::sync::Lazy;

use crate::generator::unix_time_ms;
use crate::{Uuid, Uuid7Generator};

/// Shared by all threads of the process; carries no drift cap.
static GLOBAL_GENERATOR: Lazy<Uuid7Generator> = Lazy::new(Uuid7Generator::new);

/// Generates a UUIDv7 from the process-wide generator.
///
/// Identifiers from this function are strictly increasing across all threads of the process.
///
/// # Examples
///
/// ```rust
/// let a = mono_uuid7::uuid7();
/// let b = mono_uuid7::uuid7();
/// assert!(a < b);
/// println!("{a}"); // e.g., "01809424-3e59-7c05-9219-566f82fff672"
/// ```
pub fn uuid7() -> Uuid {
    uuid7_at(unix_time_ms())
}

/// Generates a UUIDv7 from the process-wide generator, treating `at_ms` as the current time.
///
/// # Panics
///
/// Panics if `at_ms` is outside the 48-bit timestamp range.
pub fn uuid7_at(at_ms: i64) -> Uuid {
    GLOBAL_GENERATOR.get_next_unbounded_at(at_ms)
}
