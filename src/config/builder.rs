//! Uuid7Config builder for constructing configuration

use super::Uuid7Config;
use crate::error::Uuid7Error;

/// Default configuration values
pub(super) const DEFAULT_MAX_DRIFT_MS: Option<i64> = None;
pub(super) const DEFAULT_THROW_ON_DRIFT_CAP: bool = false;

/// Builder for Uuid7Config
#[derive(Debug)]
pub struct Uuid7ConfigBuilder {
    pub(super) max_drift_ms: Option<i64>,
    pub(super) throw_on_drift_cap: bool,
}

impl Uuid7ConfigBuilder {
    /// Create a new Uuid7ConfigBuilder with default values
    pub fn new() -> Self {
        Self {
            max_drift_ms: DEFAULT_MAX_DRIFT_MS,
            throw_on_drift_cap: DEFAULT_THROW_ON_DRIFT_CAP,
        }
    }

    /// Cap how far (in ms) reserved timestamps may run ahead of the supplied time
    pub fn max_drift_ms(mut self, max_drift_ms: i64) -> Result<Self, Uuid7Error> {
        Uuid7Config::validate_max_drift(Some(max_drift_ms))?;
        self.max_drift_ms = Some(max_drift_ms);
        Ok(self)
    }

    /// Remove the drift cap
    pub const fn unbounded_drift(mut self) -> Self {
        self.max_drift_ms = None;
        self
    }

    /// Fail with `DriftExceeded` at the cap instead of clamping
    pub const fn throw_on_drift_cap(mut self, throw: bool) -> Self {
        self.throw_on_drift_cap = throw;
        self
    }

    /// Build the final Uuid7Config
    pub fn build(self) -> Uuid7Config {
        Uuid7Config::from_builder(self)
    }
}

impl Default for Uuid7ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
