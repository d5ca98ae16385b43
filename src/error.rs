use thiserror::Error;

/// Represents errors that can occur during UUIDv7 generator operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Uuid7Error {
    /// Error when a seed identifier is not a version 7 UUID
    #[error("Seed UUID has version {version}, expected version 7")]
    InvalidSeed { version: u8 },
    /// Error when the reserved timestamp would run too far ahead of the supplied time
    #[error("Reserved timestamp would drift {drift_ms} ms ahead of now. Maximum allowed drift is {max_drift_ms} ms")]
    DriftExceeded { drift_ms: i64, max_drift_ms: i64 },
    /// Error when a negative drift cap is configured
    #[error("Maximum drift {max_drift_ms} ms is invalid. Drift cap must not be negative")]
    InvalidMaxDrift { max_drift_ms: i64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let invalid_seed = Uuid7Error::InvalidSeed { version: 4 };
        assert_eq!(
            invalid_seed.to_string(),
            "Seed UUID has version 4, expected version 7"
        );

        let drift = Uuid7Error::DriftExceeded {
            drift_ms: 6,
            max_drift_ms: 5,
        };
        assert_eq!(
            drift.to_string(),
            "Reserved timestamp would drift 6 ms ahead of now. Maximum allowed drift is 5 ms"
        );

        let invalid_drift = Uuid7Error::InvalidMaxDrift { max_drift_ms: -1 };
        assert_eq!(
            invalid_drift.to_string(),
            "Maximum drift -1 ms is invalid. Drift cap must not be negative"
        );
    }

    #[test]
    fn test_error_debug() {
        let invalid_seed = Uuid7Error::InvalidSeed { version: 0 };
        assert!(format!("{:?}", invalid_seed).contains("InvalidSeed"));
    }

    #[test]
    fn test_error_clone() {
        let original = Uuid7Error::DriftExceeded {
            drift_ms: 11,
            max_drift_ms: 10,
        };
        let cloned = original.clone();
        assert_eq!(original, cloned);
    }
}
