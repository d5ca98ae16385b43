//! Drift cap tests: clamping and throwing

#[cfg(test)]
mod tests {
    use crate::tests::test_utils::{ts, FIXED_AT};
    use crate::*;

    fn clamping(max_drift_ms: i64) -> Uuid7Generator {
        let config = Uuid7Config::builder()
            .max_drift_ms(max_drift_ms)
            .unwrap()
            .build();
        Uuid7Generator::from_seed(FIXED_AT, config).unwrap()
    }

    fn throwing(max_drift_ms: i64) -> Uuid7Generator {
        let config = Uuid7Config::builder()
            .max_drift_ms(max_drift_ms)
            .unwrap()
            .throw_on_drift_cap(true)
            .build();
        Uuid7Generator::from_seed(FIXED_AT, config).unwrap()
    }

    #[test]
    fn test_clamp_bounds_drift() {
        let generator = clamping(10);
        for _ in 0..20 {
            let id = generator.get_next_at(FIXED_AT).unwrap();
            assert!(ts(&id) <= FIXED_AT + 10, "drifted to {}", ts(&id));
            assert!(ts(&id) > FIXED_AT);
        }
    }

    #[test]
    fn test_clamp_keeps_strict_steps_below_cap() {
        let generator = clamping(10);
        let stamps: Vec<i64> = (0..20)
            .map(|_| ts(&generator.get_next_at(FIXED_AT).unwrap()))
            .collect();

        let expected: Vec<i64> = (1..=10)
            .map(|i| FIXED_AT + i)
            .chain(std::iter::repeat(FIXED_AT + 10).take(10))
            .collect();
        assert_eq!(stamps, expected);
    }

    #[test]
    fn test_clamped_ids_remain_distinct() {
        let generator = clamping(0);
        let ids: Vec<Uuid> = (0..1_000)
            .map(|_| generator.get_next_at(FIXED_AT).unwrap())
            .collect();
        crate::tests::test_utils::assert_unique_ids(&ids, 1_000);
    }

    #[test]
    fn test_throw_raises_drift_exceeded() {
        let generator = throwing(5);
        let results: Vec<Result<Uuid, Uuid7Error>> =
            (0..20).map(|_| generator.get_next_at(FIXED_AT)).collect();

        assert!(results[..5].iter().all(Result::is_ok));
        assert_eq!(
            results[5],
            Err(Uuid7Error::DriftExceeded {
                drift_ms: 6,
                max_drift_ms: 5
            })
        );
        assert!(results[5..].iter().all(Result::is_err));
    }

    #[test]
    fn test_throw_leaves_state_unchanged() {
        let generator = throwing(5);
        for _ in 0..5 {
            generator.get_next_at(FIXED_AT).unwrap();
        }
        assert_eq!(generator.last_issued_unix_ms(), Some(FIXED_AT + 5));

        assert!(generator.get_next_at(FIXED_AT).is_err());
        assert_eq!(generator.last_issued_unix_ms(), Some(FIXED_AT + 5));

        // usable again once real time catches up
        let id = generator.get_next_at(FIXED_AT + 3).unwrap();
        assert_eq!(ts(&id), FIXED_AT + 6);
    }

    #[test]
    fn test_runtime_reconfiguration() {
        let generator = Uuid7Generator::from_seed(FIXED_AT, Uuid7Config::default()).unwrap();
        for _ in 0..10 {
            generator.get_next_at(FIXED_AT).unwrap();
        }

        generator.set_max_drift_ms(Some(5)).unwrap();
        generator.set_throw_on_drift_cap(true);
        assert!(matches!(
            generator.get_next_at(FIXED_AT),
            Err(Uuid7Error::DriftExceeded { max_drift_ms: 5, .. })
        ));

        generator.set_max_drift_ms(None).unwrap();
        let id = generator.get_next_at(FIXED_AT).unwrap();
        assert_eq!(ts(&id), FIXED_AT + 11);
    }

    #[test]
    fn test_negative_drift_rejected_at_runtime() {
        let generator = clamping(10);
        assert_eq!(
            generator.set_max_drift_ms(Some(-3)),
            Err(Uuid7Error::InvalidMaxDrift { max_drift_ms: -3 })
        );
        assert_eq!(generator.config().max_drift_ms(), Some(10));
    }

    #[test]
    fn test_no_drift_when_clock_is_ahead() {
        let generator = throwing(0);
        for i in 1..=50 {
            let id = generator.get_next_at(FIXED_AT + i).unwrap();
            assert_eq!(ts(&id), FIXED_AT + i);
        }
    }
}
