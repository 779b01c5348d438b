//! Unit tests for the scoring policy.

#[cfg(test)]
mod tiers {
    use crate::{ScoreConfig, score};

    #[test]
    fn contained_always_maxes() {
        let cfg = ScoreConfig::default();
        assert_eq!(score(true, 0.0, &cfg), 1_000);
        // Distance is ignored when contained.
        assert_eq!(score(true, 12_000.0, &cfg), 1_000);
    }

    #[test]
    fn perfect_band() {
        let cfg = ScoreConfig::default();
        assert_eq!(score(false, 0.0, &cfg), 1_000);
        assert_eq!(score(false, 150.0, &cfg), 1_000);
    }

    #[test]
    fn good_band_endpoints() {
        let cfg = ScoreConfig::default();
        // Just past perfect: just under max.
        let near = score(false, 151.0, &cfg);
        assert!(near < 1_000 && near > 990, "got {near}");
        // At the good edge: exactly the floor.
        assert_eq!(score(false, 1_000.0, &cfg), 500);
        // Midpoint of the band: halfway between max and floor.
        assert_eq!(score(false, 575.0, &cfg), 750);
    }

    #[test]
    fn far_band_endpoints() {
        let cfg = ScoreConfig::default();
        assert_eq!(score(false, 2_000.0, &cfg), 250);
        assert_eq!(score(false, 3_000.0, &cfg), 0);
    }

    #[test]
    fn beyond_far_is_zero() {
        let cfg = ScoreConfig::default();
        assert_eq!(score(false, 3_001.0, &cfg), 0);
        assert_eq!(score(false, 20_000.0, &cfg), 0);
    }

    #[test]
    fn non_increasing_in_distance() {
        let cfg = ScoreConfig::default();
        let mut prev = u32::MAX;
        for km in (0..=4_000).step_by(25) {
            let s = score(false, km as f64, &cfg);
            assert!(s <= prev, "score rose at {km} km: {s} > {prev}");
            prev = s;
        }
    }

    #[test]
    fn custom_thresholds() {
        let cfg = ScoreConfig {
            max_score: 100,
            perfect_km: 10.0,
            good_km: 20.0,
            far_km: 40.0,
            good_floor: 50,
        };
        assert_eq!(score(false, 10.0, &cfg), 100);
        assert_eq!(score(false, 15.0, &cfg), 75);
        assert_eq!(score(false, 30.0, &cfg), 25);
        assert_eq!(score(false, 41.0, &cfg), 0);
    }
}

#[cfg(test)]
mod result {
    use crate::{GuessResult, ScoreConfig};

    #[test]
    fn contained_result() {
        let r = GuessResult::contained(&ScoreConfig::default());
        assert!(r.is_contained);
        assert_eq!(r.distance_km, 0.0);
        assert_eq!(r.score, 1_000);
    }

    #[test]
    fn missed_result() {
        let r = GuessResult::missed(2_000.0, &ScoreConfig::default());
        assert!(!r.is_contained);
        assert_eq!(r.distance_km, 2_000.0);
        assert_eq!(r.score, 250);
    }
}
