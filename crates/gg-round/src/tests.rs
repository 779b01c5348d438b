//! Unit tests for the round pipeline — these cover the end-to-end guess
//! scenarios the rest of the workspace only tests piecewise.

#[cfg(test)]
mod helpers {
    use gg_core::{GeoPoint, RegionId};
    use gg_region::{Region, RegionGeometry, Ring};

    /// The canonical 10° square with corners (lon, lat) at
    /// (0,0), (0,10), (10,10), (10,0).
    pub fn square_region() -> Region {
        let ring = Ring::new(vec![
            GeoPoint::new(0.0, 0.0),
            GeoPoint::new(10.0, 0.0),
            GeoPoint::new(10.0, 10.0),
            GeoPoint::new(0.0, 10.0),
        ]);
        Region::new(
            RegionId(0),
            "square",
            Some(RegionGeometry::Polygon(ring)),
            None,
        )
    }
}

#[cfg(test)]
mod evaluate {
    use gg_core::{GeoPoint, RegionId, SpherePoint};
    use gg_region::{Region, RegionGeometry, Ring};
    use gg_score::{ScoreConfig, score};

    use crate::context::RoundContext;
    use crate::error::RoundError;

    #[test]
    fn contained_guess_scores_max() {
        let region = super::helpers::square_region();
        let ctx = RoundContext::new(&region);

        let raw = SpherePoint::from_geo(GeoPoint::new(5.0, 5.0));
        let r = ctx.evaluate(raw).unwrap();

        assert!(r.is_contained);
        assert_eq!(r.distance_km, 0.0);
        assert_eq!(r.score, 1_000);
    }

    #[test]
    fn miss_measures_to_centroid() {
        let region = super::helpers::square_region();
        let ctx = RoundContext::new(&region);

        let r = ctx.evaluate_geo(GeoPoint::new(20.0, 20.0)).unwrap();
        assert!(!r.is_contained);
        // (20,20) to the ~(5,5) vertex centroid is ~2,300 km.
        assert!(
            (2_250.0..2_400.0).contains(&r.distance_km),
            "distance {}",
            r.distance_km
        );
        // Score is whatever the tier policy says for that distance.
        assert_eq!(r.score, score(false, r.distance_km, &ScoreConfig::default()));
        assert!(r.score > 0 && r.score < 500);
    }

    #[test]
    fn guess_in_second_landmass_is_contained() {
        let geometry = RegionGeometry::MultiPolygon(vec![
            Ring::new(vec![
                GeoPoint::new(0.0, 0.0),
                GeoPoint::new(0.0, 1.0),
                GeoPoint::new(1.0, 1.0),
                GeoPoint::new(1.0, 0.0),
            ]),
            Ring::new(vec![
                GeoPoint::new(40.0, 120.0),
                GeoPoint::new(40.0, 121.0),
                GeoPoint::new(41.0, 121.0),
                GeoPoint::new(41.0, 120.0),
            ]),
        ]);
        let region = Region::new(RegionId(0), "islands", Some(geometry), None);
        let ctx = RoundContext::new(&region);

        let r = ctx.evaluate_geo(GeoPoint::new(40.5, 120.5)).unwrap();
        assert!(r.is_contained);
        assert_eq!(r.score, 1_000);
    }

    #[test]
    fn missing_geometry_scores_by_fallback_distance() {
        let region = Region::new(
            RegionId(0),
            "bare",
            None,
            Some(GeoPoint::new(0.0, 0.0)),
        );
        let ctx = RoundContext::new(&region);

        // 1° of latitude off the fallback point.
        let r = ctx.evaluate_geo(GeoPoint::new(1.0, 0.0)).unwrap();
        assert!(!r.is_contained);
        assert_eq!(r.distance_km, 111.0);
        // 111 km is inside the perfect band.
        assert_eq!(r.score, 1_000);
    }

    #[test]
    fn no_location_is_fatal_for_the_round() {
        let region = Region::new(RegionId(9), "lost", None, None);
        let ctx = RoundContext::new(&region);

        let err = ctx.evaluate_geo(GeoPoint::new(0.0, 0.0)).unwrap_err();
        assert!(matches!(err, RoundError::NoKnownLocation(RegionId(9))));
    }

    #[test]
    fn raw_and_geo_paths_agree() {
        let region = super::helpers::square_region();
        let ctx = RoundContext::new(&region);

        let g = GeoPoint::new(20.0, 20.0);
        let via_raw = ctx.evaluate(SpherePoint::from_geo(g)).unwrap();
        let via_geo = ctx.evaluate_geo(g).unwrap();
        assert_eq!(via_raw, via_geo);
    }

    #[test]
    fn custom_score_config_is_honored() {
        let region = super::helpers::square_region();
        let cfg = ScoreConfig { max_score: 500, ..ScoreConfig::default() };
        let ctx = RoundContext::with_score_config(&region, cfg);

        let r = ctx.evaluate_geo(GeoPoint::new(5.0, 5.0)).unwrap();
        assert_eq!(r.score, 500);
    }
}

#[cfg(test)]
mod decay {
    use crate::decay::TimeDecay;

    #[test]
    fn full_value_inside_grace_window() {
        let d = TimeDecay::default();
        assert_eq!(d.factor(0), 1.0);
        assert_eq!(d.factor(10), 1.0);
        assert_eq!(d.apply(1_000, 5), 1_000);
    }

    #[test]
    fn linear_fade() {
        let d = TimeDecay::default();
        // Halfway through the 20 s fade: 1.0 → 0.25 gives 0.625.
        assert!((d.factor(20) - 0.625).abs() < 1e-12);
        assert_eq!(d.apply(1_000, 20), 625);
    }

    #[test]
    fn floor_beyond_fade() {
        let d = TimeDecay::default();
        assert_eq!(d.factor(30), 0.25);
        assert_eq!(d.factor(10_000), 0.25);
        assert_eq!(d.apply(1_000, 600), 250);
    }

    #[test]
    fn zero_fade_drops_straight_to_floor() {
        let d = TimeDecay { full_secs: 5, fade_secs: 0, floor: 0.5 };
        assert_eq!(d.factor(5), 1.0);
        assert_eq!(d.factor(6), 0.5);
    }
}
