//! # Proximity Filter
//!
//! Keeps the candidates within a radius of an origin and annotates each
//! with its haversine distance.
//!
//! ## Invariants
//!
//! - Inclusive boundary: `distance <= radius_km` is kept
//! - Stable: retained records keep their input order (the event store
//!   already sorts newest first; nothing is re-sorted by distance)
//! - The boundary test uses the exact distance; only the attached value is
//!   rounded to one decimal
//!
//! ## Input validation
//!
//! None. Out-of-range coordinates produce a computed distance rather than
//! an error. A negative radius retains nothing, and a NaN anywhere never
//! compares `<=`, so it retains nothing either. A zero radius keeps only
//! bit-identical coordinates.

use shared_types::{distance_km, round_to_tenth, Coordinate};

use super::entities::{Located, WithDistance};

/// Filter `candidates` to those within `radius_km` of `origin`.
pub fn filter_by_radius<T, I>(origin: Coordinate, radius_km: f64, candidates: I) -> Vec<WithDistance<T>>
where
    T: Located,
    I: IntoIterator<Item = T>,
{
    candidates
        .into_iter()
        .filter_map(|record| {
            let distance = distance_km(origin, record.coordinate());
            (distance <= radius_km).then(|| WithDistance {
                record,
                distance: round_to_tenth(distance),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const MOSCOW: Coordinate = Coordinate::new(55.7558, 37.6173);
    const ST_PETERSBURG: Coordinate = Coordinate::new(59.9343, 30.3351);

    /// Minimal located record for order checks.
    #[derive(Debug, Clone, PartialEq)]
    struct Pin {
        name: &'static str,
        at: Coordinate,
    }

    impl Located for Pin {
        fn coordinate(&self) -> Coordinate {
            self.at
        }
    }

    fn pin(name: &'static str, latitude: f64, longitude: f64) -> Pin {
        Pin {
            name,
            at: Coordinate::new(latitude, longitude),
        }
    }

    #[test]
    fn test_same_point_kept_with_zero_distance() {
        for radius in [0.0, 1.0, 59.0] {
            let result = filter_by_radius(MOSCOW, radius, vec![MOSCOW]);
            assert_eq!(result.len(), 1, "radius {radius}");
            assert_eq!(result[0].distance, 0.0);
        }
    }

    #[test]
    fn test_st_petersburg_excluded_at_city_radius() {
        let result = filter_by_radius(MOSCOW, 59.0, vec![ST_PETERSBURG]);
        assert!(result.is_empty());
    }

    #[test]
    fn test_st_petersburg_included_at_wide_radius() {
        let result = filter_by_radius(MOSCOW, 700.0, vec![ST_PETERSBURG]);
        assert_eq!(result.len(), 1);
        assert!((result[0].distance - 635.0).abs() <= 5.0, "got {}", result[0].distance);
    }

    #[test]
    fn test_negative_radius_is_empty() {
        let candidates = vec![MOSCOW, ST_PETERSBURG, Coordinate::new(0.0, 0.0)];
        assert!(filter_by_radius(MOSCOW, -1.0, candidates).is_empty());
    }

    #[test]
    fn test_empty_candidates() {
        let result: Vec<WithDistance<Coordinate>> = filter_by_radius(MOSCOW, 100.0, Vec::new());
        assert!(result.is_empty());
    }

    #[test]
    fn test_order_preserved() {
        let candidates = vec![
            pin("c1", 55.7600, 37.6200),
            pin("c2", 59.9343, 30.3351),
            pin("c3", 55.8000, 37.7000),
        ];

        let names: Vec<_> = filter_by_radius(MOSCOW, 59.0, candidates)
            .into_iter()
            .map(|kept| kept.record.name)
            .collect();

        assert_eq!(names, vec!["c1", "c3"]);
    }

    #[test]
    fn test_not_resorted_by_distance() {
        let candidates = vec![pin("far", 55.8000, 37.7000), pin("near", 55.7600, 37.6200)];

        let result = filter_by_radius(MOSCOW, 59.0, candidates);
        assert_eq!(result[0].record.name, "far");
        assert_eq!(result[0].distance, 7.1);
        assert_eq!(result[1].record.name, "near");
        assert_eq!(result[1].distance, 0.5);
    }

    #[test]
    fn test_boundary_uses_unrounded_distance() {
        // ~0.497 km away: rounds to 0.5 but is still outside a 0.49 km radius.
        let candidate = Coordinate::new(55.7600, 37.6200);
        assert!(filter_by_radius(MOSCOW, 0.49, vec![candidate]).is_empty());
        assert_eq!(filter_by_radius(MOSCOW, 0.5, vec![candidate])[0].distance, 0.5);
    }

    #[test]
    fn test_inclusive_boundary() {
        let exact = distance_km(MOSCOW, ST_PETERSBURG);
        assert_eq!(filter_by_radius(MOSCOW, exact, vec![ST_PETERSBURG]).len(), 1);
    }

    #[test]
    fn test_nan_never_matches() {
        assert!(filter_by_radius(MOSCOW, f64::NAN, vec![MOSCOW]).is_empty());
        let garbage = Coordinate::new(f64::NAN, 37.0);
        assert!(filter_by_radius(MOSCOW, 10_000.0, vec![garbage]).is_empty());
    }

    #[test]
    fn test_out_of_range_coordinates_are_not_rejected() {
        let garbage = Coordinate::new(95.0, 400.0);
        let result = filter_by_radius(MOSCOW, 20_100.0, vec![garbage]);
        assert_eq!(result.len(), 1);
        assert!(result[0].distance.is_finite());
    }

    proptest! {
        #[test]
        fn prop_negative_radius_always_empty(
            radius in -1.0e6f64..-1.0e-9,
            lat in -90.0f64..90.0,
            lon in -180.0f64..180.0,
        ) {
            prop_assert!(filter_by_radius(MOSCOW, radius, vec![Coordinate::new(lat, lon)]).is_empty());
        }

        #[test]
        fn prop_origin_always_kept(
            radius in 0.0f64..1.0e4,
            lat in -90.0f64..90.0,
            lon in -180.0f64..180.0,
        ) {
            let origin = Coordinate::new(lat, lon);
            let result = filter_by_radius(origin, radius, vec![origin]);
            prop_assert_eq!(result.len(), 1);
            prop_assert_eq!(result[0].distance, 0.0);
        }
    }
}
