//! Duration and cost from distance and transport mode.

use crate::domain::TransportMode;

/// Travel time in minutes: `distance / speed * 60`.
///
/// # Examples
///
/// ```
/// use trip_planner::domain::TransportMode;
/// use trip_planner::estimate::estimate_duration;
///
/// assert_eq!(estimate_duration(100.0, TransportMode::Car), 100.0);
/// assert_eq!(estimate_duration(10.0, TransportMode::Walking), 120.0);
/// ```
pub fn estimate_duration(distance_km: f64, mode: TransportMode) -> f64 {
    distance_km / mode.speed_kmh() * 60.0
}

/// Largest distance the estimators accept from callers. Below it every
/// cost is an exact integer in both `f64` and `u64`.
pub const MAX_DISTANCE_KM: f64 = 1.0e12;

/// Cost in whole currency units: `round(distance * rate)`.
///
/// Negative distances are treated as zero. Exact up to [`MAX_DISTANCE_KM`].
pub fn estimate_cost(distance_km: f64, mode: TransportMode) -> u64 {
    (distance_km.max(0.0) * mode.cost_per_km()).round() as u64
}

/// Render a duration for display: `"42 min"` below an hour, `"2h 5m"` above.
///
/// Minutes are rounded before splitting, so 119.7 renders as `"2h 0m"`
/// rather than `"1h 60m"`.
pub fn format_duration(minutes: f64) -> String {
    let total = minutes.max(0.0).round() as u64;
    if total < 60 {
        format!("{total} min")
    } else {
        format!("{}h {}m", total / 60, total % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hundred_km_by_car() {
        assert_eq!(estimate_duration(100.0, TransportMode::Car), 100.0);
        assert_eq!(estimate_cost(100.0, TransportMode::Car), 350);
    }

    #[test]
    fn zero_distance_is_free_and_instant() {
        for mode in TransportMode::ALL {
            assert_eq!(estimate_duration(0.0, mode), 0.0);
            assert_eq!(estimate_cost(0.0, mode), 0);
        }
    }

    #[test]
    fn walking_is_free() {
        assert_eq!(estimate_cost(42.0, TransportMode::Walking), 0);
    }

    #[test]
    fn cost_rounds_to_nearest_unit() {
        // 10.1 * 1.2 = 12.12
        assert_eq!(estimate_cost(10.1, TransportMode::Train), 12);
        // 3 * 0.5 = 1.5
        assert_eq!(estimate_cost(3.0, TransportMode::Bicycle), 2);
        // 0.1 * 3.5 = 0.35
        assert_eq!(estimate_cost(0.1, TransportMode::Car), 0);
    }

    #[test]
    fn cost_beyond_u32_range() {
        assert_eq!(estimate_cost(2.0e9, TransportMode::Car), 7_000_000_000);
        assert_eq!(
            estimate_cost(MAX_DISTANCE_KM, TransportMode::Car),
            3_500_000_000_000
        );
    }

    #[test]
    fn duration_per_mode() {
        assert_eq!(estimate_duration(40.0, TransportMode::Bicycle), 120.0);
        assert_eq!(estimate_duration(80.0, TransportMode::Train), 60.0);
        assert_eq!(estimate_duration(25.0, TransportMode::Bus), 30.0);
    }

    #[test]
    fn format_short_durations() {
        assert_eq!(format_duration(0.0), "0 min");
        assert_eq!(format_duration(42.4), "42 min");
        assert_eq!(format_duration(59.4), "59 min");
    }

    #[test]
    fn format_long_durations() {
        assert_eq!(format_duration(60.0), "1h 0m");
        assert_eq!(format_duration(125.0), "2h 5m");
        assert_eq!(format_duration(119.7), "2h 0m");
        assert_eq!(format_duration(59.6), "1h 0m");
    }

    #[test]
    fn format_negative_clamps() {
        assert_eq!(format_duration(-5.0), "0 min");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn any_mode() -> impl Strategy<Value = TransportMode> {
        prop::sample::select(TransportMode::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn duration_matches_speed(d in 0.0f64..20_000.0, mode in any_mode()) {
            let expected = d / mode.speed_kmh() * 60.0;
            prop_assert!((estimate_duration(d, mode) - expected).abs() < 1e-9);
        }

        #[test]
        fn cost_matches_rate(d in 0.0f64..MAX_DISTANCE_KM, mode in any_mode()) {
            let expected = (d * mode.cost_per_km()).round() as u64;
            prop_assert_eq!(estimate_cost(d, mode), expected);
        }

        #[test]
        fn duration_is_monotonic(a in 0.0f64..10_000.0, b in 0.0f64..10_000.0, mode in any_mode()) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(estimate_duration(lo, mode) <= estimate_duration(hi, mode));
        }
    }
}
