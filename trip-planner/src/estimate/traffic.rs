//! Time-of-day traffic heuristic.

use chrono::Timelike;

use crate::domain::{TrafficInfo, TrafficLevel};

/// Expected traffic for a departure, from its hour of day alone.
///
/// 07:00–09:59 is morning rush, 16:00–18:59 evening traffic, anything
/// else normal.
pub fn evaluate(departure: impl Timelike) -> TrafficInfo {
    evaluate_hour(departure.hour())
}

/// Expected traffic for a departure hour (0–23).
pub fn evaluate_hour(hour: u32) -> TrafficInfo {
    let (level, delay_minutes, description) = match hour {
        7..=9 => (TrafficLevel::Heavy, 15, "Morning rush hour traffic"),
        16..=18 => (TrafficLevel::Medium, 10, "Evening traffic"),
        _ => (TrafficLevel::Light, 0, "Normal traffic"),
    };

    TrafficInfo {
        level,
        delay_minutes,
        description: description.to_string(),
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use chrono::NaiveTime;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn depends_only_on_hour(hour in 0u32..24, m1 in 0u32..60, m2 in 0u32..60) {
            let a = evaluate(NaiveTime::from_hms_opt(hour, m1, 0).unwrap());
            let b = evaluate(NaiveTime::from_hms_opt(hour, m2, 59).unwrap());
            prop_assert_eq!(a, b);
        }
    }
}
