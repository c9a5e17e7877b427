//! Route advisories derived from distance and departure time.

use chrono::Timelike;

use crate::domain::{Severity, TrafficLevel, Warning, WarningKind};

use super::traffic;

/// Routes longer than this get a "take breaks" advisory.
pub const LONG_DISTANCE_KM: f64 = 200.0;

/// Warnings for a route, always in the order traffic, distance, time.
///
/// Only triggered warnings are included; the result may be empty.
pub fn evaluate(distance_km: f64, departure: impl Timelike) -> Vec<Warning> {
    let hour = departure.hour();
    let mut warnings = Vec::new();

    let traffic = traffic::evaluate_hour(hour);
    if traffic.level == TrafficLevel::Heavy {
        warnings.push(Warning {
            kind: WarningKind::Traffic,
            message: format!(
                "Heavy traffic expected. Add {} minutes to your travel time.",
                traffic.delay_minutes
            ),
            severity: Severity::Medium,
        });
    }

    if distance_km > LONG_DISTANCE_KM {
        warnings.push(Warning {
            kind: WarningKind::Distance,
            message: "Long distance. Consider taking breaks during your journey.".to_string(),
            severity: Severity::Low,
        });
    }

    if is_night(hour) {
        warnings.push(Warning {
            kind: WarningKind::Time,
            message: "Night driving. Ensure your vehicle lights are working and stay alert."
                .to_string(),
            severity: Severity::Medium,
        });
    }

    warnings
}

/// 22:00 through 05:59.
fn is_night(hour: u32) -> bool {
    hour >= 22 || hour <= 5
}


#[cfg(test)]
mod proptests {
    use super::*;
    use chrono::NaiveTime;
    use proptest::prelude::*;

    fn rank(kind: WarningKind) -> u8 {
        match kind {
            WarningKind::Traffic => 0,
            WarningKind::Distance => 1,
            WarningKind::Time => 2,
        }
    }

    proptest! {
        #[test]
        fn warnings_keep_fixed_order(distance in 0.0f64..2_000.0, hour in 0u32..24) {
            let warnings = evaluate(distance, NaiveTime::from_hms_opt(hour, 0, 0).unwrap());
            let ranks: Vec<u8> = warnings.iter().map(|w| rank(w.kind)).collect();
            let mut sorted = ranks.clone();
            sorted.sort_unstable();
            sorted.dedup();
            prop_assert_eq!(ranks, sorted);
        }
    }
}
