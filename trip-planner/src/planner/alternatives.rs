//! Synthetic route variants and step lists.
//!
//! There is no road network behind these: alternatives scale the
//! great-circle distance by fixed factors, and the step list is a single
//! straight leg between start and end markers.

use crate::domain::{AlternativeRoute, GeocodeResult, RouteStep, StepKind, TransportMode};
use crate::estimate::{estimate_cost, estimate_duration};
use crate::geo::initial_bearing_degrees;

/// Scenic detour factor.
pub const SCENIC_DETOUR: f64 = 1.3;

/// Economical detour factor.
pub const ECONOMICAL_DETOUR: f64 = 1.1;

/// Cost multiplier applied to the economical route.
pub const ECONOMICAL_DISCOUNT: f64 = 0.8;

/// The three comparison routes: fastest, scenic, economical.
pub fn generate_alternatives(distance_km: f64, mode: TransportMode) -> Vec<AlternativeRoute> {
    let scenic_km = distance_km * SCENIC_DETOUR;
    let economical_km = distance_km * ECONOMICAL_DETOUR;
    let economical_cost =
        (estimate_cost(economical_km, mode) as f64 * ECONOMICAL_DISCOUNT).round() as u64;

    vec![
        AlternativeRoute {
            label: "Fastest".to_string(),
            distance_km,
            duration_minutes: estimate_duration(distance_km, mode),
            cost: estimate_cost(distance_km, mode),
            reliability_percent: 95,
        },
        AlternativeRoute {
            label: "Scenic".to_string(),
            distance_km: scenic_km,
            duration_minutes: estimate_duration(scenic_km, mode),
            cost: estimate_cost(scenic_km, mode),
            reliability_percent: 85,
        },
        AlternativeRoute {
            label: "Economical".to_string(),
            distance_km: economical_km,
            duration_minutes: estimate_duration(economical_km, mode),
            cost: economical_cost,
            reliability_percent: 90,
        },
    ]
}

/// Start, main leg, and arrival steps for a direct route.
pub fn route_steps(
    origin: &GeocodeResult,
    destination: &GeocodeResult,
    distance_km: f64,
    duration_minutes: f64,
) -> Vec<RouteStep> {
    let heading = compass_point(initial_bearing_degrees(
        origin.coordinate,
        destination.coordinate,
    ));

    vec![
        RouteStep::marker(
            StepKind::Start,
            format!("Start at {}", origin.short_name()),
        ),
        RouteStep {
            instruction: format!("Head {} towards {}", heading, destination.short_name()),
            distance_km,
            duration_minutes,
            kind: StepKind::Main,
        },
        RouteStep::marker(StepKind::End, "You have arrived at your destination"),
    ]
}

/// Eight-wind compass name for a bearing in degrees.
pub fn compass_point(bearing: f64) -> &'static str {
    const POINTS: [&str; 8] = [
        "north",
        "north-east",
        "east",
        "south-east",
        "south",
        "south-west",
        "west",
        "north-west",
    ];
    let sector = ((bearing.rem_euclid(360.0) + 22.5) / 45.0) as usize % 8;
    POINTS[sector]
}
