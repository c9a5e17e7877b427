//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{NearbyPlace, TransportMode};
use crate::estimate::format_duration;
use crate::geo::Coordinate;
use crate::places::PlaceKind;
use crate::planner::RouteResult;

/// Request to plan a route.
#[derive(Debug, Deserialize)]
pub struct PlanRouteRequest {
    /// Origin place name
    pub from: String,

    /// Destination place name
    pub to: String,

    /// Departure date in YYYY-MM-DD format
    pub departure_date: String,

    /// Departure time in HH:MM format
    pub departure_time: String,

    /// Transport mode name (defaults to car)
    pub transport_mode: Option<String>,

    /// City the trip is being planned for, echoed back
    pub city: Option<String>,

    /// Currency for costs (defaults to DKK)
    pub currency: Option<String>,
}

/// A planned route with presentation strings alongside the raw numbers.
#[derive(Debug, Serialize)]
pub struct RouteResponse {
    #[serde(flatten)]
    pub route: RouteResult,

    /// Distance with one decimal, e.g. "157.0 km"
    pub distance_text: String,

    /// Duration as "45 min" or "2h 37m"
    pub duration_text: String,

    /// Departure time as HH:MM
    pub departure_time: String,

    /// Arrival time as HH:MM
    pub arrival_time: String,
}

impl From<RouteResult> for RouteResponse {
    fn from(route: RouteResult) -> Self {
        Self {
            distance_text: format!("{:.1} km", route.distance_km),
            duration_text: format_duration(route.duration_minutes),
            departure_time: route.departure.format("%H:%M").to_string(),
            arrival_time: route.arrival.format("%H:%M").to_string(),
            route,
        }
    }
}

/// Query for a forward geocode.
#[derive(Debug, Deserialize)]
pub struct GeocodeQuery {
    /// Free-text place name
    pub q: String,
}

/// Query for a reverse geocode.
#[derive(Debug, Deserialize)]
pub struct ReverseQuery {
    pub lat: f64,
    pub lon: f64,
}

/// Query for a quick estimate over a known distance.
#[derive(Debug, Deserialize)]
pub struct EstimateQuery {
    pub distance_km: f64,

    /// Transport mode name (defaults to car)
    pub mode: Option<String>,
}

/// Duration and cost for a distance.
#[derive(Debug, Serialize)]
pub struct EstimateResponse {
    pub distance_km: f64,
    pub transport_mode: TransportMode,
    pub duration_minutes: f64,
    pub estimated_cost: u64,
    pub duration_text: String,
}

/// Query for nearby places: either a place name or a coordinate.
#[derive(Debug, Deserialize)]
pub struct PlacesQuery {
    /// restaurants, accommodation, sights or secret
    pub kind: String,

    /// Place name to search around
    pub q: Option<String>,

    pub lat: Option<f64>,
    pub lon: Option<f64>,

    /// Search radius in metres (defaults per kind)
    pub radius_m: Option<u32>,
}

/// Places found around a centre.
#[derive(Debug, Serialize)]
pub struct PlacesResponse {
    pub kind: PlaceKind,
    pub centre: Coordinate,
    pub radius_m: u32,
    pub places: Vec<NearbyPlace>,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
