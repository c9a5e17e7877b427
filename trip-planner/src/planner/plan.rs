//! Route planning.
//!
//! A plan moves through Geocoding → Estimating → Annotating → Complete.
//! Only geocoding touches the network; every later stage is synchronous
//! arithmetic on the two resolved coordinates. A geocoding failure ends the
//! plan: no default coordinates are substituted and nothing is retried.

use std::fmt;

use chrono::NaiveDateTime;
use serde::Serialize;
use tracing::debug;

use crate::domain::{
    AlternativeRoute, GeocodeResult, RouteStep, TrafficInfo, TransportMode, TripContext, Warning,
    WeatherInfo,
};
use crate::estimate::{estimate_cost, estimate_duration, traffic, warnings};
use crate::geo::{Coordinate, distance_km};
use crate::geocoding::Geocoder;
use crate::weather::WeatherProvider;

use super::alternatives::{generate_alternatives, route_steps};
use super::config::PlannerConfig;
use super::request::{Endpoint, PlanError, RouteRequest};

/// Stages of a planning call, as reported in debug logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanStage {
    Idle,
    Geocoding,
    Estimating,
    Annotating,
    Complete,
    Failed,
}

impl fmt::Display for PlanStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PlanStage::Idle => "idle",
            PlanStage::Geocoding => "geocoding",
            PlanStage::Estimating => "estimating",
            PlanStage::Annotating => "annotating",
            PlanStage::Complete => "complete",
            PlanStage::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// A planned route. Built once per call and never modified.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteResult {
    pub origin: GeocodeResult,
    pub destination: GeocodeResult,
    pub distance_km: f64,
    pub duration_minutes: f64,
    /// Whole units of `context.currency`.
    pub estimated_cost: u64,
    pub transport_mode: TransportMode,
    pub departure: NaiveDateTime,
    /// Departure plus the estimated duration. Traffic delay is not included.
    pub arrival: NaiveDateTime,
    pub steps: Vec<RouteStep>,
    pub alternatives: Vec<AlternativeRoute>,
    pub traffic: TrafficInfo,
    pub warnings: Vec<Warning>,
    /// Current weather at the origin, when available.
    pub weather: Option<WeatherInfo>,
    pub context: TripContext,
}

/// Route planner over a geocoder and a weather source.
pub struct Planner<'a, G, W> {
    geocoder: &'a G,
    weather: &'a W,
    config: &'a PlannerConfig,
}

impl<'a, G, W> Planner<'a, G, W>
where
    G: Geocoder + Sync,
    W: WeatherProvider + Sync,
{
    /// Create a new planner.
    pub fn new(geocoder: &'a G, weather: &'a W, config: &'a PlannerConfig) -> Self {
        Self {
            geocoder,
            weather,
            config,
        }
    }

    /// Plan a route from the request's origin to its destination.
    ///
    /// Both places are geocoded concurrently; if either lookup fails the
    /// other is abandoned and the failing side is reported.
    pub async fn plan_route(&self, request: &RouteRequest) -> Result<RouteResult, PlanError> {
        debug!(stage = %PlanStage::Idle, origin = %request.origin, destination = %request.destination, mode = %request.transport_mode, "planning route");
        request.validate()?;

        // Geocoding
        debug!(stage = %PlanStage::Geocoding);
        let (origin, destination) = futures::try_join!(
            self.locate(Endpoint::Origin, &request.origin),
            self.locate(Endpoint::Destination, &request.destination),
        )?;

        // Estimating
        debug!(stage = %PlanStage::Estimating, origin = %origin.coordinate, destination = %destination.coordinate);
        let mode = request.transport_mode;
        let distance_km = distance_km(origin.coordinate, destination.coordinate);
        let duration_minutes = estimate_duration(distance_km, mode);
        let estimated_cost = estimate_cost(distance_km, mode);

        // Annotating
        debug!(stage = %PlanStage::Annotating, distance_km, duration_minutes);
        let departure = request.departure();
        let arrival = departure
            .checked_add_signed(minutes(duration_minutes))
            .ok_or(PlanError::ArrivalOutOfRange { departure })?;
        let traffic = traffic::evaluate(request.departure_time);
        let warnings = warnings::evaluate(distance_km, request.departure_time);
        let alternatives = generate_alternatives(distance_km, mode);
        let steps = route_steps(&origin, &destination, distance_km, duration_minutes);
        let weather = self.weather_at(origin.coordinate).await;

        debug!(stage = %PlanStage::Complete, warnings = warnings.len());
        Ok(RouteResult {
            origin,
            destination,
            distance_km,
            duration_minutes,
            estimated_cost,
            transport_mode: mode,
            departure,
            arrival,
            steps,
            alternatives,
            traffic,
            warnings,
            weather,
            context: request.context.clone(),
        })
    }

    /// Geocode one end of the route.
    async fn locate(&self, which: Endpoint, query: &str) -> Result<GeocodeResult, PlanError> {
        self.geocoder.geocode(query).await.map_err(|e| {
            debug!(stage = %PlanStage::Failed, %which, query, error = %e);
            PlanError::LocationNotFound {
                which,
                query: query.to_string(),
                reason: e.to_string(),
            }
        })
    }

    /// Weather at a coordinate, or `None` if disabled, failing or slow.
    async fn weather_at(&self, at: Coordinate) -> Option<WeatherInfo> {
        if !self.config.fetch_weather {
            return None;
        }

        match tokio::time::timeout(self.config.weather_timeout(), self.weather.current(at)).await {
            Ok(Ok(info)) => Some(info),
            Ok(Err(e)) => {
                debug!(error = %e, "weather unavailable");
                None
            }
            Err(_) => {
                debug!("weather lookup timed out");
                None
            }
        }
    }
}

/// Fractional minutes as a chrono duration, to millisecond precision.
fn minutes(value: f64) -> chrono::Duration {
    chrono::Duration::milliseconds((value * 60_000.0).round() as i64)
}
