//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::{NaiveDate, NaiveTime};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::domain::{DEFAULT_CURRENCY, InvalidMode, TransportMode, TripContext};
use crate::estimate::{MAX_DISTANCE_KM, estimate_cost, estimate_duration, format_duration};
use crate::geo::{Coordinate, InvalidCoordinate};
use crate::geocoding::{GeocodeError, Geocoder};
use crate::places::{InvalidPlaceKind, MAX_RADIUS_M, PlaceFinder, PlaceKind, PlacesError};
use crate::planner::{PlanError, Planner, RouteRequest};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/route/plan", post(plan_route))
        .route("/api/geocode", get(geocode))
        .route("/api/geocode/reverse", get(reverse_geocode))
        .route("/api/estimate", get(estimate))
        .route("/api/places", get(nearby_places))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Plan a route between two named places.
async fn plan_route(
    State(state): State<AppState>,
    Json(req): Json<PlanRouteRequest>,
) -> Result<Json<RouteResponse>, AppError> {
    let date = NaiveDate::parse_from_str(req.departure_date.trim(), "%Y-%m-%d").map_err(|_| {
        AppError::BadRequest {
            message: format!(
                "Invalid departure date: {} (expected YYYY-MM-DD)",
                req.departure_date
            ),
        }
    })?;
    let time = parse_time(&req.departure_time).ok_or_else(|| AppError::BadRequest {
        message: format!(
            "Invalid departure time: {} (expected HH:MM)",
            req.departure_time
        ),
    })?;
    let mode = parse_mode(req.transport_mode.as_deref())?;

    let mut context = TripContext::default().with_currency(
        req.currency
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .unwrap_or(DEFAULT_CURRENCY),
    );
    if let Some(city) = req.city.filter(|c| !c.trim().is_empty()) {
        context = context.with_city(city);
    }

    let request = RouteRequest::new(req.from, req.to, date.and_time(time), mode).with_context(context);
    let planner = Planner::new(
        state.geocoder.as_ref(),
        state.weather.as_ref(),
        state.config.as_ref(),
    );
    let route = planner.plan_route(&request).await?;

    info!(
        origin = %request.origin,
        destination = %request.destination,
        mode = %mode,
        distance_km = route.distance_km,
        "planned route"
    );
    Ok(Json(RouteResponse::from(route)))
}

/// Resolve a place name.
async fn geocode(
    State(state): State<AppState>,
    Query(query): Query<GeocodeQuery>,
) -> Result<Json<crate::domain::GeocodeResult>, AppError> {
    let place = state.geocoder.geocode(&query.q).await?;
    Ok(Json(place))
}

/// Find the place nearest a coordinate.
async fn reverse_geocode(
    State(state): State<AppState>,
    Query(query): Query<ReverseQuery>,
) -> Result<Json<crate::domain::GeocodeResult>, AppError> {
    let coordinate = Coordinate::new(query.lat, query.lon)?;
    let place = state.geocoder.reverse_geocode(coordinate).await?;
    Ok(Json(place))
}

/// Duration and cost for a known distance.
async fn estimate(Query(query): Query<EstimateQuery>) -> Result<Json<EstimateResponse>, AppError> {
    if !(0.0..=MAX_DISTANCE_KM).contains(&query.distance_km) {
        return Err(AppError::BadRequest {
            message: format!(
                "Invalid distance: {} (expected 0 to {MAX_DISTANCE_KM} km)",
                query.distance_km
            ),
        });
    }
    let mode = parse_mode(query.mode.as_deref())?;
    let duration_minutes = estimate_duration(query.distance_km, mode);

    Ok(Json(EstimateResponse {
        distance_km: query.distance_km,
        transport_mode: mode,
        duration_minutes,
        estimated_cost: estimate_cost(query.distance_km, mode),
        duration_text: format_duration(duration_minutes),
    }))
}

/// Points of interest around a named place or a coordinate.
async fn nearby_places(
    State(state): State<AppState>,
    Query(query): Query<PlacesQuery>,
) -> Result<Json<PlacesResponse>, AppError> {
    let kind: PlaceKind = query.kind.parse()?;

    let radius_m = query.radius_m.unwrap_or(kind.default_radius_m());
    if radius_m == 0 || radius_m > MAX_RADIUS_M {
        return Err(AppError::BadRequest {
            message: format!("Invalid radius: {radius_m} (expected 1 to {MAX_RADIUS_M} m)"),
        });
    }

    let centre = match (query.lat, query.lon, query.q.as_deref()) {
        (Some(lat), Some(lon), _) => Coordinate::new(lat, lon)?,
        (None, None, Some(q)) => state.geocoder.geocode(q).await?.coordinate,
        _ => {
            return Err(AppError::BadRequest {
                message: "Give either q or both lat and lon".to_string(),
            });
        }
    };

    let places = state.places.nearby(kind, centre, radius_m).await?;
    info!(%kind, %centre, radius_m, found = places.len(), "nearby places");

    Ok(Json(PlacesResponse {
        kind,
        centre,
        radius_m,
        places,
    }))
}

/// Parse HH:MM, also accepting HH:MM:SS.
fn parse_time(s: &str) -> Option<NaiveTime> {
    let s = s.trim();
    NaiveTime::parse_from_str(s, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M:%S"))
        .ok()
}

/// An absent mode means car; anything unrecognised is rejected.
fn parse_mode(mode: Option<&str>) -> Result<TransportMode, InvalidMode> {
    mode.map_or(Ok(TransportMode::default()), |m| m.parse())
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    BadGateway { message: String },
}

impl From<PlanError> for AppError {
    fn from(e: PlanError) -> Self {
        match e {
            PlanError::SameLocation { .. } | PlanError::ArrivalOutOfRange { .. } => {
                AppError::BadRequest {
                    message: e.to_string(),
                }
            }
            PlanError::LocationNotFound { .. } => AppError::NotFound {
                message: e.to_string(),
            },
        }
    }
}

impl From<GeocodeError> for AppError {
    fn from(e: GeocodeError) -> Self {
        match e {
            GeocodeError::EmptyQuery => AppError::BadRequest {
                message: e.to_string(),
            },
            // Any failed lookup leaves the location unresolved.
            _ => {
                if !e.is_no_match() {
                    warn!(error = %e, "geocoding service failed");
                }
                AppError::NotFound {
                    message: format!("location could not be resolved: {e}"),
                }
            }
        }
    }
}

impl From<PlacesError> for AppError {
    fn from(e: PlacesError) -> Self {
        AppError::BadGateway {
            message: format!("place search failed: {e}"),
        }
    }
}

impl From<InvalidPlaceKind> for AppError {
    fn from(e: InvalidPlaceKind) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl From<InvalidMode> for AppError {
    fn from(e: InvalidMode) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl From<InvalidCoordinate> for AppError {
    fn from(e: InvalidCoordinate) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::BadGateway { message } => (StatusCode::BAD_GATEWAY, message),
        };

        if status.is_server_error() {
            warn!(%status, %message, "request failed");
        } else {
            info!(%status, %message, "request rejected");
        }

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
