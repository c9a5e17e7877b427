//! Domain types for the trip planner.
//!
//! Values here enforce their invariants at construction time, so code that
//! receives them can trust their validity.

mod place;
mod route;
mod transport;

pub use place::{AddressComponents, GeocodeResult, NearbyPlace, PlaceCategory};
pub use route::{
    AlternativeRoute, DEFAULT_CURRENCY, RouteStep, Severity, StepKind, TrafficInfo, TrafficLevel,
    TripContext, Warning, WarningKind, WeatherInfo,
};
pub use transport::{InvalidMode, TransportMode};
