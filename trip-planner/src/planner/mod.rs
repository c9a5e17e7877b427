//! Route planner.
//!
//! Turns a pair of place names, a departure time and a transport mode
//! into a complete [`RouteResult`]: resolved endpoints, great-circle
//! distance, duration and cost estimates, synthetic alternatives,
//! traffic, warnings and (optionally) weather.

mod alternatives;
mod config;
mod plan;
mod request;


pub use alternatives::{
    ECONOMICAL_DETOUR, ECONOMICAL_DISCOUNT, SCENIC_DETOUR, compass_point, generate_alternatives,
    route_steps,
};
pub use config::PlannerConfig;
pub use plan::{PlanStage, Planner, RouteResult};
pub use request::{Endpoint, PlanError, RouteRequest};
