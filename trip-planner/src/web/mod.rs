//! Web layer for the trip planner.
//!
//! Exposes route planning, geocoding and quick estimates as a JSON API.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::{AppGeocoder, AppState};
