//! Place-name resolution.
//!
//! The [`Geocoder`] trait is the seam between the planner and whatever
//! resolves names to coordinates. Production uses the OpenStreetMap
//! Nominatim API; development and tests use an in-memory table.
//!
//! Every lookup issues at most one request and is never retried. All
//! failure variants mean the same thing to callers: the location could
//! not be resolved.

mod backend;
mod client;
mod error;
mod mock;
mod types;

use std::future::Future;

pub use backend::GeocoderBackend;
pub use client::{NominatimClient, NominatimConfig};
pub use error::GeocodeError;
pub use mock::{MockGeocoder, MockPlace};
pub use types::{NominatimAddress, NominatimPlace};

use crate::domain::GeocodeResult;
use crate::geo::Coordinate;

/// Resolves place names to coordinates and back.
pub trait Geocoder {
    /// Resolve a free-text place name to its best match.
    fn geocode(
        &self,
        query: &str,
    ) -> impl Future<Output = Result<GeocodeResult, GeocodeError>> + Send;

    /// Find the place nearest to a coordinate.
    fn reverse_geocode(
        &self,
        coordinate: Coordinate,
    ) -> impl Future<Output = Result<GeocodeResult, GeocodeError>> + Send;
}

/// Trim a query, rejecting ones that are empty or whitespace only.
///
/// Implementations call this before any I/O so that blank input never
/// reaches the network.
pub fn normalize_query(query: &str) -> Result<&str, GeocodeError> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        Err(GeocodeError::EmptyQuery)
    } else {
        Ok(trimmed)
    }
}
