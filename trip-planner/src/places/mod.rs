//! Points of interest around a location.
//!
//! Searches come in four flavours ([`PlaceKind`]), each with its own tag
//! filters and default radius. Production queries the OpenStreetMap
//! Overpass API; development and tests use a fixed table.

mod backend;
mod client;
mod error;
mod kind;
mod mock;
mod types;

use std::future::Future;

pub use backend::PlacesBackend;
pub use client::{OverpassClient, OverpassConfig};
pub use error::PlacesError;
pub use kind::{InvalidPlaceKind, MAX_RADIUS_M, PlaceKind};
pub use mock::{MockNearby, MockPlaceFinder};
pub use types::{OverpassCentre, OverpassElement, OverpassResponse};

use crate::domain::NearbyPlace;
use crate::geo::Coordinate;

/// Finds points of interest near a coordinate.
pub trait PlaceFinder {
    /// Places of `kind` within `radius_m` metres of `centre`.
    ///
    /// Results never exceed [`PlaceKind::limit`] and every result has a
    /// coordinate.
    fn nearby(
        &self,
        kind: PlaceKind,
        centre: Coordinate,
        radius_m: u32,
    ) -> impl Future<Output = Result<Vec<NearbyPlace>, PlacesError>> + Send;
}
