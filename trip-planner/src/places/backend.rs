//! Runtime choice between the live and mock place finders.

use crate::domain::NearbyPlace;
use crate::geo::Coordinate;

use super::PlaceFinder;
use super::client::OverpassClient;
use super::error::PlacesError;
use super::kind::PlaceKind;
use super::mock::MockPlaceFinder;

/// The place finder selected at startup.
#[derive(Debug, Clone)]
pub enum PlacesBackend {
    Overpass(OverpassClient),
    Mock(MockPlaceFinder),
}

impl PlacesBackend {
    pub fn name(&self) -> &'static str {
        match self {
            PlacesBackend::Overpass(_) => "overpass",
            PlacesBackend::Mock(_) => "mock",
        }
    }
}

impl PlaceFinder for PlacesBackend {
    async fn nearby(
        &self,
        kind: PlaceKind,
        centre: Coordinate,
        radius_m: u32,
    ) -> Result<Vec<NearbyPlace>, PlacesError> {
        match self {
            PlacesBackend::Overpass(client) => client.nearby(kind, centre, radius_m).await,
            PlacesBackend::Mock(mock) => mock.nearby(kind, centre, radius_m).await,
        }
    }
}
