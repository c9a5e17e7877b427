//! Runtime choice between the live and mock geocoders.

use crate::domain::GeocodeResult;
use crate::geo::Coordinate;

use super::client::NominatimClient;
use super::error::GeocodeError;
use super::mock::MockGeocoder;
use super::Geocoder;

/// The geocoder selected at startup.
#[derive(Debug, Clone)]
pub enum GeocoderBackend {
    Nominatim(NominatimClient),
    Mock(MockGeocoder),
}

impl GeocoderBackend {
    pub fn name(&self) -> &'static str {
        match self {
            GeocoderBackend::Nominatim(_) => "nominatim",
            GeocoderBackend::Mock(_) => "mock",
        }
    }
}

impl Geocoder for GeocoderBackend {
    async fn geocode(&self, query: &str) -> Result<GeocodeResult, GeocodeError> {
        match self {
            GeocoderBackend::Nominatim(client) => client.geocode(query).await,
            GeocoderBackend::Mock(mock) => mock.geocode(query).await,
        }
    }

    async fn reverse_geocode(&self, coordinate: Coordinate) -> Result<GeocodeResult, GeocodeError> {
        match self {
            GeocoderBackend::Nominatim(client) => client.reverse_geocode(coordinate).await,
            GeocoderBackend::Mock(mock) => mock.reverse_geocode(coordinate).await,
        }
    }
}
