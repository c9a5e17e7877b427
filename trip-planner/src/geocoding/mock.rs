//! In-memory geocoder for development and tests.
//!
//! Serves a fixed table of places, optionally loaded from a JSON file,
//! as if it were the live service.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use serde::Deserialize;

use crate::domain::{AddressComponents, GeocodeResult, PlaceCategory};
use crate::geo::{Coordinate, distance_km};

use super::error::GeocodeError;
use super::{Geocoder, normalize_query};

/// Reverse lookups farther than this from every known place find nothing.
const REVERSE_RADIUS_KM: f64 = 50.0;

/// One entry in a mock places file.
#[derive(Debug, Clone, Deserialize)]
pub struct MockPlace {
    /// Name the place is found under (matched case-insensitively)
    pub query: String,
    pub latitude: f64,
    pub longitude: f64,
    pub display_name: String,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub category: Option<PlaceCategory>,
}

/// Geocoder backed by a fixed table of places.
///
/// Clones share the same table and lookup counter.
#[derive(Debug, Clone, Default)]
pub struct MockGeocoder {
    places: Arc<HashMap<String, GeocodeResult>>,
    lookups: Arc<AtomicUsize>,
}

impl MockGeocoder {
    /// Create a mock from `(query, result)` pairs.
    pub fn new(places: impl IntoIterator<Item = (String, GeocodeResult)>) -> Self {
        let places = places
            .into_iter()
            .map(|(query, result)| (key(&query), result))
            .collect();
        Self {
            places: Arc::new(places),
            lookups: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Build a mock from parsed file entries.
    pub fn from_places(places: Vec<MockPlace>) -> Result<Self, GeocodeError> {
        let mut entries = Vec::with_capacity(places.len());
        for place in places {
            let coordinate = Coordinate::new(place.latitude, place.longitude)?;
            let mut result = GeocodeResult::new(coordinate, place.display_name)
                .with_category(place.category.unwrap_or_default());
            if place.city.is_some() || place.country.is_some() {
                result = result.with_address(AddressComponents {
                    city: place.city,
                    country: place.country,
                    ..Default::default()
                });
            }
            entries.push((place.query, result));
        }
        Ok(Self::new(entries))
    }

    /// Load places from a JSON array of [`MockPlace`].
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, GeocodeError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| GeocodeError::MockData {
            message: format!("Failed to read {:?}: {}", path, e),
        })?;

        let places: Vec<MockPlace> =
            serde_json::from_str(&json).map_err(|e| GeocodeError::MockData {
                message: format!("Failed to parse {:?}: {}", path, e),
            })?;

        if places.is_empty() {
            return Err(GeocodeError::MockData {
                message: format!("No places in {:?}", path),
            });
        }

        Self::from_places(places)
    }

    /// Number of lookups served so far (forward and reverse).
    pub fn lookup_count(&self) -> usize {
        self.lookups.load(Ordering::Relaxed)
    }

    /// Number of places in the table.
    pub fn len(&self) -> usize {
        self.places.len()
    }

    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }
}

fn key(query: &str) -> String {
    query.trim().to_lowercase()
}

impl Geocoder for MockGeocoder {
    async fn geocode(&self, query: &str) -> Result<GeocodeResult, GeocodeError> {
        let query = normalize_query(query)?;
        self.lookups.fetch_add(1, Ordering::Relaxed);

        self.places
            .get(&key(query))
            .cloned()
            .ok_or_else(|| GeocodeError::NotFound {
                query: query.to_string(),
            })
    }

    async fn reverse_geocode(&self, coordinate: Coordinate) -> Result<GeocodeResult, GeocodeError> {
        self.lookups.fetch_add(1, Ordering::Relaxed);

        self.places
            .values()
            .map(|place| (distance_km(coordinate, place.coordinate), place))
            .filter(|(d, _)| *d <= REVERSE_RADIUS_KM)
            .min_by(|(a, _), (b, _)| a.total_cmp(b))
            .map(|(_, place)| place.clone())
            .ok_or_else(|| GeocodeError::NotFound {
                query: coordinate.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn coord(lat: f64, lon: f64) -> Coordinate {
        Coordinate::new(lat, lon).unwrap()
    }

    fn danish_cities() -> MockGeocoder {
        MockGeocoder::new([
            (
                "Copenhagen".to_string(),
                GeocodeResult::new(coord(55.6761, 12.5683), "København, Danmark"),
            ),
            (
                "Aarhus".to_string(),
                GeocodeResult::new(coord(56.1629, 10.2039), "Aarhus, Danmark"),
            ),
        ])
    }

    #[tokio::test]
    async fn lookup_is_case_and_whitespace_insensitive() {
        let geocoder = danish_cities();
        let place = geocoder.geocode("  copenhagen ").await.unwrap();
        assert_eq!(place.display_name, "København, Danmark");
        assert_eq!(geocoder.lookup_count(), 1);
    }

    #[tokio::test]
    async fn unknown_place_is_not_found() {
        let geocoder = danish_cities();
        let err = geocoder.geocode("Atlantis").await.unwrap_err();
        assert!(matches!(err, GeocodeError::NotFound { query } if query == "Atlantis"));
    }

    #[tokio::test]
    async fn blank_query_is_rejected_without_lookup() {
        let geocoder = danish_cities();
        assert!(matches!(
            geocoder.geocode("").await,
            Err(GeocodeError::EmptyQuery)
        ));
        assert!(matches!(
            geocoder.geocode("   ").await,
            Err(GeocodeError::EmptyQuery)
        ));
        assert_eq!(geocoder.lookup_count(), 0);
    }

    #[tokio::test]
    async fn reverse_finds_nearest() {
        let geocoder = danish_cities();
        let place = geocoder
            .reverse_geocode(coord(56.15, 10.21))
            .await
            .unwrap();
        assert_eq!(place.display_name, "Aarhus, Danmark");
    }

    #[tokio::test]
    async fn reverse_far_from_everything() {
        let geocoder = danish_cities();
        let err = geocoder.reverse_geocode(coord(0.0, 0.0)).await.unwrap_err();
        assert!(matches!(err, GeocodeError::NotFound { .. }));
    }

    #[tokio::test]
    async fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"query": "Odense", "latitude": 55.4038, "longitude": 10.4024,
                 "display_name": "Odense, Danmark", "city": "Odense",
                 "category": {{"kind": "city"}}}}]"#
        )
        .unwrap();

        let geocoder = MockGeocoder::from_file(file.path()).unwrap();
        assert_eq!(geocoder.len(), 1);

        let place = geocoder.geocode("ODENSE").await.unwrap();
        assert_eq!(place.city(), Some("Odense"));
        assert_eq!(place.category, PlaceCategory::City);
    }

    #[test]
    fn load_bundled_data() {
        let geocoder = MockGeocoder::from_file("data/mock_places.json").unwrap();
        assert!(geocoder.len() >= 5);
    }

    #[test]
    fn empty_file_is_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[]").unwrap();
        assert!(matches!(
            MockGeocoder::from_file(file.path()),
            Err(GeocodeError::MockData { .. })
        ));
    }

    #[test]
    fn invalid_coordinate_in_file_is_error() {
        let places = vec![MockPlace {
            query: "Bad".into(),
            latitude: 123.0,
            longitude: 0.0,
            display_name: "Bad".into(),
            city: None,
            country: None,
            category: None,
        }];
        assert!(matches!(
            MockGeocoder::from_places(places),
            Err(GeocodeError::BadCoordinate(_))
        ));
    }

    #[test]
    fn missing_file_is_error() {
        assert!(MockGeocoder::from_file("does/not/exist.json").is_err());
    }
}
