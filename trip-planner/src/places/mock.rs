//! In-memory place finder for development and tests.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;

use crate::domain::NearbyPlace;
use crate::geo::{Coordinate, distance_km};

use super::PlaceFinder;
use super::error::PlacesError;
use super::kind::PlaceKind;

/// One entry in a mock nearby-places file.
#[derive(Debug, Clone, Deserialize)]
pub struct MockNearby {
    /// Which searches return this place
    pub kind: PlaceKind,
    pub id: u64,
    pub latitude: f64,
    pub longitude: f64,
    /// OSM tags, including `name` when the place has one
    #[serde(default)]
    pub tags: BTreeMap<String, String>,
}

/// Place finder backed by a fixed list of places.
#[derive(Debug, Clone, Default)]
pub struct MockPlaceFinder {
    places: Arc<Vec<(PlaceKind, u64, Coordinate, BTreeMap<String, String>)>>,
}

impl MockPlaceFinder {
    /// Build a finder from parsed entries.
    pub fn new(entries: Vec<MockNearby>) -> Result<Self, PlacesError> {
        let places = entries
            .into_iter()
            .map(|entry| {
                let coordinate = Coordinate::new(entry.latitude, entry.longitude).map_err(|e| {
                    PlacesError::MockData {
                        message: format!("place {}: {}", entry.id, e),
                    }
                })?;
                Ok((entry.kind, entry.id, coordinate, entry.tags))
            })
            .collect::<Result<Vec<_>, PlacesError>>()?;

        Ok(Self {
            places: Arc::new(places),
        })
    }

    /// Load places from a JSON array of [`MockNearby`].
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, PlacesError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| PlacesError::MockData {
            message: format!("Failed to read {:?}: {}", path, e),
        })?;

        let entries: Vec<MockNearby> =
            serde_json::from_str(&json).map_err(|e| PlacesError::MockData {
                message: format!("Failed to parse {:?}: {}", path, e),
            })?;

        Self::new(entries)
    }

    pub fn len(&self) -> usize {
        self.places.len()
    }

    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }
}

impl PlaceFinder for MockPlaceFinder {
    async fn nearby(
        &self,
        kind: PlaceKind,
        centre: Coordinate,
        radius_m: u32,
    ) -> Result<Vec<NearbyPlace>, PlacesError> {
        let radius_km = f64::from(radius_m) / 1000.0;

        let places = self
            .places
            .iter()
            .filter(|(k, _, coordinate, _)| {
                *k == kind && distance_km(centre, *coordinate) <= radius_km
            })
            .map(|(_, id, coordinate, tags)| NearbyPlace::new(*id, *coordinate, tags.clone(), centre))
            .take(kind.limit().unwrap_or(usize::MAX))
            .collect();

        Ok(places)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PlaceCategory;
    use std::io::Write;

    fn centre() -> Coordinate {
        Coordinate::new(55.6761, 12.5683).unwrap()
    }

    fn bundled() -> MockPlaceFinder {
        MockPlaceFinder::from_file(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/data/mock_nearby.json"
        ))
        .unwrap()
    }

    #[tokio::test]
    async fn filters_by_kind_and_radius() {
        let finder = bundled();
        assert!(!finder.is_empty());

        let sights = finder.nearby(PlaceKind::Sights, centre(), 5000).await.unwrap();
        assert!(!sights.is_empty());
        assert!(sights.iter().all(|p| p.distance_km <= 5.0));
        assert!(sights.iter().any(|p| p.category == PlaceCategory::Tourism));

        let nothing = finder.nearby(PlaceKind::Sights, centre(), 1).await.unwrap();
        assert!(nothing.is_empty());
    }

    #[tokio::test]
    async fn secret_results_are_capped() {
        let entries = (0..7)
            .map(|id| MockNearby {
                kind: PlaceKind::Secret,
                id,
                latitude: 55.68,
                longitude: 12.57,
                tags: BTreeMap::from([("tourism".to_string(), "artwork".to_string())]),
            })
            .collect();
        let finder = MockPlaceFinder::new(entries).unwrap();
        assert_eq!(finder.len(), 7);

        let places = finder.nearby(PlaceKind::Secret, centre(), 6000).await.unwrap();
        assert_eq!(places.len(), 5);
    }

    #[test]
    fn rejects_bad_coordinates() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"kind":"sights","id":1,"latitude":95.0,"longitude":12.0}}]"#
        )
        .unwrap();

        let err = MockPlaceFinder::from_file(file.path()).unwrap_err();
        assert!(matches!(err, PlacesError::MockData { .. }));
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = MockPlaceFinder::from_file("/nonexistent/nearby.json").unwrap_err();
        assert!(matches!(err, PlacesError::MockData { .. }));
    }
}
