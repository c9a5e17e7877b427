//! Overpass API wire types.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::domain::NearbyPlace;
use crate::geo::Coordinate;

/// Top-level Overpass JSON response.
#[derive(Debug, Clone, Deserialize)]
pub struct OverpassResponse {
    #[serde(default)]
    pub elements: Vec<OverpassElement>,
}

/// A node, way or relation. Nodes carry `lat`/`lon`; ways and relations
/// carry `center` when queried with `out center`.
#[derive(Debug, Clone, Deserialize)]
pub struct OverpassElement {
    pub id: u64,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub center: Option<OverpassCentre>,
    #[serde(default)]
    pub tags: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct OverpassCentre {
    pub lat: f64,
    pub lon: f64,
}

impl OverpassElement {
    /// The element's position: its own for nodes, the centre otherwise.
    pub fn coordinate(&self) -> Option<Coordinate> {
        let (lat, lon) = match (self.lat, self.lon, self.center) {
            (Some(lat), Some(lon), _) => (lat, lon),
            (_, _, Some(centre)) => (centre.lat, centre.lon),
            _ => return None,
        };
        Coordinate::new(lat, lon).ok()
    }

    /// Convert to a domain place; `None` when the element has no usable
    /// position.
    pub fn into_place(self, centre: Coordinate) -> Option<NearbyPlace> {
        let coordinate = self.coordinate()?;
        Some(NearbyPlace::new(self.id, coordinate, self.tags, centre))
    }
}
