//! Resolved places.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::geo::{Coordinate, distance_km};

/// What kind of thing a resolved place is.
///
/// Derived from the OpenStreetMap class/type pair the name-resolution
/// service attaches to each candidate. Kinds we do not model explicitly
/// are kept verbatim in `Other`; a candidate without classification is
/// `Unknown`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "value")]
pub enum PlaceCategory {
    City,
    Town,
    Village,
    Suburb,
    Street,
    Building,
    Amenity,
    Tourism,
    Historic,
    Leisure,
    Other(String),
    #[default]
    Unknown,
}

impl PlaceCategory {
    /// Classify an OSM `class` (Nominatim's `category`) and `type`/`addresstype`.
    pub fn from_osm(class: Option<&str>, kind: Option<&str>) -> Self {
        match class {
            Some("place") | Some("boundary") => match kind {
                Some("city") => PlaceCategory::City,
                Some("town") => PlaceCategory::Town,
                Some("village") | Some("hamlet") => PlaceCategory::Village,
                Some("suburb") | Some("neighbourhood") | Some("quarter") => PlaceCategory::Suburb,
                Some(other) => PlaceCategory::Other(other.to_string()),
                None => PlaceCategory::Unknown,
            },
            Some("highway") => PlaceCategory::Street,
            Some("building") => PlaceCategory::Building,
            Some("amenity") => PlaceCategory::Amenity,
            Some("tourism") => PlaceCategory::Tourism,
            Some("historic") => PlaceCategory::Historic,
            Some("leisure") => PlaceCategory::Leisure,
            Some(other) => PlaceCategory::Other(other.to_string()),
            None => PlaceCategory::Unknown,
        }
    }

    /// Classify an OSM element by its tags, returning the category and the
    /// tag value that decided it (`amenity=restaurant` → `(Amenity, "restaurant")`).
    ///
    /// Keys are tried in the order amenity, tourism, historic, leisure.
    pub fn from_tags(tags: &BTreeMap<String, String>) -> (Self, Option<String>) {
        const KEYS: [(&str, PlaceCategory); 4] = [
            ("amenity", PlaceCategory::Amenity),
            ("tourism", PlaceCategory::Tourism),
            ("historic", PlaceCategory::Historic),
            ("leisure", PlaceCategory::Leisure),
        ];
        KEYS.into_iter()
            .find_map(|(key, category)| tags.get(key).map(|value| (category, Some(value.clone()))))
            .unwrap_or((PlaceCategory::Unknown, None))
    }
}

/// Structured address parts, when the service provides them.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AddressComponents {
    pub street: Option<String>,
    pub house_number: Option<String>,
    pub city: Option<String>,
    pub postcode: Option<String>,
    pub country: Option<String>,
    pub country_code: Option<String>,
}

/// A place name resolved to a coordinate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeocodeResult {
    pub coordinate: Coordinate,
    pub display_name: String,
    #[serde(default)]
    pub address: Option<AddressComponents>,
    #[serde(default)]
    pub category: PlaceCategory,
}

impl GeocodeResult {
    /// Create a result with only a coordinate and display name.
    pub fn new(coordinate: Coordinate, display_name: impl Into<String>) -> Self {
        Self {
            coordinate,
            display_name: display_name.into(),
            address: None,
            category: PlaceCategory::Unknown,
        }
    }

    pub fn with_address(mut self, address: AddressComponents) -> Self {
        self.address = Some(address);
        self
    }

    pub fn with_category(mut self, category: PlaceCategory) -> Self {
        self.category = category;
        self
    }

    /// The city this place lies in, if known.
    pub fn city(&self) -> Option<&str> {
        self.address.as_ref().and_then(|a| a.city.as_deref())
    }

    /// A short label: the city if known, otherwise the first part of the
    /// display name ("Nyhavn, Indre By, Copenhagen" → "Nyhavn").
    pub fn short_name(&self) -> &str {
        if let Some(city) = self.city() {
            return city;
        }
        self.display_name
            .split(',')
            .next()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(&self.display_name)
    }
}

/// A point of interest found near a search centre.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NearbyPlace {
    /// OpenStreetMap element id
    pub id: u64,
    /// `None` for unnamed features.
    pub name: Option<String>,
    pub category: PlaceCategory,
    /// The tag value behind `category`, e.g. "restaurant" or "museum".
    pub subtype: Option<String>,
    pub coordinate: Coordinate,
    /// Great-circle distance from the search centre.
    pub distance_km: f64,
    #[serde(default)]
    pub tags: BTreeMap<String, String>,
}

impl NearbyPlace {
    /// Build a place from an OSM element's id, position and tags.
    pub fn new(
        id: u64,
        coordinate: Coordinate,
        tags: BTreeMap<String, String>,
        centre: Coordinate,
    ) -> Self {
        let (category, subtype) = PlaceCategory::from_tags(&tags);
        Self {
            id,
            name: tags.get("name").filter(|n| !n.trim().is_empty()).cloned(),
            category,
            subtype,
            coordinate,
            distance_km: distance_km(centre, coordinate),
            tags,
        }
    }
}
