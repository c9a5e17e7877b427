//! Search kinds and their Overpass filters.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::geo::Coordinate;

/// Largest radius a caller may ask for, in metres.
pub const MAX_RADIUS_M: u32 = 20_000;

/// Error returned when parsing an unrecognised search kind.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown place kind: {input:?} (expected restaurants, accommodation, sights or secret)")]
pub struct InvalidPlaceKind {
    pub input: String,
}

/// What to look for around a location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaceKind {
    Restaurants,
    Accommodation,
    Sights,
    /// Lesser-known spots: artwork, community centres, gardens, memorials.
    Secret,
}

impl PlaceKind {
    pub const ALL: [PlaceKind; 4] = [
        PlaceKind::Restaurants,
        PlaceKind::Accommodation,
        PlaceKind::Sights,
        PlaceKind::Secret,
    ];

    /// Search radius used when the caller gives none.
    pub fn default_radius_m(self) -> u32 {
        match self {
            PlaceKind::Restaurants => 2000,
            PlaceKind::Accommodation => 3000,
            PlaceKind::Sights => 5000,
            PlaceKind::Secret => 6000,
        }
    }

    /// Maximum number of results, if capped.
    pub fn limit(self) -> Option<usize> {
        match self {
            PlaceKind::Secret => Some(5),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PlaceKind::Restaurants => "restaurants",
            PlaceKind::Accommodation => "accommodation",
            PlaceKind::Sights => "sights",
            PlaceKind::Secret => "secret",
        }
    }

    /// Overpass QL element selectors, without the `around` clause.
    fn selectors(self) -> &'static [&'static str] {
        match self {
            PlaceKind::Restaurants => &[
                r#"node["amenity"="restaurant"]"#,
                r#"way["amenity"="restaurant"]"#,
                r#"relation["amenity"="restaurant"]"#,
            ],
            PlaceKind::Accommodation => &[
                r#"node["tourism"="hotel"]"#,
                r#"node["tourism"="hostel"]"#,
                r#"node["tourism"="guest_house"]"#,
                r#"way["tourism"="hotel"]"#,
            ],
            PlaceKind::Sights => &[
                r#"node["tourism"="attraction"]"#,
                r#"node["tourism"="museum"]"#,
                r#"node["historic"]"#,
                r#"node["leisure"="park"]"#,
            ],
            PlaceKind::Secret => &[
                r#"node["tourism"="artwork"]"#,
                r#"node["amenity"="community_centre"]"#,
                r#"node["leisure"="garden"]"#,
                r#"node["historic"="memorial"]"#,
            ],
        }
    }

    /// Full Overpass QL query for this kind around `centre`.
    ///
    /// Ways and relations are returned with a computed `center`.
    pub fn overpass_query(self, centre: Coordinate, radius_m: u32) -> String {
        let around = format!(
            "(around:{},{},{})",
            radius_m,
            centre.latitude(),
            centre.longitude()
        );
        let mut query = String::from("[out:json][timeout:25];\n(\n");
        for selector in self.selectors() {
            query.push_str("  ");
            query.push_str(selector);
            query.push_str(&around);
            query.push_str(";\n");
        }
        query.push_str(");\nout center;\n");
        query
    }
}

impl fmt::Display for PlaceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlaceKind {
    type Err = InvalidPlaceKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "restaurants" | "restaurant" | "food" => Ok(PlaceKind::Restaurants),
            "accommodation" | "hotels" | "hotel" => Ok(PlaceKind::Accommodation),
            "sights" | "sightseeing" => Ok(PlaceKind::Sights),
            "secret" | "secrets" | "hidden" => Ok(PlaceKind::Secret),
            _ => Err(InvalidPlaceKind {
                input: s.to_string(),
            }),
        }
    }
}
