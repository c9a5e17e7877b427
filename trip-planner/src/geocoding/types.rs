//! Nominatim response DTOs.
//!
//! Nominatim returns coordinates as decimal strings. Only the fields the
//! planner uses are modelled; everything else is ignored.

use serde::{Deserialize, Serialize};

use crate::domain::{AddressComponents, GeocodeResult, PlaceCategory};
use crate::geo::Coordinate;

use super::error::GeocodeError;

/// One candidate from `/search` or the body of `/reverse` (format `jsonv2`).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NominatimPlace {
    pub lat: String,
    pub lon: String,
    pub display_name: String,
    /// OSM class, e.g. "place", "amenity"
    #[serde(default)]
    pub category: Option<String>,
    /// OSM type, e.g. "city", "restaurant"
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    /// How Nominatim would label this in an address, e.g. "city"
    #[serde(default)]
    pub addresstype: Option<String>,
    #[serde(default)]
    pub address: Option<NominatimAddress>,
}

/// Address breakdown returned with `addressdetails=1`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct NominatimAddress {
    pub road: Option<String>,
    pub house_number: Option<String>,
    pub city: Option<String>,
    pub town: Option<String>,
    pub village: Option<String>,
    pub municipality: Option<String>,
    pub postcode: Option<String>,
    pub country: Option<String>,
    pub country_code: Option<String>,
}

/// `/reverse` answers with either a place or `{"error": "..."}`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum ReverseResponse {
    Place(Box<NominatimPlace>),
    Error { error: String },
}

impl From<NominatimAddress> for AddressComponents {
    fn from(a: NominatimAddress) -> Self {
        // Nominatim puts the settlement under whichever key matches its size.
        let city = a.city.or(a.town).or(a.village).or(a.municipality);
        AddressComponents {
            street: a.road,
            house_number: a.house_number,
            city,
            postcode: a.postcode,
            country: a.country,
            country_code: a.country_code,
        }
    }
}

impl TryFrom<NominatimPlace> for GeocodeResult {
    type Error = GeocodeError;

    fn try_from(place: NominatimPlace) -> Result<Self, Self::Error> {
        let coordinate = Coordinate::parse(&place.lat, &place.lon)?;
        let kind = place.addresstype.as_deref().or(place.kind.as_deref());
        let category = PlaceCategory::from_osm(place.category.as_deref(), kind);

        let mut result = GeocodeResult::new(coordinate, place.display_name).with_category(category);
        if let Some(address) = place.address {
            result = result.with_address(address.into());
        }
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEARCH_BODY: &str = r#"[
        {
            "place_id": 123,
            "lat": "55.6867243",
            "lon": "12.5700724",
            "category": "boundary",
            "type": "administrative",
            "addresstype": "city",
            "name": "København",
            "display_name": "København, Københavns Kommune, Region Hovedstaden, Danmark",
            "address": {
                "city": "København",
                "municipality": "Københavns Kommune",
                "country": "Danmark",
                "country_code": "dk"
            }
        }
    ]"#;

    #[test]
    fn parse_search_response() {
        let places: Vec<NominatimPlace> = serde_json::from_str(SEARCH_BODY).unwrap();
        assert_eq!(places.len(), 1);

        let result = GeocodeResult::try_from(places[0].clone()).unwrap();
        assert_eq!(result.coordinate.latitude(), 55.6867243);
        assert_eq!(result.category, PlaceCategory::City);
        assert_eq!(result.city(), Some("København"));

        let address = result.address.unwrap();
        assert_eq!(address.country.as_deref(), Some("Danmark"));
        assert_eq!(address.country_code.as_deref(), Some("dk"));
        assert_eq!(address.street, None);
    }

    #[test]
    fn town_counts_as_city() {
        let address = NominatimAddress {
            town: Some("Skagen".into()),
            ..Default::default()
        };
        let components: AddressComponents = address.into();
        assert_eq!(components.city.as_deref(), Some("Skagen"));
    }

    #[test]
    fn minimal_place_without_address() {
        let json = r#"{"lat": "1.5", "lon": "2.5", "display_name": "Somewhere"}"#;
        let place: NominatimPlace = serde_json::from_str(json).unwrap();
        let result = GeocodeResult::try_from(place).unwrap();
        assert_eq!(result.address, None);
        assert_eq!(result.category, PlaceCategory::Unknown);
    }

    #[test]
    fn bad_coordinate_is_rejected() {
        let json = r#"{"lat": "95.0", "lon": "2.5", "display_name": "Nowhere"}"#;
        let place: NominatimPlace = serde_json::from_str(json).unwrap();
        assert!(matches!(
            GeocodeResult::try_from(place),
            Err(GeocodeError::BadCoordinate(_))
        ));
    }

    #[test]
    fn reverse_error_body() {
        let json = r#"{"error": "Unable to geocode"}"#;
        let parsed: ReverseResponse = serde_json::from_str(json).unwrap();
        assert!(matches!(parsed, ReverseResponse::Error { error } if error == "Unable to geocode"));
    }

    #[test]
    fn reverse_place_body() {
        let json = r#"{"lat": "56.1", "lon": "10.2", "display_name": "Aarhus", "addresstype": "city", "category": "place"}"#;
        let parsed: ReverseResponse = serde_json::from_str(json).unwrap();
        assert!(matches!(parsed, ReverseResponse::Place(_)));
    }
}
