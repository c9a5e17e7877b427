//! Geocoding error types.

use crate::geo::InvalidCoordinate;

/// Errors from resolving a place.
#[derive(Debug, thiserror::Error)]
pub enum GeocodeError {
    /// The query was empty or whitespace only
    #[error("empty place name")]
    EmptyQuery,

    /// The service returned no candidates
    #[error("no place found for {query:?}")]
    NotFound { query: String },

    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Rate limited by the service
    #[error("rate limited by geocoding service")]
    RateLimited,

    /// Request rejected (missing or blocked User-Agent)
    #[error("unauthorized: check NOMINATIM_USER_AGENT")]
    Unauthorized,

    /// API returned an error status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Failed to parse response JSON
    #[error("JSON parse error: {message}")]
    Json { message: String },

    /// The service returned a coordinate outside the valid range
    #[error("bad coordinate in response: {0}")]
    BadCoordinate(#[from] InvalidCoordinate),

    /// Mock place data could not be loaded
    #[error("mock data error: {message}")]
    MockData { message: String },
}

impl GeocodeError {
    /// True when the service answered but had nothing matching.
    pub fn is_no_match(&self) -> bool {
        matches!(self, GeocodeError::EmptyQuery | GeocodeError::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = GeocodeError::NotFound {
            query: "Atlantis".into(),
        };
        assert_eq!(err.to_string(), "no place found for \"Atlantis\"");

        let err = GeocodeError::Api {
            status: 503,
            message: "Service Unavailable".into(),
        };
        assert_eq!(err.to_string(), "API error 503: Service Unavailable");

        assert_eq!(GeocodeError::EmptyQuery.to_string(), "empty place name");
    }

    #[test]
    fn no_match_classification() {
        assert!(GeocodeError::EmptyQuery.is_no_match());
        assert!(GeocodeError::NotFound { query: "x".into() }.is_no_match());
        assert!(!GeocodeError::RateLimited.is_no_match());
    }
}
