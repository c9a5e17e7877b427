//! Nearby-place search error types.

/// Errors from searching for nearby places.
#[derive(Debug, thiserror::Error)]
pub enum PlacesError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Too many concurrent queries from this client
    #[error("rate limited by Overpass")]
    RateLimited,

    /// The server gave up on the query (Overpass answers 504 under load)
    #[error("Overpass query timed out")]
    Timeout,

    /// API returned an error status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Failed to parse response JSON
    #[error("JSON parse error: {message}")]
    Json { message: String },

    /// Mock place data could not be loaded
    #[error("mock data error: {message}")]
    MockData { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = PlacesError::Api {
            status: 400,
            message: "parse error".into(),
        };
        assert_eq!(err.to_string(), "API error 400: parse error");
        assert_eq!(PlacesError::Timeout.to_string(), "Overpass query timed out");
    }
}
