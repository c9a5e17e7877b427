//! Weather client error types.

/// Errors from fetching weather.
#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    /// No API key configured
    #[error("weather lookups are not configured")]
    NotConfigured,

    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid API key
    #[error("unauthorized: check OPENWEATHER_API_KEY")]
    Unauthorized,

    /// API returned an error status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Failed to parse response JSON
    #[error("JSON parse error: {message}")]
    Json { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        assert_eq!(
            WeatherError::NotConfigured.to_string(),
            "weather lookups are not configured"
        );
        let err = WeatherError::Api {
            status: 500,
            message: "boom".into(),
        };
        assert_eq!(err.to_string(), "API error 500: boom");
    }
}
