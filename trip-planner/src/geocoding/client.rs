//! Nominatim HTTP client.
//!
//! Nominatim's usage policy requires an identifying User-Agent and allows
//! roughly one request per second; this client sends exactly one request
//! per lookup and leaves throttling to the caching layer above it.

use reqwest::header::{ACCEPT_LANGUAGE, HeaderMap, HeaderValue, USER_AGENT};

use crate::domain::GeocodeResult;
use crate::geo::Coordinate;

use super::error::GeocodeError;
use super::types::{NominatimPlace, ReverseResponse};
use super::{Geocoder, normalize_query};

/// Default base URL for the public Nominatim instance.
const DEFAULT_BASE_URL: &str = "https://nominatim.openstreetmap.org";

/// Default User-Agent sent with every request.
const DEFAULT_USER_AGENT: &str = concat!("trip-planner/", env!("CARGO_PKG_VERSION"));

/// Configuration for the Nominatim client.
#[derive(Debug, Clone)]
pub struct NominatimConfig {
    /// Base URL for the API
    pub base_url: String,
    /// User-Agent identifying the application
    pub user_agent: String,
    /// Preferred language for display names (Accept-Language)
    pub language: Option<String>,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for NominatimConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            language: None,
            timeout_secs: 30,
        }
    }
}

impl NominatimConfig {
    /// Create a new config with the given User-Agent.
    pub fn new(user_agent: impl Into<String>) -> Self {
        Self {
            user_agent: user_agent.into(),
            ..Self::default()
        }
    }

    /// Set a custom base URL (for testing or a self-hosted instance).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the preferred response language.
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Client for the Nominatim search and reverse APIs.
#[derive(Debug, Clone)]
pub struct NominatimClient {
    http: reqwest::Client,
    base_url: String,
}

impl NominatimClient {
    /// Create a new Nominatim client.
    pub fn new(config: NominatimConfig) -> Result<Self, GeocodeError> {
        let mut headers = HeaderMap::new();

        let user_agent =
            HeaderValue::from_str(&config.user_agent).map_err(|_| GeocodeError::Api {
                status: 0,
                message: "Invalid User-Agent format".to_string(),
            })?;
        headers.insert(USER_AGENT, user_agent);

        if let Some(language) = &config.language {
            let language = HeaderValue::from_str(language).map_err(|_| GeocodeError::Api {
                status: 0,
                message: "Invalid language format".to_string(),
            })?;
            headers.insert(ACCEPT_LANGUAGE, language);
        }

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    /// Send a GET request and return the body of a successful response.
    async fn get(&self, path: &str, query: &[(&str, String)]) -> Result<String, GeocodeError> {
        let url = format!("{}/{}", self.base_url, path);

        let response = self.http.get(&url).query(query).send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(GeocodeError::Unauthorized);
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(GeocodeError::RateLimited);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GeocodeError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        Ok(response.text().await?)
    }

    /// Search for a place by name, returning the first candidate.
    pub async fn search(&self, query: &str) -> Result<GeocodeResult, GeocodeError> {
        let query = normalize_query(query)?;

        let body = self
            .get(
                "search",
                &[
                    ("q", query.to_string()),
                    ("format", "jsonv2".to_string()),
                    ("limit", "1".to_string()),
                    ("addressdetails", "1".to_string()),
                ],
            )
            .await?;

        let places: Vec<NominatimPlace> =
            serde_json::from_str(&body).map_err(|e| GeocodeError::Json {
                message: e.to_string(),
            })?;

        let first = places
            .into_iter()
            .next()
            .ok_or_else(|| GeocodeError::NotFound {
                query: query.to_string(),
            })?;

        GeocodeResult::try_from(first)
    }

    /// Find the place nearest to a coordinate.
    pub async fn reverse(&self, coordinate: Coordinate) -> Result<GeocodeResult, GeocodeError> {
        let body = self
            .get(
                "reverse",
                &[
                    ("lat", coordinate.latitude().to_string()),
                    ("lon", coordinate.longitude().to_string()),
                    ("format", "jsonv2".to_string()),
                    ("addressdetails", "1".to_string()),
                ],
            )
            .await?;

        let response: ReverseResponse =
            serde_json::from_str(&body).map_err(|e| GeocodeError::Json {
                message: e.to_string(),
            })?;

        match response {
            ReverseResponse::Place(place) => GeocodeResult::try_from(*place),
            ReverseResponse::Error { .. } => Err(GeocodeError::NotFound {
                query: coordinate.to_string(),
            }),
        }
    }
}

impl Geocoder for NominatimClient {
    async fn geocode(&self, query: &str) -> Result<GeocodeResult, GeocodeError> {
        self.search(query).await
    }

    async fn reverse_geocode(&self, coordinate: Coordinate) -> Result<GeocodeResult, GeocodeError> {
        self.reverse(coordinate).await
    }
}
