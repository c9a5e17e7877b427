//! Overpass HTTP client.
//!
//! One POST per search. Overpass rejects clients that run too many
//! queries at once with 429 and answers 504 when it is overloaded; both
//! surface as errors rather than empty results.

use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};

use crate::domain::NearbyPlace;
use crate::geo::Coordinate;

use super::error::PlacesError;
use super::kind::PlaceKind;
use super::types::OverpassResponse;
use super::PlaceFinder;

/// Default interpreter endpoint of the main public Overpass instance.
const DEFAULT_BASE_URL: &str = "https://overpass-api.de/api/interpreter";

/// Configuration for the Overpass client.
#[derive(Debug, Clone)]
pub struct OverpassConfig {
    /// Interpreter URL
    pub base_url: String,
    /// User-Agent identifying the application
    pub user_agent: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl OverpassConfig {
    /// Create a new config with the given User-Agent.
    pub fn new(user_agent: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: user_agent.into(),
            timeout_secs: 30,
        }
    }

    /// Set a custom interpreter URL (for testing or a private instance).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Client for the Overpass interpreter.
#[derive(Debug, Clone)]
pub struct OverpassClient {
    http: reqwest::Client,
    base_url: String,
}

impl OverpassClient {
    /// Create a new Overpass client.
    pub fn new(config: OverpassConfig) -> Result<Self, PlacesError> {
        let mut headers = HeaderMap::new();
        let user_agent =
            HeaderValue::from_str(&config.user_agent).map_err(|_| PlacesError::Api {
                status: 0,
                message: "Invalid User-Agent format".to_string(),
            })?;
        headers.insert(USER_AGENT, user_agent);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    /// Run an Overpass QL query and return the body of a successful response.
    async fn post(&self, query: String) -> Result<String, PlacesError> {
        let response = self
            .http
            .post(&self.base_url)
            .form(&[("data", query)])
            .send()
            .await?;
        let status = response.status();

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(PlacesError::RateLimited);
        }

        if status == reqwest::StatusCode::GATEWAY_TIMEOUT {
            return Err(PlacesError::Timeout);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PlacesError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        Ok(response.text().await?)
    }

    /// Search for places of `kind` around `centre`.
    pub async fn search(
        &self,
        kind: PlaceKind,
        centre: Coordinate,
        radius_m: u32,
    ) -> Result<Vec<NearbyPlace>, PlacesError> {
        let body = self.post(kind.overpass_query(centre, radius_m)).await?;

        let response: OverpassResponse =
            serde_json::from_str(&body).map_err(|e| PlacesError::Json {
                message: e.to_string(),
            })?;

        let places = response
            .elements
            .into_iter()
            .filter_map(|element| element.into_place(centre))
            .take(kind.limit().unwrap_or(usize::MAX))
            .collect();

        Ok(places)
    }
}

impl PlaceFinder for OverpassClient {
    async fn nearby(
        &self,
        kind: PlaceKind,
        centre: Coordinate,
        radius_m: u32,
    ) -> Result<Vec<NearbyPlace>, PlacesError> {
        self.search(kind, centre, radius_m).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::HashMap;

    use axum::Form;
    use axum::Router;
    use axum::http::{HeaderMap as AxumHeaders, StatusCode};
    use axum::routing::post;

    /// Serve a tiny fake Overpass interpreter on an ephemeral port.
    async fn spawn_fake(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}/api/interpreter")
    }

    fn centre() -> Coordinate {
        Coordinate::new(55.6761, 12.5683).unwrap()
    }

    fn fake_overpass() -> Router {
        Router::new().route(
            "/api/interpreter",
            post(
                |headers: AxumHeaders, Form(form): Form<HashMap<String, String>>| async move {
                    assert!(headers.get("user-agent").is_some());
                    let query = form.get("data").cloned().unwrap_or_default();
                    if query.contains(r#""amenity"="restaurant""#) {
                        r#"{"elements":[
                            {"type":"node","id":1,"lat":55.6775,"lon":12.5705,"tags":{"amenity":"restaurant","name":"Schønnemann"}},
                            {"type":"way","id":2,"center":{"lat":55.679,"lon":12.574},"tags":{"amenity":"restaurant","name":"Højbrohus"}},
                            {"type":"relation","id":3,"tags":{"amenity":"restaurant"}}
                        ]}"#
                        .to_string()
                    } else if query.contains(r#""tourism"="artwork""#) {
                        let nodes: Vec<String> = (0..8)
                            .map(|i| {
                                format!(
                                    r#"{{"type":"node","id":{i},"lat":55.69,"lon":12.59,"tags":{{"tourism":"artwork"}}}}"#
                                )
                            })
                            .collect();
                        format!(r#"{{"elements":[{}]}}"#, nodes.join(","))
                    } else {
                        r#"{"elements":[]}"#.to_string()
                    }
                },
            ),
        )
    }

    #[test]
    fn config_builders() {
        let config = OverpassConfig::new("test-agent")
            .with_base_url("http://localhost:8080/api/interpreter/")
            .with_timeout(5);
        assert_eq!(config.base_url, "http://localhost:8080/api/interpreter");
        assert_eq!(config.user_agent, "test-agent");
        assert_eq!(config.timeout_secs, 5);
        assert_eq!(OverpassConfig::new("x").base_url, DEFAULT_BASE_URL);
    }

    #[tokio::test]
    async fn restaurants_without_position_are_dropped() {
        let base = spawn_fake(fake_overpass()).await;
        let client = OverpassClient::new(OverpassConfig::new("test").with_base_url(base)).unwrap();

        let places = client
            .nearby(PlaceKind::Restaurants, centre(), 2000)
            .await
            .unwrap();

        let ids: Vec<u64> = places.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(places[0].name.as_deref(), Some("Schønnemann"));
        assert_eq!(places[0].subtype.as_deref(), Some("restaurant"));
        assert!(places.iter().all(|p| p.distance_km < 2.0));
    }

    #[tokio::test]
    async fn secret_places_are_capped_at_five() {
        let base = spawn_fake(fake_overpass()).await;
        let client = OverpassClient::new(OverpassConfig::new("test").with_base_url(base)).unwrap();

        let places = client.nearby(PlaceKind::Secret, centre(), 6000).await.unwrap();
        assert_eq!(places.len(), 5);
    }

    #[tokio::test]
    async fn empty_result() {
        let base = spawn_fake(fake_overpass()).await;
        let client = OverpassClient::new(OverpassConfig::new("test").with_base_url(base)).unwrap();

        let places = client.nearby(PlaceKind::Sights, centre(), 5000).await.unwrap();
        assert!(places.is_empty());
    }

    #[tokio::test]
    async fn status_codes_map_to_errors() {
        let statuses = [
            (StatusCode::TOO_MANY_REQUESTS, "rate"),
            (StatusCode::GATEWAY_TIMEOUT, "timeout"),
            (StatusCode::BAD_REQUEST, "api"),
        ];
        for (status, expected) in statuses {
            let router = Router::new().route(
                "/api/interpreter",
                post(move || async move { (status, "nope") }),
            );
            let base = spawn_fake(router).await;
            let client =
                OverpassClient::new(OverpassConfig::new("test").with_base_url(base)).unwrap();

            let err = client
                .nearby(PlaceKind::Sights, centre(), 5000)
                .await
                .unwrap_err();
            match expected {
                "rate" => assert!(matches!(err, PlacesError::RateLimited)),
                "timeout" => assert!(matches!(err, PlacesError::Timeout)),
                _ => assert!(
                    matches!(err, PlacesError::Api { status: 400, ref message } if message == "nope")
                ),
            }
        }
    }

    #[tokio::test]
    async fn non_json_body_is_an_error() {
        let router = Router::new().route(
            "/api/interpreter",
            post(|| async { "<html>runtime error</html>" }),
        );
        let base = spawn_fake(router).await;
        let client = OverpassClient::new(OverpassConfig::new("test").with_base_url(base)).unwrap();

        let err = client
            .nearby(PlaceKind::Restaurants, centre(), 2000)
            .await
            .unwrap_err();
        assert!(matches!(err, PlacesError::Json { .. }));
    }
}
