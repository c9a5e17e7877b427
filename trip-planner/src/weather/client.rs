//! OpenWeatherMap current-weather client.

use serde::Deserialize;

use crate::domain::WeatherInfo;
use crate::geo::Coordinate;

use super::WeatherProvider;
use super::error::WeatherError;

/// Default base URL for the OpenWeatherMap 2.5 API.
const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";

/// Configuration for the OpenWeatherMap client.
#[derive(Debug, Clone)]
pub struct OpenWeatherConfig {
    /// API key sent as the `appid` query parameter
    pub api_key: String,
    /// Base URL for the API
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl OpenWeatherConfig {
    /// Create a new config with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 10,
        }
    }

    /// Set a custom base URL (for testing).
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

#[derive(Debug, Deserialize)]
struct CurrentWeatherResponse {
    main: MainReadings,
    #[serde(default)]
    weather: Vec<Condition>,
}

#[derive(Debug, Deserialize)]
struct MainReadings {
    temp: f64,
}

#[derive(Debug, Deserialize)]
struct Condition {
    description: String,
    icon: String,
}

impl From<CurrentWeatherResponse> for WeatherInfo {
    fn from(response: CurrentWeatherResponse) -> Self {
        let (description, icon) = response
            .weather
            .into_iter()
            .next()
            .map(|c| (c.description, c.icon))
            .unwrap_or_default();

        WeatherInfo {
            temperature_celsius: response.main.temp,
            description,
            icon,
        }
    }
}

/// Client for the OpenWeatherMap current weather endpoint.
#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl OpenWeatherClient {
    /// Create a new OpenWeatherMap client.
    pub fn new(config: OpenWeatherConfig) -> Result<Self, WeatherError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
            api_key: config.api_key,
        })
    }

    /// Fetch current conditions in metric units.
    pub async fn fetch_current(&self, coordinate: Coordinate) -> Result<WeatherInfo, WeatherError> {
        let url = format!("{}/weather", self.base_url);

        let response = self
            .http
            .get(&url)
            .query(&[
                ("lat", coordinate.latitude().to_string()),
                ("lon", coordinate.longitude().to_string()),
                ("appid", self.api_key.clone()),
                ("units", "metric".to_string()),
            ])
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(WeatherError::Unauthorized);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(WeatherError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        let parsed: CurrentWeatherResponse =
            serde_json::from_str(&body).map_err(|e| WeatherError::Json {
                message: e.to_string(),
            })?;

        Ok(parsed.into())
    }
}

impl WeatherProvider for OpenWeatherClient {
    async fn current(&self, coordinate: Coordinate) -> Result<WeatherInfo, WeatherError> {
        self.fetch_current(coordinate).await
    }
}
