//! Current weather at a location.
//!
//! Weather is supplementary: the planner attaches it when available and
//! carries on without it otherwise.

mod client;
mod error;

use std::future::Future;

pub use client::{OpenWeatherClient, OpenWeatherConfig};
pub use error::WeatherError;

use crate::domain::WeatherInfo;
use crate::geo::Coordinate;

/// Supplies current weather conditions.
pub trait WeatherProvider {
    fn current(
        &self,
        coordinate: Coordinate,
    ) -> impl Future<Output = Result<WeatherInfo, WeatherError>> + Send;
}

/// The weather source selected at startup.
#[derive(Debug, Clone)]
pub enum WeatherBackend {
    OpenWeather(OpenWeatherClient),
    /// No API key configured.
    Disabled,
}

impl WeatherProvider for WeatherBackend {
    async fn current(&self, coordinate: Coordinate) -> Result<WeatherInfo, WeatherError> {
        match self {
            WeatherBackend::OpenWeather(client) => client.current(coordinate).await,
            WeatherBackend::Disabled => Err(WeatherError::NotConfigured),
        }
    }
}
