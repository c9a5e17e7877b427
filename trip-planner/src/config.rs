//! Server configuration from environment variables.
//!
//! Every setting has a default except the OpenWeatherMap key; without it
//! weather lookups are disabled. Empty variables count as unset.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

use crate::cache::CacheConfig;
use crate::geocoding::NominatimConfig;
use crate::places::OverpassConfig;
use crate::planner::PlannerConfig;
use crate::weather::OpenWeatherConfig;

const DEFAULT_BIND: ([u8; 4], u16) = ([127, 0, 0, 1], 3000);
const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

/// Error reading configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} has invalid value {value:?}: {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// Everything `main` needs to assemble the server.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind: SocketAddr,
    pub nominatim: NominatimConfig,
    pub overpass: OverpassConfig,
    /// `None` when `OPENWEATHER_API_KEY` is unset.
    pub weather: Option<OpenWeatherConfig>,
    pub cache: CacheConfig,
    pub planner: PlannerConfig,
    /// Serve geocodes from this JSON file instead of Nominatim.
    pub mock_places_file: Option<PathBuf>,
    /// Serve nearby-place searches from this JSON file instead of Overpass.
    pub mock_nearby_file: Option<PathBuf>,
}

impl AppConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read configuration through `lookup`, which maps a variable name to
    /// its value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let bind = parse_or(&var, "TRIP_PLANNER_BIND", SocketAddr::from(DEFAULT_BIND))?;
        let timeout_secs: u64 = parse_or(&var, "HTTP_TIMEOUT_SECS", DEFAULT_HTTP_TIMEOUT_SECS)?;
        if timeout_secs == 0 {
            return Err(invalid("HTTP_TIMEOUT_SECS", "0", "must be positive"));
        }

        let mut nominatim = NominatimConfig::default().with_timeout(timeout_secs);
        if let Some(url) = var("NOMINATIM_BASE_URL") {
            nominatim = nominatim.with_base_url(url);
        }
        if let Some(user_agent) = var("NOMINATIM_USER_AGENT") {
            nominatim.user_agent = user_agent;
        }
        if let Some(language) = var("NOMINATIM_LANGUAGE") {
            nominatim = nominatim.with_language(language.trim());
        }

        let mut overpass = OverpassConfig::new(nominatim.user_agent.clone()).with_timeout(timeout_secs);
        if let Some(url) = var("OVERPASS_BASE_URL") {
            overpass = overpass.with_base_url(url);
        }

        let weather = var("OPENWEATHER_API_KEY").map(|key| {
            let config = OpenWeatherConfig::new(key.trim()).with_timeout(timeout_secs);
            match var("OPENWEATHER_BASE_URL") {
                Some(url) => config.with_base_url(url),
                None => config,
            }
        });

        let defaults = CacheConfig::default();
        let ttl_secs = parse_or(&var, "GEOCODE_CACHE_TTL_SECS", defaults.ttl.as_secs())?;
        let max_capacity = parse_or(&var, "GEOCODE_CACHE_CAPACITY", defaults.max_capacity)?;
        let cache = CacheConfig {
            ttl: Duration::from_secs(ttl_secs),
            max_capacity,
        };

        let planner = if weather.is_some() {
            PlannerConfig::default()
        } else {
            PlannerConfig::without_weather()
        };

        Ok(Self {
            bind,
            nominatim,
            overpass,
            weather,
            cache,
            planner,
            mock_places_file: var("MOCK_PLACES_FILE").map(PathBuf::from),
            mock_nearby_file: var("MOCK_NEARBY_FILE").map(PathBuf::from),
        })
    }
}

/// Parse variable `name`, falling back to `default` when unset.
fn parse_or<T, V>(var: &V, name: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    V: Fn(&str) -> Option<String>,
{
    match var(name) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|e: T::Err| invalid(name, &value, e.to_string())),
        None => Ok(default),
    }
}

fn invalid(var: &'static str, value: &str, reason: impl Into<String>) -> ConfigError {
    ConfigError::Invalid {
        var,
        value: value.to_string(),
        reason: reason.into(),
    }
}
