//! Planner configuration.

use std::time::Duration;

/// Configuration parameters for route planning.
#[derive(Debug, Clone)]
pub struct PlannerConfig {
    /// Whether to look up weather at the origin.
    pub fetch_weather: bool,

    /// How long to wait for weather before giving up (milliseconds).
    /// Weather is optional, so a slow provider must not hold up the plan.
    pub weather_timeout_ms: u64,
}

impl PlannerConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(fetch_weather: bool, weather_timeout_ms: u64) -> Self {
        Self {
            fetch_weather,
            weather_timeout_ms,
        }
    }

    /// Configuration that never looks up weather.
    pub fn without_weather() -> Self {
        Self {
            fetch_weather: false,
            ..Self::default()
        }
    }

    /// Returns the weather timeout as a Duration.
    pub fn weather_timeout(&self) -> Duration {
        Duration::from_millis(self.weather_timeout_ms)
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            fetch_weather: true,
            weather_timeout_ms: 3000,
        }
    }
}
