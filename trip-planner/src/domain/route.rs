//! Building blocks of a planned route.
//!
//! These are plain values assembled by the planner. None of them are
//! mutated after construction.

use serde::{Deserialize, Serialize};

/// Position of a step within the route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepKind {
    Start,
    Main,
    End,
}

/// One instruction in the route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteStep {
    pub instruction: String,
    pub distance_km: f64,
    pub duration_minutes: f64,
    pub kind: StepKind,
}

impl RouteStep {
    /// A zero-length step (the start and end markers).
    pub fn marker(kind: StepKind, instruction: impl Into<String>) -> Self {
        Self {
            instruction: instruction.into(),
            distance_km: 0.0,
            duration_minutes: 0.0,
            kind,
        }
    }
}

/// A synthetic variant of the base route, for comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlternativeRoute {
    pub label: String,
    pub distance_km: f64,
    pub duration_minutes: f64,
    pub cost: u64,
    /// Always within [0, 100].
    pub reliability_percent: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrafficLevel {
    Light,
    Medium,
    Heavy,
}

/// Expected traffic at departure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrafficInfo {
    pub level: TrafficLevel,
    pub delay_minutes: u32,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WarningKind {
    Traffic,
    Distance,
    Time,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

/// Advisory attached to a route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Warning {
    pub kind: WarningKind,
    pub message: String,
    pub severity: Severity,
}

/// Current weather at a location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherInfo {
    pub temperature_celsius: f64,
    pub description: String,
    /// Provider icon code (e.g. "10d").
    pub icon: String,
}

/// Currency used when nothing else is configured.
pub const DEFAULT_CURRENCY: &str = "DKK";

/// Caller-supplied trip state that travels with a planning request.
///
/// Replaces the ambient "current city / current trip" state a UI would
/// otherwise keep globally. The planner never modifies it; it is returned
/// unchanged in the result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripContext {
    /// The city the traveller is currently exploring, if any.
    pub city: Option<String>,
    /// ISO 4217 code the cost figures are expressed in.
    pub currency: String,
}

impl Default for TripContext {
    fn default() -> Self {
        Self {
            city: None,
            currency: DEFAULT_CURRENCY.to_string(),
        }
    }
}

impl TripContext {
    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }
}
