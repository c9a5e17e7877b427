//! Transport modes and their speed/cost constants.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when parsing an unrecognised transport mode.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown transport mode: {input:?} (expected car, bicycle, walking, train or bus)")]
pub struct InvalidMode {
    pub input: String,
}

/// How the traveller gets from origin to destination.
///
/// Each mode has exactly one average speed and one per-kilometre cost rate.
/// A missing mode defaults to [`TransportMode::Car`]; an unrecognised one is
/// an error rather than a silent fallback.
///
/// # Examples
///
/// ```
/// use trip_planner::domain::TransportMode;
///
/// let mode: TransportMode = "Bike".parse().unwrap();
/// assert_eq!(mode, TransportMode::Bicycle);
/// assert_eq!(mode.speed_kmh(), 20.0);
///
/// assert!("hovercraft".parse::<TransportMode>().is_err());
/// assert_eq!(TransportMode::default(), TransportMode::Car);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportMode {
    #[default]
    Car,
    Bicycle,
    Walking,
    Train,
    Bus,
}

impl TransportMode {
    /// Every mode, in a stable order.
    pub const ALL: [TransportMode; 5] = [
        TransportMode::Car,
        TransportMode::Bicycle,
        TransportMode::Walking,
        TransportMode::Train,
        TransportMode::Bus,
    ];

    /// Average travel speed in km/h.
    pub fn speed_kmh(self) -> f64 {
        match self {
            TransportMode::Car => 60.0,
            TransportMode::Bicycle => 20.0,
            TransportMode::Walking => 5.0,
            TransportMode::Train => 80.0,
            TransportMode::Bus => 50.0,
        }
    }

    /// Cost per kilometre in whole currency units.
    pub fn cost_per_km(self) -> f64 {
        match self {
            TransportMode::Car => 3.5,
            TransportMode::Bicycle => 0.5,
            TransportMode::Walking => 0.0,
            TransportMode::Train => 1.2,
            TransportMode::Bus => 1.0,
        }
    }

    /// Canonical lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            TransportMode::Car => "car",
            TransportMode::Bicycle => "bicycle",
            TransportMode::Walking => "walking",
            TransportMode::Train => "train",
            TransportMode::Bus => "bus",
        }
    }
}

impl FromStr for TransportMode {
    type Err = InvalidMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "car" | "auto" => Ok(TransportMode::Car),
            "bicycle" | "bike" => Ok(TransportMode::Bicycle),
            "walking" | "walk" => Ok(TransportMode::Walking),
            "train" => Ok(TransportMode::Train),
            "bus" => Ok(TransportMode::Bus),
            _ => Err(InvalidMode {
                input: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn speed_table() {
        assert_eq!(TransportMode::Car.speed_kmh(), 60.0);
        assert_eq!(TransportMode::Bicycle.speed_kmh(), 20.0);
        assert_eq!(TransportMode::Walking.speed_kmh(), 5.0);
        assert_eq!(TransportMode::Train.speed_kmh(), 80.0);
        assert_eq!(TransportMode::Bus.speed_kmh(), 50.0);
    }

    #[test]
    fn rate_table() {
        assert_eq!(TransportMode::Car.cost_per_km(), 3.5);
        assert_eq!(TransportMode::Bicycle.cost_per_km(), 0.5);
        assert_eq!(TransportMode::Walking.cost_per_km(), 0.0);
        assert_eq!(TransportMode::Train.cost_per_km(), 1.2);
        assert_eq!(TransportMode::Bus.cost_per_km(), 1.0);
    }

    #[test]
    fn every_mode_has_positive_speed() {
        for mode in TransportMode::ALL {
            assert!(mode.speed_kmh() > 0.0, "{mode} has no speed");
        }
    }

    #[test]
    fn parse_canonical_names_roundtrip() {
        for mode in TransportMode::ALL {
            assert_eq!(mode.as_str().parse::<TransportMode>(), Ok(mode));
        }
    }

    #[test]
    fn parse_aliases_and_case() {
        assert_eq!("auto".parse::<TransportMode>(), Ok(TransportMode::Car));
        assert_eq!(" CAR ".parse::<TransportMode>(), Ok(TransportMode::Car));
        assert_eq!("Walk".parse::<TransportMode>(), Ok(TransportMode::Walking));
        assert_eq!("BIKE".parse::<TransportMode>(), Ok(TransportMode::Bicycle));
    }

    #[test]
    fn parse_unknown_is_error() {
        let err = "ferry".parse::<TransportMode>().unwrap_err();
        assert_eq!(err.input, "ferry");
        assert!(err.to_string().contains("\"ferry\""));
        assert!("".parse::<TransportMode>().is_err());
    }

    #[test]
    fn serde_uses_lowercase() {
        assert_eq!(
            serde_json::to_string(&TransportMode::Bicycle).unwrap(),
            "\"bicycle\""
        );
        let mode: TransportMode = serde_json::from_str("\"train\"").unwrap();
        assert_eq!(mode, TransportMode::Train);
    }
}
