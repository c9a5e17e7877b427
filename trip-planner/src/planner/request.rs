//! Planning requests and errors.

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;

use crate::domain::{TransportMode, TripContext};

/// Which end of the route a location belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Endpoint {
    Origin,
    Destination,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Origin => f.write_str("origin"),
            Endpoint::Destination => f.write_str("destination"),
        }
    }
}

/// Error from route planning.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlanError {
    /// A location could not be resolved (no match, or the lookup failed)
    #[error("could not find {which} {query:?}: {reason}")]
    LocationNotFound {
        which: Endpoint,
        query: String,
        reason: String,
    },

    /// Origin and destination name the same place
    #[error("origin and destination are the same ({origin:?})")]
    SameLocation { origin: String, destination: String },

    /// Departure plus travel time falls outside the representable calendar
    #[error("arrival after departing {departure} is out of range")]
    ArrivalOutOfRange { departure: NaiveDateTime },
}

/// Request to plan a route between two named places.
#[derive(Debug, Clone)]
pub struct RouteRequest {
    pub origin: String,
    pub destination: String,
    pub departure_date: NaiveDate,
    pub departure_time: NaiveTime,
    pub transport_mode: TransportMode,
    pub context: TripContext,
}

impl RouteRequest {
    /// Create a new request with a default trip context.
    pub fn new(
        origin: impl Into<String>,
        destination: impl Into<String>,
        departure: NaiveDateTime,
        transport_mode: TransportMode,
    ) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
            departure_date: departure.date(),
            departure_time: departure.time(),
            transport_mode,
            context: TripContext::default(),
        }
    }

    pub fn with_context(mut self, context: TripContext) -> Self {
        self.context = context;
        self
    }

    /// Departure as a single date-time.
    pub fn departure(&self) -> NaiveDateTime {
        self.departure_date.and_time(self.departure_time)
    }

    /// Validate the request.
    ///
    /// Rejects origin/destination pairs that are equal ignoring case and
    /// surrounding whitespace. Blank names pass here and are rejected by
    /// the geocoder.
    pub fn validate(&self) -> Result<(), PlanError> {
        if same_place(&self.origin, &self.destination) {
            return Err(PlanError::SameLocation {
                origin: self.origin.clone(),
                destination: self.destination.clone(),
            });
        }
        Ok(())
    }
}

fn same_place(a: &str, b: &str) -> bool {
    a.trim().to_lowercase() == b.trim().to_lowercase()
}
