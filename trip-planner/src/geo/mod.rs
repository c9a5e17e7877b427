//! Geographic primitives.
//!
//! Validated coordinates and great-circle math. Everything here is pure
//! and allocation-free.

mod coordinate;
mod distance;

pub use coordinate::{Coordinate, InvalidCoordinate};
pub use distance::{EARTH_RADIUS_KM, distance_km, initial_bearing_degrees, to_radians};
