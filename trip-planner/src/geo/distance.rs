//! Great-circle distance and bearing.

use std::f64::consts::PI;

use super::Coordinate;

/// Mean Earth radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Convert degrees to radians.
pub fn to_radians(degrees: f64) -> f64 {
    degrees * (PI / 180.0)
}

/// Great-circle distance between two coordinates in kilometres (Haversine).
///
/// # Examples
///
/// ```
/// use trip_planner::geo::{Coordinate, distance_km};
///
/// let copenhagen = Coordinate::new(55.6761, 12.5683).unwrap();
/// let aarhus = Coordinate::new(56.1629, 10.2039).unwrap();
///
/// let d = distance_km(copenhagen, aarhus);
/// assert!((d - 157.0).abs() < 2.0);
/// assert_eq!(distance_km(copenhagen, copenhagen), 0.0);
/// ```
pub fn distance_km(a: Coordinate, b: Coordinate) -> f64 {
    let d_lat = to_radians(b.latitude() - a.latitude());
    let d_lon = to_radians(b.longitude() - a.longitude());

    let h = (d_lat / 2.0).sin().powi(2)
        + to_radians(a.latitude()).cos()
            * to_radians(b.latitude()).cos()
            * (d_lon / 2.0).sin().powi(2);

    // Rounding can push h a hair above 1 for antipodal points.
    let h = h.clamp(0.0, 1.0);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c
}

/// Initial compass bearing from `a` towards `b`, in degrees within [0, 360).
///
/// Returns 0 when the points coincide.
pub fn initial_bearing_degrees(a: Coordinate, b: Coordinate) -> f64 {
    let lat1 = to_radians(a.latitude());
    let lat2 = to_radians(b.latitude());
    let d_lon = to_radians(b.longitude() - a.longitude());

    let y = d_lon.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * d_lon.cos();

    if x == 0.0 && y == 0.0 {
        return 0.0;
    }

    let bearing = y.atan2(x).to_degrees().rem_euclid(360.0);
    // rem_euclid rounds tiny negative angles up to exactly 360.
    if bearing >= 360.0 { 0.0 } else { bearing }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coord(lat: f64, lon: f64) -> Coordinate {
        Coordinate::new(lat, lon).unwrap()
    }

    #[test]
    fn radians_conversion() {
        assert_eq!(to_radians(0.0), 0.0);
        assert!((to_radians(180.0) - PI).abs() < 1e-12);
        assert!((to_radians(90.0) - PI / 2.0).abs() < 1e-12);
    }

    #[test]
    fn same_point_is_zero() {
        let cph = coord(55.6761, 12.5683);
        assert_eq!(distance_km(cph, cph), 0.0);
    }

    #[test]
    fn one_degree_of_latitude() {
        // 2πR / 360
        let d = distance_km(coord(0.0, 0.0), coord(1.0, 0.0));
        assert!((d - 111.19).abs() < 0.01, "got {d}");
    }

    #[test]
    fn london_to_paris() {
        let london = coord(51.5074, -0.1278);
        let paris = coord(48.8566, 2.3522);
        let d = distance_km(london, paris);
        assert!((d - 343.5).abs() < 1.0, "got {d}");
    }

    #[test]
    fn antipodal_points() {
        let d = distance_km(coord(0.0, 0.0), coord(0.0, 180.0));
        assert!((d - PI * EARTH_RADIUS_KM).abs() < 1e-6, "got {d}");
    }

    #[test]
    fn bearing_cardinal_directions() {
        let origin = coord(0.0, 0.0);
        assert!((initial_bearing_degrees(origin, coord(1.0, 0.0)) - 0.0).abs() < 1e-9);
        assert!((initial_bearing_degrees(origin, coord(0.0, 1.0)) - 90.0).abs() < 1e-9);
        assert!((initial_bearing_degrees(origin, coord(-1.0, 0.0)) - 180.0).abs() < 1e-9);
        assert!((initial_bearing_degrees(origin, coord(0.0, -1.0)) - 270.0).abs() < 1e-9);
    }

    #[test]
    fn bearing_same_point_is_zero() {
        let cph = coord(55.6761, 12.5683);
        assert_eq!(initial_bearing_degrees(cph, cph), 0.0);
    }
}
