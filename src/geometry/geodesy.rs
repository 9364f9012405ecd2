//! Spherical-earth primitives on WGS84 degrees.
//!
//! Everything here assumes a sphere of radius [`EARTH_RADIUS_M`]; that is
//! plenty for corridor widths of a few kilometers.

use crate::domain::GeoPoint;

/// Mean earth radius in meters
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Offsets whose bearing differs from the route by more than this are folded back
pub const FOLD_BACK_ANGLE_DEG: f64 = 120.0;

/// Great-circle distance in meters (haversine formula).
pub fn distance_meters(a: &GeoPoint, b: &GeoPoint) -> f64 {
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let sin_dlat = ((b.lat - a.lat).to_radians() / 2.0).sin();
    let sin_dlon = ((b.lon - a.lon).to_radians() / 2.0).sin();

    let h = sin_dlat * sin_dlat + lat1.cos() * lat2.cos() * sin_dlon * sin_dlon;
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_M * c
}

/// Initial compass bearing from `from` to `to`.
///
/// Result is in (-180, 180], 0 = north, clockwise positive. The value is
/// meaningless when both points are equal.
pub fn bearing_degrees(from: &GeoPoint, to: &GeoPoint) -> f64 {
    let lat1 = from.lat.to_radians();
    let lat2 = to.lat.to_radians();
    let dlon = (to.lon - from.lon).to_radians();

    let y = dlon.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * dlon.cos();

    normalize_bearing(y.atan2(x).to_degrees())
}

/// Point reached after travelling `distance_km` along `bearing` from `origin`.
///
/// Returns `None` when the computation degenerates to a non-finite value.
/// Longitudes are not wrapped back into [-180, 180].
pub fn destination_point(origin: &GeoPoint, bearing: f64, distance_km: f64) -> Option<GeoPoint> {
    let angular = distance_km * 1000.0 / EARTH_RADIUS_M;
    let bearing = bearing.to_radians();
    let lat1 = origin.lat.to_radians();
    let lon1 = origin.lon.to_radians();

    let lat2 = (lat1.sin() * angular.cos() + lat1.cos() * angular.sin() * bearing.cos()).asin();
    let lon2 = lon1
        + (bearing.sin() * angular.sin() * lat1.cos())
            .atan2(angular.cos() - lat1.sin() * lat2.sin());

    let point = GeoPoint::new(lat2.to_degrees(), lon2.to_degrees());
    if point.lat.is_finite() && point.lon.is_finite() {
        Some(point)
    } else {
        None
    }
}

/// Absolute difference between two bearings, reduced to [0, 180].
pub fn bearing_difference(a: f64, b: f64) -> f64 {
    let diff = (a - b).abs() % 360.0;
    if diff > 180.0 { 360.0 - diff } else { diff }
}

/// True when `actual` deviates from `expected` by more than `max_angle` degrees.
pub fn angular_deviation(expected: f64, actual: f64, max_angle: f64) -> bool {
    bearing_difference(expected, actual) > max_angle
}

fn normalize_bearing(deg: f64) -> f64 {
    let b = deg.rem_euclid(360.0);
    if b > 180.0 { b - 360.0 } else { b }
}
