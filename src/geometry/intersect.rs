use crate::domain::GeoPoint;

/// True when `a`, `b`, `c` are in strictly counter-clockwise order
/// (raw lat/lon degrees treated as a plane).
pub fn ccw(a: &GeoPoint, b: &GeoPoint, c: &GeoPoint) -> bool {
    (c.lon - a.lon) * (b.lat - a.lat) > (b.lon - a.lon) * (c.lat - a.lat)
}

/// True when segment `a`-`b` crosses segment `c`-`d`.
///
/// Segments that only share an endpoint, or are collinear, do not count.
pub fn segments_intersect(a: &GeoPoint, b: &GeoPoint, c: &GeoPoint, d: &GeoPoint) -> bool {
    ccw(a, c, d) != ccw(b, c, d) && ccw(a, b, c) != ccw(a, b, d)
}
