use geo::{Contains, LineString, Polygon};

use super::{Bounds, GeoPoint};
use crate::geometry::segments_intersect;

/// Closed polygon around a track at a fixed lateral distance.
///
/// The ring is closed implicitly: the last point connects back to the first
/// and the first point is never repeated.
#[derive(Debug, Clone, PartialEq)]
pub struct Corridor {
    points: Vec<GeoPoint>,
    distance_km: f64,
}

impl Corridor {
    pub(crate) fn new(points: Vec<GeoPoint>, distance_km: f64) -> Self {
        Self {
            points,
            distance_km,
        }
    }

    pub(crate) fn empty(distance_km: f64) -> Self {
        Self::new(Vec::new(), distance_km)
    }

    pub fn points(&self) -> &[GeoPoint] {
        &self.points
    }

    /// Half-width the corridor was built with
    pub fn distance_km(&self) -> f64 {
        self.distance_km
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, GeoPoint> {
        self.points.iter()
    }

    pub fn bounds(&self) -> Option<Bounds> {
        Bounds::from_points(&self.points)
    }

    /// Convert to a `geo` polygon with x = lon, y = lat.
    pub fn to_polygon(&self) -> Polygon<f64> {
        let ring: LineString<f64> = self
            .points
            .iter()
            .map(|p| geo::coord! { x: p.lon, y: p.lat })
            .collect();
        Polygon::new(ring, Vec::new())
    }

    /// Check whether a point lies strictly inside the corridor.
    pub fn contains(&self, point: &GeoPoint) -> bool {
        if self.points.len() < 3 {
            return false;
        }
        self.to_polygon()
            .contains(&geo::Point::new(point.lon, point.lat))
    }

    /// Pairs of non-adjacent edges that cross each other.
    ///
    /// Edge `i` runs from point `i` to point `i + 1` (wrapping to 0).
    pub fn self_intersections(&self) -> Vec<(usize, usize)> {
        let n = self.points.len();
        let mut found = Vec::new();
        if n < 4 {
            return found;
        }

        let edge = |i: usize| (&self.points[i], &self.points[(i + 1) % n]);
        for i in 0..n {
            for j in i + 2..n {
                if i == 0 && j == n - 1 {
                    continue;
                }
                let (a, b) = edge(i);
                let (c, d) = edge(j);
                if segments_intersect(a, b, c, d) {
                    found.push((i, j));
                }
            }
        }
        found
    }

    /// Overpass `poly:` filter for this corridor.
    pub fn to_poly_filter(&self) -> String {
        crate::export::poly_filter(self)
    }
}

impl<'a> IntoIterator for &'a Corridor {
    type Item = &'a GeoPoint;
    type IntoIter = std::slice::Iter<'a, GeoPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
