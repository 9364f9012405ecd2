//! Planar polyline reduction: radial vertex reduction followed by
//! Douglas-Peucker. Coordinates are treated as flat (x, y) values with no
//! spherical correction.

use geo::{Coord, LineString, Simplify};

/// Simplify a polyline with the given tolerance (in the same units as the coordinates).
///
/// A zero or non-positive tolerance, or an empty input, returns a copy of the
/// input. The first and last points always survive.
pub fn simplify(points: &[Coord<f64>], tolerance: f64) -> Vec<Coord<f64>> {
    if tolerance <= 0.0 || tolerance.is_nan() || points.is_empty() {
        return points.to_vec();
    }

    let reduced = reduce_points(points, tolerance * tolerance);
    LineString::from(reduced).simplify(&tolerance).0
}

/// Distance from `p` to the segment `p1`-`p2`.
pub fn point_to_segment_distance(p: Coord<f64>, p1: Coord<f64>, p2: Coord<f64>) -> f64 {
    sq_segment_distance(p, p1, p2).sqrt()
}

/// Closest point to `p` on the segment `p1`-`p2`, clamped to the segment ends.
pub fn closest_point_on_segment(p: Coord<f64>, p1: Coord<f64>, p2: Coord<f64>) -> Coord<f64> {
    let d = p2 - p1;
    let dot = d.x * d.x + d.y * d.y;
    if dot <= 0.0 {
        return p1;
    }

    let t = ((p.x - p1.x) * d.x + (p.y - p1.y) * d.y) / dot;
    if t > 1.0 {
        p2
    } else if t > 0.0 {
        p1 + d * t
    } else {
        p1
    }
}

fn sq_dist(a: Coord<f64>, b: Coord<f64>) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    dx * dx + dy * dy
}

fn sq_segment_distance(p: Coord<f64>, p1: Coord<f64>, p2: Coord<f64>) -> f64 {
    sq_dist(p, closest_point_on_segment(p, p1, p2))
}

/// Drop points closer than the tolerance to the last kept point.
fn reduce_points(points: &[Coord<f64>], sq_tolerance: f64) -> Vec<Coord<f64>> {
    let mut reduced = vec![points[0]];
    let mut prev = 0;

    for (i, &p) in points.iter().enumerate().skip(1) {
        if sq_dist(p, points[prev]) > sq_tolerance {
            reduced.push(p);
            prev = i;
        }
    }
    if prev < points.len() - 1 {
        reduced.push(points[points.len() - 1]);
    }
    reduced
}
