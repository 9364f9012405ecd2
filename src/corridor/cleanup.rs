//! Rail repair passes.
//!
//! Both passes scan forward from every position through a bounded window and
//! excise points in place. Indices shift on every excision, so the scans are
//! strictly sequential.

use crate::domain::GeoPoint;
use crate::geometry::{distance_meters, segments_intersect};

/// Bounds for the forward scan from one position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScanWindow {
    /// Scanning stops once more than this many points have been examined
    pub max_points: usize,
    /// Scanning stops at the first point farther than this from the start
    pub reach_m: f64,
}

impl ScanWindow {
    pub fn new(max_points: usize, distance_km: f64, reach_factor: f64) -> Self {
        Self {
            max_points,
            reach_m: reach_factor * distance_km * 1000.0,
        }
    }

    fn exceeded(&self, examined: usize, start: &GeoPoint, current: &GeoPoint) -> bool {
        examined > self.max_points || distance_meters(start, current) > self.reach_m
    }
}

/// Cut self-intersections out of a polyline.
///
/// For every segment `(pos, pos + 1)` the following segments inside the window
/// are tested for a crossing. On a hit everything from `pos + 1` up to the
/// start of the crossing segment is removed and scanning resumes one position
/// earlier, so nested loops collapse too. Returns the number of removed points.
pub fn remove_loops(points: &mut Vec<GeoPoint>, window: ScanWindow) -> usize {
    let mut removed = 0;
    let mut pos = 0;

    while pos + 2 < points.len() {
        match find_loop(points, pos, window) {
            Some(count) => {
                log::debug!(
                    "removing loop of {} points after index {} ({:?})",
                    count,
                    pos,
                    points[pos]
                );
                points.drain(pos + 1..pos + 1 + count);
                removed += count;
                pos = pos.saturating_sub(1);
            }
            None => pos += 1,
        }
    }

    removed
}

/// Number of points to drop after `pos`, if a crossing was found.
fn find_loop(points: &[GeoPoint], pos: usize, window: ScanWindow) -> Option<usize> {
    let start = &points[pos];
    let next = &points[pos + 1];
    let mut previous = next;

    for (examined, current) in points[pos + 2..].iter().enumerate() {
        if window.exceeded(examined, start, current) {
            break;
        }
        if segments_intersect(start, next, current, previous) {
            return Some(examined + 1);
        }
        previous = current;
    }
    None
}

/// Cut short inward spikes out of a polyline.
///
/// A spike is detected when a point inside the window lies closer to
/// `points[pos]` than `points[pos + 1]` does; the points in between are
/// removed. Returns the number of removed points.
pub fn remove_spikes(points: &mut Vec<GeoPoint>, window: ScanWindow) -> usize {
    let mut removed = 0;
    let mut pos = 0;

    while pos + 2 < points.len() {
        if let Some(count) = find_spike(points, pos, window) {
            log::debug!("removing spike of {} points after index {}", count, pos);
            points.drain(pos + 1..pos + 1 + count);
            removed += count;
        }
        pos += 1;
    }

    removed
}

fn find_spike(points: &[GeoPoint], pos: usize, window: ScanWindow) -> Option<usize> {
    let start = &points[pos];
    let start_distance = distance_meters(start, &points[pos + 1]);

    for (examined, current) in points[pos + 2..].iter().enumerate() {
        if window.exceeded(examined, start, current) {
            break;
        }
        if distance_meters(start, current) < start_distance {
            return Some(examined + 1);
        }
    }
    None
}
