use crate::config::CorridorConfig;
use crate::domain::{Corridor, GeoPoint};
use crate::error::{Result, TrackboxError};
use crate::geometry::{
    angular_deviation, bearing_degrees, destination_point, distance_meters, simplify,
};

use super::cleanup::{ScanWindow, remove_loops, remove_spikes};

/// Which side of the route a rail runs on, looking along the direction of travel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Bearing offset from the route heading
    fn bearing_offset(self) -> f64 {
        match self {
            Side::Left => -90.0,
            Side::Right => 90.0,
        }
    }
}

/// One side of the corridor while it is being built
#[derive(Debug, Clone)]
pub struct Rail {
    side: Side,
    points: Vec<GeoPoint>,
}

impl Rail {
    pub fn new(side: Side) -> Self {
        Self {
            side,
            points: Vec::new(),
        }
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn points(&self) -> &[GeoPoint] {
        &self.points
    }

    /// Append `candidate` unless it folds back against the route bearing.
    ///
    /// Returns whether the point was accepted.
    pub fn offer(&mut self, candidate: GeoPoint, route_bearing: f64, max_angle: f64) -> bool {
        if let Some(last) = self.points.last() {
            let bearing = bearing_degrees(last, &candidate);
            if angular_deviation(route_bearing, bearing, max_angle) {
                log::debug!(
                    "{:?} rail: dropping fold-back point {:?} (bearing {:.1}, route {:.1})",
                    self.side,
                    candidate,
                    bearing,
                    route_bearing
                );
                return false;
            }
        }
        self.points.push(candidate);
        true
    }
}

/// Builds corridor polygons at a fixed half-width.
///
/// # Algorithm
/// 1. Pre-simplify the track in raw degree space
/// 2. Offset every segment start to the left and right of the route bearing
/// 3. Drop offset points that fold back against the route
/// 4. Remove loops, then spikes, on each rail
/// 5. Close the ring: left rail, final track point, reversed right rail
/// 6. Remove loops once more across the merged ring
#[derive(Debug, Clone)]
pub struct CorridorBuilder {
    distance_km: f64,
    config: CorridorConfig,
}

impl CorridorBuilder {
    /// Create a builder with the default config.
    pub fn new(distance_km: f64) -> Result<Self> {
        Self::with_config(distance_km, CorridorConfig::default())
    }

    pub fn with_config(distance_km: f64, config: CorridorConfig) -> Result<Self> {
        if !(distance_km > 0.0 && distance_km.is_finite()) {
            return Err(TrackboxError::InvalidDistance(distance_km));
        }
        config.validate()?;
        Ok(Self {
            distance_km,
            config,
        })
    }

    pub fn distance_km(&self) -> f64 {
        self.distance_km
    }

    pub fn config(&self) -> &CorridorConfig {
        &self.config
    }

    /// Build the corridor around `track`.
    ///
    /// Tracks with fewer than two points, or with no usable segment, yield an
    /// empty corridor.
    pub fn build(&self, track: &[GeoPoint]) -> Corridor {
        if track.len() < 2 {
            log::debug!("track has {} points, returning empty corridor", track.len());
            return Corridor::empty(self.distance_km);
        }

        let simplified = self.simplify_track(track);
        let (mut left, mut right) = self.offset_rails(&simplified);
        if left.points.is_empty() || right.points.is_empty() {
            log::warn!(
                "no offset points for a {} point track, returning empty corridor",
                track.len()
            );
            return Corridor::empty(self.distance_km);
        }

        self.repair_rail(&mut left);
        self.repair_rail(&mut right);

        let merged = self.merge(left, right, &simplified);
        let mut ring = merged.clone();
        let removed = remove_loops(&mut ring, self.loop_window());
        if ring.len() < 3 {
            log::debug!(
                "final loop pass would leave {} points, keeping merged ring",
                ring.len()
            );
            return Corridor::new(merged, self.distance_km);
        }

        log::debug!(
            "corridor at {} km: {} track points -> {} simplified -> {} ring points ({} removed at seam)",
            self.distance_km,
            track.len(),
            simplified.len(),
            ring.len(),
            removed
        );
        Corridor::new(ring, self.distance_km)
    }

    /// Drop near-duplicate points, treating degrees as planar coordinates.
    pub fn simplify_track(&self, track: &[GeoPoint]) -> Vec<GeoPoint> {
        let planar: Vec<_> = track.iter().map(|p| p.to_planar()).collect();
        simplify(&planar, self.config.simplify_tolerance)
            .into_iter()
            .map(GeoPoint::from_planar)
            .collect()
    }

    /// Offset every segment start to both sides of the route.
    ///
    /// Segments whose offset cannot be computed, or whose ends coincide, are
    /// skipped on both rails.
    pub fn offset_rails(&self, track: &[GeoPoint]) -> (Rail, Rail) {
        let mut left = Rail::new(Side::Left);
        let mut right = Rail::new(Side::Right);

        for segment in track.windows(2) {
            let (point, next) = (&segment[0], &segment[1]);
            if distance_meters(point, next) == 0.0 {
                log::debug!("skipping zero-length segment at {:?}", point);
                continue;
            }

            let route_bearing = bearing_degrees(point, next);
            let offsets = (
                self.offset(point, route_bearing, Side::Left),
                self.offset(point, route_bearing, Side::Right),
            );
            let (Some(l), Some(r)) = offsets else {
                log::warn!("could not offset point {:?}, skipping", point);
                continue;
            };

            left.offer(l, route_bearing, self.config.fold_back_angle);
            right.offer(r, route_bearing, self.config.fold_back_angle);
        }

        (left, right)
    }

    fn offset(&self, point: &GeoPoint, route_bearing: f64, side: Side) -> Option<GeoPoint> {
        destination_point(point, route_bearing + side.bearing_offset(), self.distance_km)
    }

    fn repair_rail(&self, rail: &mut Rail) {
        let loops = remove_loops(&mut rail.points, self.loop_window());
        let spikes = remove_spikes(&mut rail.points, self.spike_window());
        if loops + spikes > 0 {
            log::debug!(
                "{:?} rail: removed {} loop and {} spike points",
                rail.side,
                loops,
                spikes
            );
        }
    }

    /// Left rail, then the final track point, then the right rail reversed.
    fn merge(&self, left: Rail, right: Rail, track: &[GeoPoint]) -> Vec<GeoPoint> {
        let mut ring = left.points;
        // the last track point has no bearing, so it caps the corridor itself
        if let Some(last) = track.last() {
            ring.push(*last);
        }
        ring.extend(right.points.into_iter().rev());
        ring
    }

    fn loop_window(&self) -> ScanWindow {
        ScanWindow::new(
            self.config.loop_window,
            self.distance_km,
            self.config.reach_factor,
        )
    }

    fn spike_window(&self) -> ScanWindow {
        ScanWindow::new(
            self.config.spike_window,
            self.distance_km,
            self.config.reach_factor,
        )
    }
}

/// Build a corridor with the default config.
pub fn build_corridor(track: &[GeoPoint], distance_km: f64) -> Result<Corridor> {
    Ok(CorridorBuilder::new(distance_km)?.build(track))
}
