use std::collections::HashMap;
use std::collections::hash_map::Entry;

use super::CorridorBuilder;
use crate::config::CorridorConfig;
use crate::domain::{Corridor, GeoPoint};
use crate::error::Result;

/// Corridors for one track, built lazily and memoized per distance.
///
/// Several searches along the same track usually share a handful of widths,
/// so each width is built at most once.
#[derive(Debug)]
pub struct CorridorSet<'a> {
    track: &'a [GeoPoint],
    config: CorridorConfig,
    corridors: HashMap<u64, Corridor>,
}

impl<'a> CorridorSet<'a> {
    pub fn new(track: &'a [GeoPoint], config: CorridorConfig) -> Self {
        Self {
            track,
            config,
            corridors: HashMap::new(),
        }
    }

    pub fn track(&self) -> &'a [GeoPoint] {
        self.track
    }

    /// Return the corridor for `distance_km`, building it on first use.
    pub fn get_or_build(&mut self, distance_km: f64) -> Result<&Corridor> {
        match self.corridors.entry(distance_km.to_bits()) {
            Entry::Occupied(entry) => Ok(&*entry.into_mut()),
            Entry::Vacant(entry) => {
                let builder = CorridorBuilder::with_config(distance_km, self.config.clone())?;
                log::debug!("building corridor at {} km", distance_km);
                Ok(&*entry.insert(builder.build(self.track)))
            }
        }
    }

    pub fn get(&self, distance_km: f64) -> Option<&Corridor> {
        self.corridors.get(&distance_km.to_bits())
    }

    /// Number of distinct corridors built so far
    pub fn len(&self) -> usize {
        self.corridors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.corridors.is_empty()
    }

    /// Distances built so far, ascending
    pub fn distances(&self) -> Vec<f64> {
        let mut distances: Vec<f64> = self.corridors.values().map(|c| c.distance_km()).collect();
        distances.sort_by(f64::total_cmp);
        distances
    }
}
