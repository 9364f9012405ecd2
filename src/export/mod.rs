//! Corridor serializers
//!
//! - `poly`: Overpass QL polygon filter, `poly:"lat lon lat lon ..."`
//! - `json`: plain array of `[lat, lon]` pairs
//! - `geojson`: a single `Feature` with a closed `Polygon` ring in `[lon, lat]` order

use serde::Deserialize;
use serde_json::{Value, json};

use crate::domain::Corridor;

/// Output format for serialized corridors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Poly,
    Json,
    Geojson,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Poly => "txt",
            OutputFormat::Json => "json",
            OutputFormat::Geojson => "geojson",
        }
    }
}

/// Render a corridor in the requested format.
pub fn render(corridor: &Corridor, format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Poly => Ok(poly_filter(corridor)),
        OutputFormat::Json => serde_json::to_string(&to_json(corridor)),
        OutputFormat::Geojson => serde_json::to_string_pretty(&to_geojson(corridor)),
    }
}

/// Overpass polygon filter; coordinates are truncated to 3 decimals.
pub fn poly_filter(corridor: &Corridor) -> String {
    let coords: Vec<String> = corridor
        .iter()
        .map(|p| format!("{:.3} {:.3}", p.lat, p.lon))
        .collect();
    format!("poly:\"{}\"", coords.join(" "))
}

pub fn to_json(corridor: &Corridor) -> Value {
    Value::Array(corridor.iter().map(|p| json!([p.lat, p.lon])).collect())
}

pub fn to_geojson(corridor: &Corridor) -> Value {
    let mut ring: Vec<Value> = corridor.iter().map(|p| json!([p.lon, p.lat])).collect();
    if let Some(first) = ring.first().cloned() {
        ring.push(first);
    }

    json!({
        "type": "Feature",
        "properties": {
            "distance_km": corridor.distance_km(),
            "points": corridor.len(),
        },
        "geometry": {
            "type": "Polygon",
            "coordinates": [ring],
        },
    })
}
