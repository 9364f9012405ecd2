//! Track reader for plain JSON coordinate lists.
//!
//! Accepted shapes, which may be mixed within one array:
//! - `[[lat, lon], ...]`
//! - `[{"lat": .., "lon": ..}, ...]` (`lng` is accepted for `lon`)
//!
//! Extra elements such as elevation in `[lat, lon, ele]` are ignored.

use serde::Deserialize;
use std::path::Path;

use crate::domain::GeoPoint;
use crate::error::{Result, TrackboxError};

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawPoint {
    Pair(Vec<f64>),
    Object {
        lat: f64,
        #[serde(alias = "lng")]
        lon: f64,
    },
}

/// Parse a JSON track into validated points
///
/// # Errors
/// * `TrackParse` - malformed JSON or an unrecognised point shape
/// * `InvalidPoint` - a coordinate outside WGS84 ranges
pub fn parse_track(json: &str) -> Result<Vec<GeoPoint>> {
    let raw: Vec<RawPoint> = serde_json::from_str(json)?;

    raw.into_iter()
        .enumerate()
        .map(|(index, raw)| {
            let point = match raw {
                RawPoint::Pair(values) if values.len() >= 2 => {
                    GeoPoint::from((values[0], values[1]))
                }
                RawPoint::Pair(values) => {
                    return Err(TrackboxError::InvalidPoint {
                        index,
                        latitude: values.first().copied().unwrap_or(f64::NAN),
                        longitude: f64::NAN,
                    });
                }
                RawPoint::Object { lat, lon } => GeoPoint::from((lat, lon)),
            };
            if !point.is_valid() {
                return Err(TrackboxError::InvalidPoint {
                    index,
                    latitude: point.lat,
                    longitude: point.lon,
                });
            }
            Ok(point)
        })
        .collect()
}

/// Read and parse a JSON track file
pub fn read_track(path: &Path) -> Result<Vec<GeoPoint>> {
    let contents = std::fs::read_to_string(path)?;
    parse_track(&contents)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pairs() {
        let track = parse_track("[[47.1, 8.2], [47.2, 8.3, 512.0]]").unwrap();
        assert_eq!(track, vec![GeoPoint::new(47.1, 8.2), GeoPoint::new(47.2, 8.3)]);
    }

    #[test]
    fn test_parse_objects() {
        let json = r#"[{"lat": 1.0, "lon": 2.0}, {"lat": 3.0, "lng": 4.0, "ele": 10}]"#;
        let track = parse_track(json).unwrap();
        assert_eq!(track, vec![GeoPoint::new(1.0, 2.0), GeoPoint::new(3.0, 4.0)]);
    }

    #[test]
    fn test_parse_empty() {
        assert!(parse_track("[]").unwrap().is_empty());
    }

    #[test]
    fn test_rejects_out_of_range() {
        let err = parse_track("[[1.0, 2.0], [95.0, 2.0]]").unwrap_err();
        assert!(matches!(err, TrackboxError::InvalidPoint { index: 1, .. }));
    }

    #[test]
    fn test_rejects_short_pair() {
        let err = parse_track("[[1.0]]").unwrap_err();
        assert!(matches!(err, TrackboxError::InvalidPoint { index: 0, .. }));
    }

    #[test]
    fn test_rejects_malformed() {
        assert!(matches!(
            parse_track("{\"lat\": 1}"),
            Err(TrackboxError::TrackParse(_))
        ));
    }

    #[test]
    fn test_read_track_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            read_track(&dir.path().join("nope.json")),
            Err(TrackboxError::Io(_))
        ));
    }
}
