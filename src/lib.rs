//! trackbox - Build corridor polygons around GPS tracks for POI searches
//!
//! A track is simplified, offset to both sides at a fixed distance, repaired
//! (fold-backs, loops, spikes) and closed into a single polygon that can be
//! handed to a spatial search such as an Overpass `poly:` filter.
//!
//! ```
//! use trackbox::{GeoPoint, build_corridor};
//!
//! let track = vec![
//!     GeoPoint::new(47.00, 8.00),
//!     GeoPoint::new(47.01, 8.00),
//!     GeoPoint::new(47.02, 8.01),
//! ];
//! let corridor = build_corridor(&track, 1.0).unwrap();
//! assert!(corridor.len() >= 3);
//! println!("{}", corridor.to_poly_filter());
//! ```

pub mod config;
pub mod corridor;
pub mod domain;
pub mod error;
pub mod export;
pub mod geometry;
pub mod input;

pub use config::CorridorConfig;
pub use corridor::{CorridorBuilder, CorridorSet, build_corridor};
pub use domain::{Bounds, Corridor, GeoPoint};
pub use error::{Result, TrackboxError};
pub use export::OutputFormat;
