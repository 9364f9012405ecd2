pub mod geodesy;
pub mod intersect;
pub mod simplify;

pub use geodesy::{
    EARTH_RADIUS_M, angular_deviation, bearing_degrees, destination_point, distance_meters,
};
pub use intersect::segments_intersect;
pub use simplify::{closest_point_on_segment, point_to_segment_distance, simplify};
