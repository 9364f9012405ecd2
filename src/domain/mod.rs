pub mod bounds;
pub mod corridor;
pub mod point;

pub use bounds::Bounds;
pub use corridor::Corridor;
pub use point::GeoPoint;
