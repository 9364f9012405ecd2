pub mod builder;
pub mod cache;
pub mod cleanup;

pub use builder::{CorridorBuilder, Rail, Side, build_corridor};
pub use cache::CorridorSet;
pub use cleanup::{ScanWindow, remove_loops, remove_spikes};
