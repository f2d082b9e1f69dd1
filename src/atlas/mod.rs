//! Combined cover atlas building.

mod builder;

pub use builder::{AtlasRegion, CoverAtlas};
