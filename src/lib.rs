mod config;
mod coordinate;
mod dynamic_rtree;
mod errors;
pub mod from_wkt;
mod linear_scan;
mod node;
pub mod particle;
mod rectangle;
mod rtree;
pub mod utils;

pub use config::RTreeConfig;
pub use coordinate::Coordinate;
pub use dynamic_rtree::{NodeView, RTree};
pub use errors::{RTreeError, Result};
pub use linear_scan::LinearScan;
pub use node::CONTAINER_LEVEL;
pub use rectangle::{HasEnvelope, Rectangle};
pub use rtree::SpatialIndex;
