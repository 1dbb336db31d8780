//! Transit network model: lines built from chains of adjacent station
//! segments, and shortest-path queries across all of them.

pub mod error;
pub mod loading;
pub mod model;
pub mod prelude;
pub mod routing;

pub use error::Error;
pub use loading::{NetworkConfig, create_network};
pub use model::{Line, Network, Segment, SegmentChain, Station};
pub use routing::{Direction, PathFinder, PathFinderOptions, ShortestPath};

/// Station identifier, unique across the whole network
pub type StationId = u64;
/// Line identifier
pub type LineId = u64;
/// Distance between two adjacent stations
pub type Distance = u32;
/// Total distance along a path of several segments
pub type PathDistance = u64;
