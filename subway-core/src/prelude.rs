// Re-export key components
pub use crate::Error;
pub use crate::loading::{LineConfig, NetworkConfig, SectionConfig, create_network};
pub use crate::model::{Line, Network, Segment, SegmentChain, Station};
pub use crate::routing::{Direction, PathFinder, PathFinderOptions, ShortestPath};

// Core identifier and weight types
pub use crate::Distance;
pub use crate::LineId;
pub use crate::PathDistance;
pub use crate::StationId;
