//! Shortest path queries over the union of all lines' segments

pub(crate) mod dijkstra;
mod path_finder;

pub(crate) use path_finder::SegmentGraph;
pub use path_finder::{Direction, PathFinder, PathFinderOptions, ShortestPath};
