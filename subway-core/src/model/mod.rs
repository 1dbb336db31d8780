//! Data model for a transit network
//!
//! Stations are shared vertices; every line owns a chain of segments
//! between adjacent stations.

pub mod chain;
pub mod line;
pub mod network;
pub mod segment;
pub mod station;

pub use chain::SegmentChain;
pub use line::Line;
pub use network::Network;
pub use segment::Segment;
pub use station::Station;
