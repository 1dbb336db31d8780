//! Transit network routing.
//!
//! Re-exports the network model from `subway_core` and adds batch queries
//! over a [`PathFinder`] snapshot.

pub mod matrix;

pub use matrix::{distance_matrix, shortest_paths};
pub use subway_core::prelude::*;
