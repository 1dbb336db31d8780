//! This module is responsible for reading a network description
//! and building a validated [`crate::Network`] from it.

mod builder;
mod config;

pub use builder::create_network;
pub use config::{LineConfig, NetworkConfig, SectionConfig};
