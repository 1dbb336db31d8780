use hashbrown::HashSet;
use itertools::Itertools;
use log::{info, warn};

use super::config::NetworkConfig;
use crate::{Error, Line, Network};

/// Creates a network from its description
///
/// Sections are replayed through [`Line::add_segment`] in the order they
/// are listed, so a configuration is accepted exactly when the same sequence
/// of interactive insertions would be.
///
/// # Errors
///
/// Returns [`Error::InvalidData`] for duplicate ids or sections referring
/// to undeclared stations, and any error raised while inserting a section.
pub fn create_network(config: &NetworkConfig) -> Result<Network, Error> {
    validate_config(config)?;

    let mut network = Network::new(config.options);
    for station in &config.stations {
        network.add_station(station.clone())?;
    }
    info!("Registered {} stations", network.station_count());

    for line_config in &config.lines {
        let mut line = Line::new(line_config.id, &line_config.name, &line_config.color);
        for section in &line_config.sections {
            line.add_segment(
                network.station(section.up_station)?.clone(),
                network.station(section.down_station)?.clone(),
                section.distance,
            )?;
        }
        info!(
            "Loaded line {} ({}) with {} sections",
            line.id(),
            line.name(),
            line.segments().len()
        );
        network.add_line(line)?;
    }

    warn_unused_stations(&network);

    info!(
        "Network created with {} stations and {} lines",
        network.station_count(),
        network.line_count()
    );
    Ok(network)
}

fn validate_config(config: &NetworkConfig) -> Result<(), Error> {
    if let Some(id) = config.stations.iter().map(|s| s.id()).duplicates().next() {
        return Err(Error::InvalidData(format!("duplicate station id {id}")));
    }

    if let Some(id) = config.lines.iter().map(|l| l.id).duplicates().next() {
        return Err(Error::InvalidData(format!("duplicate line id {id}")));
    }

    let declared: HashSet<_> = config.stations.iter().map(|s| s.id()).collect();
    for line in &config.lines {
        let unknown = line
            .sections
            .iter()
            .flat_map(|s| [s.up_station, s.down_station])
            .find(|id| !declared.contains(id));
        if let Some(id) = unknown {
            return Err(Error::InvalidData(format!(
                "line {} refers to undeclared station {id}",
                line.id
            )));
        }
    }

    Ok(())
}

fn warn_unused_stations(network: &Network) {
    let unused = network
        .stations()
        .filter(|station| {
            !network
                .lines()
                .iter()
                .any(|line| line.chain().contains_station(station))
        })
        .count();

    if unused > 0 {
        warn!(
            "{unused} of {} stations are not served by any line and cannot be routed to",
            network.station_count()
        );
    }
}
