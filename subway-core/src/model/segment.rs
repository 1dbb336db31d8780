use serde::Serialize;

use crate::{Distance, Error, LineId, Station};

/// Directed section of a line between two adjacent stations
///
/// Segments are immutable: a split replaces a segment with two new ones
/// instead of rewriting its endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segment {
    /// Owning line, kept for lookup only
    line: LineId,
    up_station: Station,
    down_station: Station,
    distance: Distance,
}

impl Segment {
    /// Creates a segment, rejecting zero distances and self-loops
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSectionStations`] when `distance` is zero or
    /// both endpoints are the same station.
    pub fn new(
        line: LineId,
        up_station: Station,
        down_station: Station,
        distance: Distance,
    ) -> Result<Self, Error> {
        if distance == 0 {
            return Err(Error::InvalidSectionStations(
                "section distance must be positive".to_string(),
            ));
        }
        if up_station == down_station {
            return Err(Error::InvalidSectionStations(format!(
                "up and down stations are both {}",
                up_station.id()
            )));
        }

        Ok(Self {
            line,
            up_station,
            down_station,
            distance,
        })
    }

    pub fn line(&self) -> LineId {
        self.line
    }

    pub fn up_station(&self) -> &Station {
        &self.up_station
    }

    pub fn down_station(&self) -> &Station {
        &self.down_station
    }

    pub fn distance(&self) -> Distance {
        self.distance
    }

    pub fn is_up_station(&self, station: &Station) -> bool {
        &self.up_station == station
    }

    pub fn is_down_station(&self, station: &Station) -> bool {
        &self.down_station == station
    }

    pub fn contains(&self, station: &Station) -> bool {
        self.is_up_station(station) || self.is_down_station(station)
    }
}
