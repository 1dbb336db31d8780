use log::debug;

use crate::{Distance, Error, LineId, Segment, SegmentChain, Station};

/// Named transit route owning one chain of segments
#[derive(Debug, Clone)]
pub struct Line {
    id: LineId,
    name: String,
    color: String,
    segments: SegmentChain,
}

impl Line {
    pub fn new(id: LineId, name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            color: color.into(),
            segments: SegmentChain::new(),
        }
    }

    /// Creates a line with its initial segment
    ///
    /// # Errors
    ///
    /// Fails under the same conditions as [`Line::add_segment`].
    pub fn with_segment(
        id: LineId,
        name: impl Into<String>,
        color: impl Into<String>,
        up_station: Station,
        down_station: Station,
        distance: Distance,
    ) -> Result<Self, Error> {
        let mut line = Self::new(id, name, color);
        line.add_segment(up_station, down_station, distance)?;
        Ok(line)
    }

    pub fn id(&self) -> LineId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn update(&mut self, name: impl Into<String>, color: impl Into<String>) {
        self.name = name.into();
        self.color = color.into();
    }

    /// Adds a section between two stations.
    ///
    /// Once the line has segments, exactly one of the two stations must
    /// already be on it: both known adds no station, neither known would
    /// leave the new segment disconnected.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSectionStations`] for a zero distance, a
    /// self-loop or a violated known-station rule, and
    /// [`Error::InsufficientLineLength`] when a split does not fit.
    pub fn add_segment(
        &mut self,
        up_station: Station,
        down_station: Station,
        distance: Distance,
    ) -> Result<(), Error> {
        let segment = Segment::new(self.id, up_station, down_station, distance)?;

        if !self.segments.is_empty() {
            let up_known = self.segments.contains_station(segment.up_station());
            let down_known = self.segments.contains_station(segment.down_station());

            if up_known && down_known {
                return Err(Error::InvalidSectionStations(format!(
                    "stations {} and {} are both already on line {}",
                    segment.up_station().id(),
                    segment.down_station().id(),
                    self.id
                )));
            }
            if !up_known && !down_known {
                return Err(Error::InvalidSectionStations(format!(
                    "neither station {} nor {} is on line {}",
                    segment.up_station().id(),
                    segment.down_station().id(),
                    self.id
                )));
            }
        }

        debug!(
            "Line {}: adding section {} -> {} ({distance})",
            self.id,
            segment.up_station().id(),
            segment.down_station().id()
        );
        self.segments.add(segment)
    }

    /// Removes the last station of the line together with its section.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CannotRemoveOnlySegment`] when fewer than two segments
    /// remain, and [`Error::InvalidRemoval`] when `station` is not the last
    /// station.
    pub fn remove_segment(&mut self, station: &Station) -> Result<Segment, Error> {
        if self.segments.len() < 2 {
            return Err(Error::CannotRemoveOnlySegment);
        }
        self.segments.remove(station)
    }

    /// Stations in travel order. An empty line has no stations.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoFirstSegment`] if the chain has no unique head.
    pub fn stations(&self) -> Result<Vec<Station>, Error> {
        if self.segments.is_empty() {
            return Ok(Vec::new());
        }
        self.segments.all_stations()
    }

    pub fn segments(&self) -> &[Segment] {
        self.segments.as_slice()
    }

    pub fn chain(&self) -> &SegmentChain {
        &self.segments
    }
}
