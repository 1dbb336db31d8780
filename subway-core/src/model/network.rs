//! In-memory registry of stations and lines

use hashbrown::HashMap;

use crate::{
    Distance, Error, Line, LineId, PathFinder, PathFinderOptions, Segment, ShortestPath, Station,
    StationId,
};

/// All stations and lines of a transit network
///
/// Path queries always run against a fresh [`PathFinder`] built from the
/// current lines, so mutations are visible to the next query.
#[derive(Debug, Clone, Default)]
pub struct Network {
    stations: HashMap<StationId, Station>,
    lines: Vec<Line>,
    options: PathFinderOptions,
}

impl Network {
    pub fn new(options: PathFinderOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn options(&self) -> PathFinderOptions {
        self.options
    }

    /// Registers a station
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidData`] if a station with the same id exists.
    pub fn add_station(&mut self, station: Station) -> Result<(), Error> {
        if self.stations.contains_key(&station.id()) {
            return Err(Error::InvalidData(format!(
                "duplicate station id {}",
                station.id()
            )));
        }
        self.stations.insert(station.id(), station);
        Ok(())
    }

    /// # Errors
    ///
    /// Returns [`Error::StationNotFound`] for an unregistered id.
    pub fn station(&self, id: StationId) -> Result<&Station, Error> {
        self.stations.get(&id).ok_or(Error::StationNotFound(id))
    }

    pub fn stations(&self) -> impl Iterator<Item = &Station> {
        self.stations.values()
    }

    /// Registers a line
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidData`] if a line with the same id exists.
    pub fn add_line(&mut self, line: Line) -> Result<(), Error> {
        if self.lines.iter().any(|l| l.id() == line.id()) {
            return Err(Error::InvalidData(format!("duplicate line id {}", line.id())));
        }
        self.lines.push(line);
        Ok(())
    }

    /// # Errors
    ///
    /// Returns [`Error::LineNotFound`] for an unregistered id.
    pub fn line(&self, id: LineId) -> Result<&Line, Error> {
        self.lines
            .iter()
            .find(|l| l.id() == id)
            .ok_or(Error::LineNotFound(id))
    }

    /// # Errors
    ///
    /// Returns [`Error::LineNotFound`] for an unregistered id.
    pub fn line_mut(&mut self, id: LineId) -> Result<&mut Line, Error> {
        self.lines
            .iter_mut()
            .find(|l| l.id() == id)
            .ok_or(Error::LineNotFound(id))
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Removes a line together with its segments
    ///
    /// # Errors
    ///
    /// Returns [`Error::LineNotFound`] for an unregistered id.
    pub fn remove_line(&mut self, id: LineId) -> Result<Line, Error> {
        let index = self
            .lines
            .iter()
            .position(|l| l.id() == id)
            .ok_or(Error::LineNotFound(id))?;
        Ok(self.lines.remove(index))
    }

    /// Adds a section to a line, resolving both stations by id
    ///
    /// # Errors
    ///
    /// Fails on unknown ids and under the conditions of [`Line::add_segment`].
    pub fn add_section(
        &mut self,
        line_id: LineId,
        up_station: StationId,
        down_station: StationId,
        distance: Distance,
    ) -> Result<(), Error> {
        let up = self.station(up_station)?.clone();
        let down = self.station(down_station)?.clone();
        self.line_mut(line_id)?.add_segment(up, down, distance)
    }

    /// Removes the last station of a line
    ///
    /// # Errors
    ///
    /// Fails on unknown ids and under the conditions of
    /// [`Line::remove_segment`].
    pub fn remove_section(
        &mut self,
        line_id: LineId,
        station: StationId,
    ) -> Result<Segment, Error> {
        let station = self.station(station)?.clone();
        self.line_mut(line_id)?.remove_segment(&station)
    }

    /// Snapshot of all lines as a path finder
    pub fn path_finder(&self) -> PathFinder {
        PathFinder::with_options(&self.lines, self.options)
    }

    /// Shortest path between two registered stations
    ///
    /// # Errors
    ///
    /// Returns [`Error::StationNotFound`] for unregistered ids, otherwise
    /// fails like [`PathFinder::shortest_path`].
    pub fn shortest_path(
        &self,
        source: StationId,
        target: StationId,
    ) -> Result<ShortestPath, Error> {
        let source = self.station(source)?;
        let target = self.station(target)?;
        self.path_finder().shortest_path(source, target)
    }
}
