//! Ordered chain of a line's segments.
//!
//! The chain is a simple directed path: every segment's down station is the
//! next segment's up station and no station repeats. Segments are stored in
//! path order, but traversal never relies on that and always walks from the
//! unique head.

use log::debug;

use crate::{Distance, Error, Segment, Station};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SegmentChain {
    segments: Vec<Segment>,
}

impl SegmentChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Segment> {
        self.segments.iter()
    }

    pub fn as_slice(&self) -> &[Segment] {
        &self.segments
    }

    /// Inserts a segment into the chain.
    ///
    /// A segment sharing its down station with an existing segment splits
    /// that segment from below; one sharing its up station splits it from
    /// above. In both cases the inserted distance must be strictly shorter
    /// than the split segment, which keeps the remaining piece positive.
    /// Anything else extends the chain at its head or tail.
    ///
    /// The chain does not check connectivity or duplicate endpoints: callers
    /// (see [`crate::Line::add_segment`]) validate before inserting.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InsufficientLineLength`] when a split would leave a
    /// non-positive remainder. The chain is unchanged on error.
    pub fn add(&mut self, segment: Segment) -> Result<(), Error> {
        if let Some(index) = self.position(|s| s.is_down_station(segment.down_station())) {
            let existing = &self.segments[index];
            let remnant = Segment::new(
                existing.line(),
                existing.up_station().clone(),
                segment.up_station().clone(),
                remaining_distance(existing, &segment)?,
            )?;
            debug!(
                "Splitting section {} -> {} below station {}",
                existing.up_station().id(),
                existing.down_station().id(),
                segment.up_station().id()
            );
            self.replace(index, [remnant, segment]);
            return Ok(());
        }

        if let Some(index) = self.position(|s| s.is_up_station(segment.up_station())) {
            let existing = &self.segments[index];
            let remnant = Segment::new(
                existing.line(),
                segment.down_station().clone(),
                existing.down_station().clone(),
                remaining_distance(existing, &segment)?,
            )?;
            debug!(
                "Splitting section {} -> {} above station {}",
                existing.up_station().id(),
                existing.down_station().id(),
                segment.down_station().id()
            );
            self.replace(index, [segment, remnant]);
            return Ok(());
        }

        if self.has_up_station(segment.down_station()) {
            debug!("Extending chain head with station {}", segment.up_station().id());
            self.segments.insert(0, segment);
        } else {
            debug!("Extending chain tail with station {}", segment.down_station().id());
            self.segments.push(segment);
        }
        Ok(())
    }

    /// Swaps the segment at `index` for the two pieces it was split into,
    /// returning the removed segment.
    fn replace(&mut self, index: usize, pieces: [Segment; 2]) -> Segment {
        let [upper, lower] = pieces;
        let old = std::mem::replace(&mut self.segments[index], upper);
        self.segments.insert(index + 1, lower);
        old
    }

    /// Stations along the chain from head to tail.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoFirstSegment`] if the chain is empty or has no
    /// unique head.
    pub fn all_stations(&self) -> Result<Vec<Station>, Error> {
        let first = self.first_segment().ok_or(Error::NoFirstSegment)?;

        let mut stations = Vec::with_capacity(self.segments.len() + 1);
        stations.push(first.up_station().clone());
        let mut current = first.down_station();
        stations.push(current.clone());

        // A path of n segments has n + 1 stations; stop there even if the
        // chain was corrupted into a cycle.
        while stations.len() <= self.segments.len() {
            let Some(next) = self.from_up_station(current) else {
                break;
            };
            current = next.down_station();
            stations.push(current.clone());
        }

        Ok(stations)
    }

    /// Removes the tail segment if its down station is `station`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRemoval`] if the chain is empty or `station`
    /// is not the down station of the tail segment.
    pub fn remove(&mut self, station: &Station) -> Result<Segment, Error> {
        let tail = self
            .segments
            .iter()
            .rposition(|s| self.is_last(s))
            .ok_or(Error::InvalidRemoval(station.id()))?;

        if !self.segments[tail].is_down_station(station) {
            return Err(Error::InvalidRemoval(station.id()));
        }

        debug!("Removing tail station {}", station.id());
        Ok(self.segments.remove(tail))
    }

    pub fn from_up_station(&self, station: &Station) -> Option<&Segment> {
        self.segments.iter().find(|s| s.is_up_station(station))
    }

    pub fn from_down_station(&self, station: &Station) -> Option<&Segment> {
        self.segments.iter().find(|s| s.is_down_station(station))
    }

    /// True when `segment` belongs to the chain and nothing leads into it
    pub fn is_first(&self, segment: &Segment) -> bool {
        self.segments.contains(segment) && !self.has_down_station(segment.up_station())
    }

    /// True when `segment` belongs to the chain and nothing leads out of it
    pub fn is_last(&self, segment: &Segment) -> bool {
        self.segments.contains(segment) && !self.has_up_station(segment.down_station())
    }

    pub fn contains_station(&self, station: &Station) -> bool {
        self.segments.iter().any(|s| s.contains(station))
    }

    /// The unique head segment, if there is exactly one
    fn first_segment(&self) -> Option<&Segment> {
        let mut heads = self
            .segments
            .iter()
            .filter(|s| !self.has_down_station(s.up_station()));
        match (heads.next(), heads.next()) {
            (Some(head), None) => Some(head),
            _ => None,
        }
    }

    fn position(&self, predicate: impl Fn(&Segment) -> bool) -> Option<usize> {
        self.segments.iter().position(predicate)
    }

    fn has_up_station(&self, station: &Station) -> bool {
        self.segments.iter().any(|s| s.is_up_station(station))
    }

    fn has_down_station(&self, station: &Station) -> bool {
        self.segments.iter().any(|s| s.is_down_station(station))
    }
}

fn remaining_distance(existing: &Segment, inserted: &Segment) -> Result<Distance, Error> {
    if existing.distance() <= inserted.distance() {
        return Err(Error::InsufficientLineLength {
            existing: existing.distance(),
            inserted: inserted.distance(),
        });
    }
    Ok(existing.distance() - inserted.distance())
}

impl<'a> IntoIterator for &'a SegmentChain {
    type Item = &'a Segment;
    type IntoIter = std::slice::Iter<'a, Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}
