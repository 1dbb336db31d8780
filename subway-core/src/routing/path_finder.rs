use hashbrown::HashMap;
use log::debug;
use petgraph::graph::{Graph, NodeIndex};
use serde::{Deserialize, Serialize};

use super::dijkstra::{dijkstra_path, dijkstra_path_weights};
use crate::{Distance, Error, Line, PathDistance, Segment, Station, StationId};

/// Weighted multigraph of stations; every segment becomes an edge
pub(crate) type SegmentGraph = Graph<Station, Distance>;

/// How segments are turned into graph edges
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// One edge per segment, from its up station to its down station
    #[default]
    Directed,
    /// Each segment can also be travelled from down station to up station
    Undirected,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathFinderOptions {
    pub direction: Direction,
}

/// Result of a single shortest path query
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortestPath {
    stations: Vec<Station>,
    distance: PathDistance,
}

impl ShortestPath {
    /// Stations from source to target, both included
    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    /// Sum of the segment distances along [`ShortestPath::stations`]
    pub fn distance(&self) -> PathDistance {
        self.distance
    }

    pub fn into_stations(self) -> Vec<Station> {
        self.stations
    }
}

/// Shortest path engine over a snapshot of lines.
///
/// The graph copies every station and segment it needs, so later changes to
/// the lines are not visible here; build a new finder after mutating them.
/// Parallel segments between the same stations (e.g. from different lines)
/// are kept as separate edges.
#[derive(Debug, Clone)]
pub struct PathFinder {
    graph: SegmentGraph,
    nodes: HashMap<StationId, NodeIndex>,
}

impl PathFinder {
    pub fn new<'a>(lines: impl IntoIterator<Item = &'a Line>) -> Self {
        Self::with_options(lines, PathFinderOptions::default())
    }

    pub fn with_options<'a>(
        lines: impl IntoIterator<Item = &'a Line>,
        options: PathFinderOptions,
    ) -> Self {
        let mut finder = Self {
            graph: SegmentGraph::new(),
            nodes: HashMap::new(),
        };

        for line in lines {
            for segment in line.segments() {
                finder.register_segment(segment, options.direction);
            }
        }

        debug!(
            "Path finder built with {} stations and {} edges",
            finder.graph.node_count(),
            finder.graph.edge_count()
        );
        finder
    }

    fn register_segment(&mut self, segment: &Segment, direction: Direction) {
        let up = self.node(segment.up_station());
        let down = self.node(segment.down_station());

        self.graph.add_edge(up, down, segment.distance());
        if direction == Direction::Undirected {
            self.graph.add_edge(down, up, segment.distance());
        }
    }

    fn node(&mut self, station: &Station) -> NodeIndex {
        let graph = &mut self.graph;
        *self
            .nodes
            .entry(station.id())
            .or_insert_with(|| graph.add_node(station.clone()))
    }

    pub fn station_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn contains(&self, station: &Station) -> bool {
        self.nodes.contains_key(&station.id())
    }

    /// Shortest path from `source` to `target` by total distance.
    ///
    /// A query from a station to itself yields that single station at
    /// distance zero. Among paths of equal length the result is stable
    /// for a given graph.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StationNotFound`] if `source` is on no line and
    /// [`Error::DisconnectedPath`] if `target` is on no line or cannot be
    /// reached from `source`.
    pub fn shortest_path(&self, source: &Station, target: &Station) -> Result<ShortestPath, Error> {
        let start = self.lookup(source).ok_or(Error::StationNotFound(source.id()))?;
        let disconnected = || Error::DisconnectedPath {
            from: source.id(),
            to: target.id(),
        };
        let end = self.lookup(target).ok_or_else(disconnected)?;

        let path = dijkstra_path(&self.graph, start, end).ok_or_else(disconnected)?;

        let stations = path
            .nodes
            .iter()
            .map(|&node| self.graph[node].clone())
            .collect();

        Ok(ShortestPath {
            stations,
            distance: path.cost,
        })
    }

    /// Stations along [`PathFinder::shortest_path`]
    ///
    /// Runs a full query; use [`PathFinder::shortest_path`] when the
    /// distance is needed as well.
    ///
    /// # Errors
    ///
    /// See [`PathFinder::shortest_path`].
    pub fn shortest_path_stations(
        &self,
        source: &Station,
        target: &Station,
    ) -> Result<Vec<Station>, Error> {
        self.shortest_path(source, target).map(ShortestPath::into_stations)
    }

    /// Total distance of [`PathFinder::shortest_path`]
    ///
    /// Runs a full query; use [`PathFinder::shortest_path`] when the
    /// stations are needed as well.
    ///
    /// # Errors
    ///
    /// See [`PathFinder::shortest_path`].
    pub fn shortest_path_distance(
        &self,
        source: &Station,
        target: &Station,
    ) -> Result<PathDistance, Error> {
        self.shortest_path(source, target).map(|path| path.distance())
    }

    /// Distance from `source` to every station reachable from it, `source`
    /// itself included at zero.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StationNotFound`] if `source` is on no line.
    pub fn distances_from(
        &self,
        source: &Station,
    ) -> Result<HashMap<StationId, PathDistance>, Error> {
        let start = self.lookup(source).ok_or(Error::StationNotFound(source.id()))?;

        Ok(dijkstra_path_weights(&self.graph, start)
            .into_iter()
            .map(|(node, distance)| (self.graph[node].id(), distance))
            .collect())
    }

    fn lookup(&self, station: &Station) -> Option<NodeIndex> {
        self.nodes.get(&station.id()).copied()
    }
}
