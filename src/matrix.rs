use log::debug;
use rayon::prelude::*;
use subway_core::prelude::*;

/// Distance between every ordered pair of `stations`
///
/// `matrix[i][j]` is the shortest distance from `stations[i]` to
/// `stations[j]`, or `None` when `stations[j]` cannot be reached. Rows for
/// stations that are on no line are all `None`. Rows are computed in
/// parallel, one Dijkstra run each.
pub fn distance_matrix(
    finder: &PathFinder,
    stations: &[Station],
) -> Vec<Vec<Option<PathDistance>>> {
    stations
        .par_iter()
        .map(|source| match finder.distances_from(source) {
            Ok(reached) => stations
                .iter()
                .map(|target| reached.get(&target.id()).copied())
                .collect(),
            Err(e) => {
                debug!("No distances from station {}: {e}", source.id());
                vec![None; stations.len()]
            }
        })
        .collect()
}

/// Runs independent shortest path queries in parallel, preserving order
pub fn shortest_paths(
    finder: &PathFinder,
    queries: &[(Station, Station)],
) -> Vec<Result<ShortestPath, Error>> {
    queries
        .par_iter()
        .map(|(source, target)| finder.shortest_path(source, target))
        .collect()
}
