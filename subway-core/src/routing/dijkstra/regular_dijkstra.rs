use std::collections::BinaryHeap;

use hashbrown::HashMap;
use petgraph::{graph::NodeIndex, visit::EdgeRef};

use super::state::State;
use crate::PathDistance;
use crate::routing::SegmentGraph;

/// Dijkstra's algorithm over the segment graph
/// Returns a map of every reachable node to its total distance from `start`
pub(crate) fn dijkstra_path_weights(
    graph: &SegmentGraph,
    start: NodeIndex,
) -> HashMap<NodeIndex, PathDistance> {
    let mut distances: HashMap<NodeIndex, PathDistance> =
        HashMap::with_capacity(graph.node_count());
    let mut heap = BinaryHeap::new();

    heap.push(State {
        cost: 0,
        node: start,
    });
    distances.insert(start, 0);

    while let Some(State { cost, node }) = heap.pop() {
        // Skip if we've found a better path
        if distances.get(&node).is_some_and(|&best| cost > best) {
            continue;
        }

        for edge in graph.edges(node) {
            let next = edge.target();
            let next_cost = cost + PathDistance::from(*edge.weight());

            match distances.entry(next) {
                hashbrown::hash_map::Entry::Vacant(entry) => {
                    entry.insert(next_cost);
                    heap.push(State {
                        cost: next_cost,
                        node: next,
                    });
                }
                hashbrown::hash_map::Entry::Occupied(mut entry) => {
                    if next_cost < *entry.get() {
                        *entry.get_mut() = next_cost;
                        heap.push(State {
                            cost: next_cost,
                            node: next,
                        });
                    }
                }
            }
        }
    }

    distances
}
