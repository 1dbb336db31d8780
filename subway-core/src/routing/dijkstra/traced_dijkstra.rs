use std::collections::BinaryHeap;

use hashbrown::HashMap;
use log::trace;
use petgraph::{graph::NodeIndex, visit::EdgeRef};

use super::state::State;
use crate::PathDistance;
use crate::routing::SegmentGraph;

/// Nodes of a shortest path from start to target and its total weight
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TracedPath {
    pub(crate) nodes: Vec<NodeIndex>,
    pub(crate) cost: PathDistance,
}

/// Dijkstra's algorithm from `start`, stopping as soon as `target` is settled.
/// Returns `None` when `target` cannot be reached.
///
/// Predecessors are only replaced on a strictly shorter distance, so among
/// equal-cost paths the first one discovered wins.
pub(crate) fn dijkstra_path(
    graph: &SegmentGraph,
    start: NodeIndex,
    target: NodeIndex,
) -> Option<TracedPath> {
    let estimated_nodes = graph.node_count();
    let mut distances: HashMap<NodeIndex, PathDistance> = HashMap::with_capacity(estimated_nodes);
    let mut predecessors: HashMap<NodeIndex, NodeIndex> = HashMap::with_capacity(estimated_nodes);
    let mut heap = BinaryHeap::with_capacity(estimated_nodes / 4);

    heap.push(State {
        cost: 0,
        node: start,
    });
    distances.insert(start, 0);

    while let Some(State { cost, node }) = heap.pop() {
        if node == target {
            return Some(TracedPath {
                nodes: trace_back(&predecessors, start, target),
                cost,
            });
        }

        // Skip if we've found a better path
        if distances.get(&node).is_some_and(|&best| cost > best) {
            continue;
        }

        trace!("Settled node {} at distance {cost}", node.index());

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
                    predecessors.insert(next, node);
                }
                hashbrown::hash_map::Entry::Occupied(mut entry) => {
                    if next_cost < *entry.get() {
                        *entry.get_mut() = next_cost;
                        heap.push(State {
                            cost: next_cost,
                            node: next,
                        });
                        predecessors.insert(next, node);
                    }
                }
            }
        }
    }

    None
}

// Follow predecessors backward from target to start
fn trace_back(
    predecessors: &HashMap<NodeIndex, NodeIndex>,
    start: NodeIndex,
    target: NodeIndex,
) -> Vec<NodeIndex> {
    let mut nodes = vec![target];
    let mut current = target;
    while current != start {
        match predecessors.get(&current) {
            Some(&prev) => {
                nodes.push(prev);
                current = prev;
            }
            None => break,
        }
    }
    nodes.reverse();
    nodes
}
