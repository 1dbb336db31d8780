use std::cmp::Ordering;

use petgraph::graph::NodeIndex;

use crate::PathDistance;

#[derive(Copy, Clone, Eq, PartialEq)]
pub(super) struct State {
    pub(super) cost: PathDistance,
    pub(super) node: NodeIndex,
}

// Min-heap by cost, ties broken by the lower node index so that equal-cost
// paths always resolve the same way
impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
