//! Minimum spanning tree (Prim) over a start node's component.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use wsn_core::NodeId;

use crate::network::SensorNetwork;
use crate::router::Cost;
use crate::{GraphError, GraphResult};

/// One undirected tree edge, recorded as grown: `from` was already in the
/// tree, `to` is the node it brought in.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TreeEdge {
    pub from: NodeId,
    pub to:   NodeId,
    pub cost: f64,
}

/// Grow a minimum spanning tree outward from `start`.
///
/// Only nodes reachable from `start` are ever touched, so the result spans
/// exactly `start`'s component: `|component| - 1` edges, in the order they
/// were added.  Frontier ties are broken by `(from, to)` id.
pub fn prim(network: &SensorNetwork, start: NodeId) -> GraphResult<Vec<TreeEdge>> {
    if !network.contains(start) {
        return Err(GraphError::NodeNotFound(start));
    }

    let mut visited = vec![false; network.node_count()];
    visited[start.index()] = true;

    let mut frontier: BinaryHeap<Reverse<(Cost, NodeId, NodeId)>> = BinaryHeap::new();
    for e in network.neighbors(start) {
        frontier.push(Reverse((Cost(e.cost), start, e.to)));
    }

    let mut tree = Vec::new();
    while let Some(Reverse((Cost(cost), from, to))) = frontier.pop() {
        if visited[to.index()] {
            continue;
        }
        visited[to.index()] = true;
        tree.push(TreeEdge { from, to, cost });

        for e in network.neighbors(to) {
            if !visited[e.to.index()] {
                frontier.push(Reverse((Cost(e.cost), to, e.to)));
            }
        }
    }

    Ok(tree)
}
