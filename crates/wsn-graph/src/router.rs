//! Single-source shortest paths (Dijkstra) over packet energy cost.
//!
//! # Cost units
//!
//! Edge weights are joules per packet as produced by
//! [`wsn_core::energy_cost`], always non-negative, so the greedy settle
//! order of Dijkstra yields exact minimal cumulative costs.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use wsn_core::NodeId;

use crate::network::SensorNetwork;
use crate::{GraphError, GraphResult};

// ── Cost ──────────────────────────────────────────────────────────────────────

/// Totally ordered wrapper over a non-negative `f64` cost so it can key a
/// `BinaryHeap`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) struct Cost(pub f64);

impl Eq for Cost {}

impl PartialOrd for Cost {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Cost {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

// ── ShortestPathTree ──────────────────────────────────────────────────────────

/// The result of [`dijkstra`]: cumulative cost from the source and the
/// predecessor one hop closer to it, for every node in the network.
///
/// Nodes the source cannot reach have neither.  The source itself has a
/// distance of zero and no predecessor.
#[derive(Debug, Clone)]
pub struct ShortestPathTree {
    pub source: NodeId,
    dist:       Vec<Option<f64>>,
    prev:       Vec<Option<NodeId>>,
}

impl ShortestPathTree {
    /// Minimal cumulative cost from the source to `node`.
    pub fn distance(&self, node: NodeId) -> Option<f64> {
        self.dist.get(node.index()).copied().flatten()
    }

    /// Next node toward the source on a shortest path.
    pub fn predecessor(&self, node: NodeId) -> Option<NodeId> {
        self.prev.get(node.index()).copied().flatten()
    }

    pub fn is_reachable(&self, node: NodeId) -> bool {
        self.distance(node).is_some()
    }

    /// Every reached node with its distance, in id order.
    pub fn distances(&self) -> impl Iterator<Item = (NodeId, f64)> + '_ {
        self.dist
            .iter()
            .enumerate()
            .filter_map(|(i, d)| d.map(|d| (NodeId(i as u32), d)))
    }

    /// Every node that has a predecessor, in id order.
    pub fn predecessors(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.prev
            .iter()
            .enumerate()
            .filter_map(|(i, p)| p.map(|p| (NodeId(i as u32), p)))
    }

    /// Nodes from `node` back to the source, both ends included.  `None` if
    /// `node` is unreachable.
    pub fn path_to_source(&self, node: NodeId) -> Option<Vec<NodeId>> {
        if !self.is_reachable(node) {
            return None;
        }
        let mut path = vec![node];
        let mut cur = node;
        while let Some(p) = self.predecessor(cur) {
            path.push(p);
            cur = p;
        }
        Some(path)
    }
}

// ── Dijkstra ──────────────────────────────────────────────────────────────────

/// Shortest paths from `start` to every reachable node by cumulative packet
/// energy.
///
/// The heap is keyed by `(cost, NodeId)`, so equal-cost candidates settle in
/// ascending id order.  A predecessor is replaced only when a strictly
/// cheaper path is found.
pub fn dijkstra(network: &SensorNetwork, start: NodeId) -> GraphResult<ShortestPathTree> {
    if !network.contains(start) {
        return Err(GraphError::NodeNotFound(start));
    }

    let n = network.node_count();
    let mut dist    = vec![f64::INFINITY; n];
    let mut prev    = vec![None; n];
    let mut settled = vec![false; n];

    dist[start.index()] = 0.0;

    // Reverse makes BinaryHeap (max) behave as min-heap.
    let mut heap: BinaryHeap<Reverse<(Cost, NodeId)>> = BinaryHeap::new();
    heap.push(Reverse((Cost(0.0), start)));

    while let Some(Reverse((Cost(cost), node))) = heap.pop() {
        // Skip stale heap entries.
        if settled[node.index()] {
            continue;
        }
        settled[node.index()] = true;

        for edge in network.neighbors(node) {
            let v = edge.to.index();
            if settled[v] {
                continue;
            }
            let new_cost = cost + edge.cost;
            if new_cost < dist[v] {
                dist[v] = new_cost;
                prev[v] = Some(node);
                heap.push(Reverse((Cost(new_cost), edge.to)));
            }
        }
    }

    Ok(ShortestPathTree {
        source: start,
        dist:   dist.into_iter().map(|d| d.is_finite().then_some(d)).collect(),
        prev,
    })
}
