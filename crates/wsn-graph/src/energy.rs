//! Per-component routing energy for the two aggregation topologies.
//!
//! # Accounting
//!
//! **Shortest-path tree.**  Every non-rendezvous node pays
//! `packets × energy_cost(PACKET_SIZE_BITS, d)` where `d` is the length of
//! its *first* hop toward the rendezvous.  Relaying other nodes' traffic is
//! not charged: this is the model's simplified accounting and is kept as-is,
//! so totals are not cumulative path costs.
//!
//! **Spanning tree.**  Every tree edge `(u, v, cost)` is charged
//! `(packets(u) + packets(v)) × cost`: both endpoints pay for the link.

use wsn_core::{NodeId, PACKET_SIZE_BITS, energy_cost};

use crate::components::Component;
use crate::mst::TreeEdge;
use crate::network::SensorNetwork;
use crate::router::{ShortestPathTree, dijkstra};
use crate::{GraphError, GraphResult};

/// Shortest-path-tree energy for `component` with `rendezvous` as the sink.
///
/// Runs [`dijkstra`] from the rendezvous.  Fails with
/// [`GraphError::Unreachable`] if any member has no path to it.
pub fn total_energy_dijkstra(
    network:    &SensorNetwork,
    component:  &Component,
    rendezvous: NodeId,
) -> GraphResult<f64> {
    if !component.contains(rendezvous) {
        return Err(GraphError::RendezvousOutsideComponent(rendezvous));
    }
    let tree = dijkstra(network, rendezvous)?;
    shortest_path_energy(network, component, &tree)
}

/// [`total_energy_dijkstra`] over an already computed tree rooted at the
/// rendezvous.
pub fn shortest_path_energy(
    network:   &SensorNetwork,
    component: &Component,
    tree:      &ShortestPathTree,
) -> GraphResult<f64> {
    let rendezvous = tree.source;
    let mut total = 0.0;

    for node in component.iter() {
        if node == rendezvous {
            continue;
        }
        let sensor = network.node(node).ok_or(GraphError::NodeNotFound(node))?;
        let next = tree
            .predecessor(node)
            .ok_or(GraphError::Unreachable { node, rendezvous })?;
        let hop = network
            .edge_between(node, next)
            .ok_or(GraphError::MissingEdge { from: node, to: next })?;

        total += f64::from(sensor.data_packets) * energy_cost(PACKET_SIZE_BITS, hop.distance);
    }

    Ok(total)
}

/// Spanning-tree energy for the edges returned by [`prim`](crate::prim).
pub fn total_energy_mst(network: &SensorNetwork, edges: &[TreeEdge]) -> GraphResult<f64> {
    let packets = |id: NodeId| {
        network
            .node(id)
            .map(|n| n.data_packets)
            .ok_or(GraphError::NodeNotFound(id))
    };

    let mut total = 0.0;
    for e in edges {
        let load = f64::from(packets(e.from)?) + f64::from(packets(e.to)?);
        total += load * e.cost;
    }
    Ok(total)
}
