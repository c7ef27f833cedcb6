//! The `Simulation` struct and its run pipeline.

use wsn_core::{NodeId, SimRng};
use wsn_graph::{
    Component, SensorNetwork, TreeEdge, dijkstra, find_components, prim, shortest_path_energy,
    total_energy_mst,
};

use crate::{RendezvousChoice, RunConfig, SimError, SimObserver, SimResult};

// ── Results ───────────────────────────────────────────────────────────────────

/// Costs of both aggregation strategies for one component.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentReport {
    /// Position in the component list (0-based).
    pub index:           usize,
    pub component:       Component,
    pub rendezvous:      NodeId,
    /// Shortest-path-tree energy, joules.
    pub dijkstra_energy: f64,
    /// Spanning-tree energy, joules.
    pub mst_energy:      f64,
    /// The spanning tree grown from the rendezvous.
    pub mst_edges:       Vec<TreeEdge>,
}

/// Aggregate result of a run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub node_count:     usize,
    pub link_count:     usize,
    pub components:     Vec<ComponentReport>,
    pub total_dijkstra: f64,
    pub total_mst:      f64,
}

// ── Simulation ────────────────────────────────────────────────────────────────

/// One sensor field and the state needed to cost it.
///
/// The pipeline is strictly one-directional:
///
/// 1. **Partition**: split the network into connected components.
/// 2. **Rendezvous**: pick a sink per component, sequentially, from the
///    seeded RNG.
/// 3. **Route** (optionally parallel with the `parallel` feature): run
///    Dijkstra and Prim from each sink and cost both trees.
/// 4. **Aggregate**: sum per-component energies and report, in component
///    order.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Simulation {
    pub config:  RunConfig,

    /// Generated (or supplied) network.  Read-only for the whole run.
    pub network: SensorNetwork,

    /// Continues the stream that generated the network.
    pub rng:     SimRng,
}

impl Simulation {
    /// Run the full pipeline and return the aggregate totals.
    ///
    /// Calls observer hooks as results become available.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<RunSummary> {
        observer.on_network_built(&self.network);

        let components = find_components(&self.network, self.config.traversal);
        let sinks = self.choose_rendezvous(&components)?;
        let reports = self.route_components(components, sinks)?;

        let mut total_dijkstra = 0.0;
        let mut total_mst = 0.0;
        for report in &reports {
            total_dijkstra += report.dijkstra_energy;
            total_mst += report.mst_energy;
            log::info!(
                "component {}: {} nodes, rendezvous {}, dijkstra {:.6} J, mst {:.6} J",
                report.index + 1,
                report.component.len(),
                report.rendezvous,
                report.dijkstra_energy,
                report.mst_energy,
            );
            observer.on_component(&self.network, report);
        }

        let summary = RunSummary {
            node_count: self.network.node_count(),
            link_count: self.network.link_count(),
            components: reports,
            total_dijkstra,
            total_mst,
        };
        log::info!(
            "run complete: {} components, dijkstra {:.6} J, mst {:.6} J",
            summary.components.len(),
            summary.total_dijkstra,
            summary.total_mst,
        );
        observer.on_run_end(&summary);
        Ok(summary)
    }

    // ── Pipeline stages ───────────────────────────────────────────────────

    fn choose_rendezvous(&mut self, components: &[Component]) -> SimResult<Vec<NodeId>> {
        components
            .iter()
            .enumerate()
            .map(|(i, c)| {
                let pick = match self.config.rendezvous {
                    RendezvousChoice::Random   => self.rng.choose(&c.members).copied(),
                    RendezvousChoice::LowestId => c.iter().min(),
                };
                pick.ok_or(SimError::EmptyComponent(i))
            })
            .collect()
    }

    /// Cost every component.  Results come back in component order whether
    /// or not the `parallel` feature is on.
    fn route_components(
        &self,
        components: Vec<Component>,
        sinks:      Vec<NodeId>,
    ) -> SimResult<Vec<ComponentReport>> {
        let network = &self.network;

        #[cfg(not(feature = "parallel"))]
        {
            components
                .into_iter()
                .zip(sinks)
                .enumerate()
                .map(|(index, (component, rendezvous))| {
                    cost_component(network, index, component, rendezvous)
                })
                .collect()
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            components
                .into_par_iter()
                .zip(sinks.into_par_iter())
                .enumerate()
                .map(|(index, (component, rendezvous))| {
                    cost_component(network, index, component, rendezvous)
                })
                .collect()
        }
    }
}

/// Run both strategies for one component rooted at `rendezvous`.
fn cost_component(
    network:    &SensorNetwork,
    index:      usize,
    component:  Component,
    rendezvous: NodeId,
) -> SimResult<ComponentReport> {
    let tree = dijkstra(network, rendezvous)?;
    let dijkstra_energy = shortest_path_energy(network, &component, &tree)?;

    let mst_edges = prim(network, rendezvous)?;
    let mst_energy = total_energy_mst(network, &mst_edges)?;

    Ok(ComponentReport {
        index,
        component,
        rendezvous,
        dijkstra_energy,
        mst_energy,
        mst_edges,
    })
}
