//! Run observer trait for reporting and visualization.

use wsn_graph::SensorNetwork;

use crate::{ComponentReport, RunSummary};

/// Callbacks invoked by [`Simulation::run`][crate::Simulation::run] as
/// results become available.
///
/// Observers get shared references only: they can render or record what the
/// run produced but cannot alter it, and nothing they do feeds back into the
/// computation.  All methods have default no-op implementations.
///
/// # Example — component counter
///
/// ```rust,ignore
/// struct Counter(usize);
///
/// impl SimObserver for Counter {
///     fn on_component(&mut self, _net: &SensorNetwork, _report: &ComponentReport) {
///         self.0 += 1;
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called once the network has been generated (or supplied).
    fn on_network_built(&mut self, _network: &SensorNetwork) {}

    /// Called per component, in component order, after both strategies have
    /// been costed.  `report` carries the member list and rendezvous, which
    /// together with `network` is everything a topology plot needs.
    fn on_component(&mut self, _network: &SensorNetwork, _report: &ComponentReport) {}

    /// Called once after every component has been reported.
    fn on_run_end(&mut self, _summary: &RunSummary) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
