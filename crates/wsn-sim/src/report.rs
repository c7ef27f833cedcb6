//! `ReportWriter<W>` — a [`SimObserver`] that prints a plain-text report.
//!
//! Output per component, then the grand totals:
//!
//! ```text
//! Component 1: Nodes = [0, 1]
//! Rendezvous Point = Node0
//! Dijkstra Energy = 0.003360 J
//! MST Energy = 0.006720 J
//!
//! Total Dijkstra Energy = 0.003360 J
//! Total MST Energy = 0.006720 J
//! ```

use std::io::{self, Write};

use wsn_graph::SensorNetwork;

use crate::{ComponentReport, RunSummary, SimObserver};

/// Writes the run report to any [`io::Write`] sink.
///
/// Errors from the sink are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct ReportWriter<W: Write> {
    out:        W,
    /// Also list each component's links (a textual rendering of the
    /// component's topology).
    show_links: bool,
    last_error: Option<io::Error>,
}

impl<W: Write> ReportWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out, show_links: false, last_error: None }
    }

    pub fn with_links(mut self, show: bool) -> Self {
        self.show_links = show;
        self
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.last_error.take()
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn store_err(&mut self, result: io::Result<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }

    fn write_component(&mut self, network: &SensorNetwork, report: &ComponentReport) -> io::Result<()> {
        let ids: Vec<String> = report.component.iter().map(|n| n.0.to_string()).collect();
        writeln!(self.out)?;
        writeln!(self.out, "Component {}: Nodes = [{}]", report.index + 1, ids.join(", "))?;
        writeln!(self.out, "Rendezvous Point = {}", report.rendezvous)?;
        writeln!(self.out, "Dijkstra Energy = {:.6} J", report.dijkstra_energy)?;
        writeln!(self.out, "MST Energy = {:.6} J", report.mst_energy)?;

        if self.show_links {
            for node in report.component.iter() {
                let Some(sensor) = network.node(node) else { continue };
                let marker = if node == report.rendezvous { " *" } else { "" };
                let links: Vec<String> = network
                    .neighbors(node)
                    .filter(|e| e.to > node)
                    .map(|e| format!("{}({:.2})", e.to, e.distance))
                    .collect();
                writeln!(
                    self.out,
                    "  {} at {} packets={}{} -> [{}]",
                    node,
                    sensor.pos,
                    sensor.data_packets,
                    marker,
                    links.join(", "),
                )?;
            }
        }
        Ok(())
    }

    fn write_totals(&mut self, summary: &RunSummary) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "Total Dijkstra Energy = {:.6} J", summary.total_dijkstra)?;
        writeln!(self.out, "Total MST Energy = {:.6} J", summary.total_mst)?;
        self.out.flush()
    }
}

impl<W: Write> SimObserver for ReportWriter<W> {
    fn on_component(&mut self, network: &SensorNetwork, report: &ComponentReport) {
        let result = self.write_component(network, report);
        self.store_err(result);
    }

    fn on_run_end(&mut self, summary: &RunSummary) {
        let result = self.write_totals(summary);
        self.store_err(result);
    }
}
