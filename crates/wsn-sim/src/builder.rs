//! Fluent builder for constructing a [`Simulation`].

use wsn_core::SimRng;
use wsn_graph::{SensorNetwork, generate_graph_with};

use crate::{RunConfig, Simulation, SimResult};

/// Fluent builder for [`Simulation`].
///
/// # Optional inputs (have defaults)
///
/// | Method          | Default                                            |
/// |-----------------|----------------------------------------------------|
/// | `.network(n)`   | Random field generated from `config.network`      |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(RunConfig::default()).build()?;
/// let summary = sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder {
    config:  RunConfig,
    network: Option<SensorNetwork>,
}

impl SimBuilder {
    pub fn new(config: RunConfig) -> Self {
        Self { config, network: None }
    }

    /// Use a pre-built network instead of generating one.
    ///
    /// `config.network` is then ignored; the seed still drives rendezvous
    /// selection.
    pub fn network(mut self, network: SensorNetwork) -> Self {
        self.network = Some(network);
        self
    }

    /// Validate the configuration, generate the field if none was supplied,
    /// and return a ready-to-run [`Simulation`].
    pub fn build(self) -> SimResult<Simulation> {
        let mut rng = SimRng::new(self.config.seed);

        let network = match self.network {
            Some(n) => n,
            None => generate_graph_with(&self.config.network, self.config.proximity, rng.inner())?,
        };

        Ok(Simulation { config: self.config, network, rng })
    }
}
