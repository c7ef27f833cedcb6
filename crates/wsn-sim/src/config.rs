//! Run configuration, loadable from TOML.
//!
//! Every field has a default, so a file only needs the values it changes:
//!
//! ```toml
//! seed       = 7
//! traversal  = "dfs"
//! rendezvous = "lowest_id"
//!
//! [network]
//! node_count = 120
//! tx_range   = 10.0
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use wsn_core::NetworkConfig;
use wsn_graph::{ProximitySearch, Traversal};

use crate::SimResult;

/// How the sink of each component is picked.
///
/// The model does not optimize this choice; it is a free parameter.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RendezvousChoice {
    /// Uniformly at random among the component's members (seeded).
    #[default]
    Random,
    /// The lowest node id in the component.
    LowestId,
}

/// Top-level configuration for one run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub network:    NetworkConfig,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed:       u64,

    pub traversal:  Traversal,
    pub rendezvous: RendezvousChoice,
    pub proximity:  ProximitySearch,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            network:    NetworkConfig::default(),
            seed:       42,
            traversal:  Traversal::BreadthFirst,
            rendezvous: RendezvousChoice::Random,
            proximity:  ProximitySearch::Pairwise,
        }
    }
}

impl RunConfig {
    pub fn from_toml_str(s: &str) -> SimResult<Self> {
        let cfg: RunConfig = toml::from_str(s)?;
        cfg.network.validate()?;
        Ok(cfg)
    }

    pub fn load(path: &Path) -> SimResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }
}
