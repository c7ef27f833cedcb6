//! `wsn-graph` — proximity graph, connectivity, and routing energy.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                 |
//! |----------------|----------------------------------------------------------|
//! | [`network`]    | `SensorNetwork` (CSR), `SensorNetworkBuilder`, `Edge`    |
//! | [`generate`]   | `generate_graph` — random field from a `NetworkConfig`   |
//! | [`components`] | `find_components`, `Component`, `Traversal`              |
//! | [`router`]     | `dijkstra`, `ShortestPathTree`                           |
//! | [`mst`]        | `prim`, `TreeEdge`                                       |
//! | [`energy`]     | `total_energy_dijkstra`, `total_energy_mst`              |
//! | [`error`]      | `GraphError`, `GraphResult<T>`                           |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod components;
pub mod energy;
pub mod error;
pub mod generate;
pub mod mst;
pub mod network;
pub mod router;

#[cfg(test)]
mod tests;

pub use components::{Component, Traversal, find_components};
pub use energy::{shortest_path_energy, total_energy_dijkstra, total_energy_mst};
pub use error::{GraphError, GraphResult};
pub use generate::{generate_graph, generate_graph_with};
pub use mst::{TreeEdge, prim};
pub use network::{Edge, ProximitySearch, SensorNetwork, SensorNetworkBuilder};
pub use router::{ShortestPathTree, dijkstra};
