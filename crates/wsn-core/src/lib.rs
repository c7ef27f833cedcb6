//! `wsn-core` — foundational types for the `wsn` sensor-network simulator.
//!
//! This crate is a dependency of every other `wsn-*` crate.  It has no
//! `wsn-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `NodeId`, `EdgeId`                                    |
//! | [`geo`]         | `Point`, planar Euclidean distance                    |
//! | [`node`]        | `SensorNode`                                          |
//! | [`energy`]      | Radio energy model, `energy_cost`                     |
//! | [`config`]      | `NetworkConfig` and its validation                    |
//! | [`rng`]         | `SimRng` (seeded, reproducible)                       |
//! | [`error`]       | `WsnError`, `WsnResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod energy;
pub mod error;
pub mod geo;
pub mod ids;
pub mod node;
pub mod rng;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::NetworkConfig;
pub use energy::{E_AMP, E_ELEC, PACKET_SIZE_BITS, energy_cost, receive_energy, transmit_energy};
pub use error::{WsnError, WsnResult};
pub use geo::Point;
pub use ids::{EdgeId, NodeId};
pub use node::SensorNode;
pub use rng::SimRng;
