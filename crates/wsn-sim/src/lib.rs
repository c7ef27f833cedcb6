//! `wsn-sim` — run orchestrator for the wsn sensor-network simulator.
//!
//! # Pipeline
//!
//! ```text
//! build:  validate config → generate field (seeded) → CSR proximity graph
//! run:    ① find_components (BFS | DFS)
//!         ② pick a rendezvous per component (sequential, seeded)
//!         ③ per component: dijkstra + shortest-path energy,
//!                          prim + spanning-tree energy
//!            (parallel with the `parallel` feature)
//!         ④ sum totals; notify the observer in component order
//! ```
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Routes components on Rayon's thread pool.              |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use wsn_sim::{NoopObserver, RunConfig, SimBuilder};
//!
//! let mut sim = SimBuilder::new(RunConfig::default()).build()?;
//! let summary = sim.run(&mut NoopObserver)?;
//! println!("{} J vs {} J", summary.total_dijkstra, summary.total_mst);
//! ```

pub mod builder;
pub mod config;
pub mod error;
pub mod observer;
pub mod report;
pub mod sim;


pub use builder::SimBuilder;
pub use config::{RendezvousChoice, RunConfig};
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use report::ReportWriter;
pub use sim::{ComponentReport, RunSummary, Simulation};
