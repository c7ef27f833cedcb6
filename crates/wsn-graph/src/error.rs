//! Graph-subsystem error type.

use thiserror::Error;

use wsn_core::{NodeId, WsnError};

/// Errors produced by `wsn-graph`.
///
/// `Unreachable` and `MissingEdge` signal a broken internal invariant (a
/// component whose members are not all connected to its rendezvous).  They
/// are surfaced to the caller rather than being folded into a zero cost.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error(transparent)]
    Core(#[from] WsnError),

    #[error("node {0} not found in network")]
    NodeNotFound(NodeId),

    #[error("{node} has no path to rendezvous {rendezvous}")]
    Unreachable { node: NodeId, rendezvous: NodeId },

    #[error("no edge between {from} and {to}")]
    MissingEdge { from: NodeId, to: NodeId },

    #[error("rendezvous {0} is not a member of the component")]
    RendezvousOutsideComponent(NodeId),
}

pub type GraphResult<T> = Result<T, GraphError>;
