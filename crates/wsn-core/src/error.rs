//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `WsnError` as one
//! variant via `#[from]`.

use thiserror::Error;

use crate::NodeId;

/// The top-level error type for `wsn-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum WsnError {
    #[error("node {0} not found")]
    NodeNotFound(NodeId),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `wsn-core`.
pub type WsnResult<T> = Result<T, WsnError>;
