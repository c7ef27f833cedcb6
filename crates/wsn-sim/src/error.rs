use thiserror::Error;

use wsn_core::WsnError;
use wsn_graph::GraphError;

#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Core(#[from] WsnError),

    #[error("routing error: {0}")]
    Graph(#[from] GraphError),

    #[error("component {0} has no members")]
    EmptyComponent(usize),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

pub type SimResult<T> = Result<T, SimError>;
