//! Node execution error types.
//!
//! Returned by `Node::execute`. The conditional node produces `Structural` itself;
//! everything else comes from successor nodes and is passed through unchanged.

use thiserror::Error;

use crate::config::ConfigError;

/// Node execution error.
///
/// `Structural` marks a misbuilt graph and is fatal to the traversal: callers must not
/// retry it or fall back to a branch. The remaining variants are produced by
/// work-performing nodes and by config loading.
#[derive(Debug, Error)]
pub enum NodeError {
    /// Wrong arity: the node does not have the number of successors it requires.
    #[error("{node} must have exactly {expected} connected nodes, found {found}")]
    Structural {
        node: String,
        expected: usize,
        found: usize,
    },

    /// Execution failed with a message (e.g. fetch or parse step failed).
    #[error("execution failed: {0}")]
    ExecutionFailed(String),

    /// Node could not be built from its config.
    #[error("node config: {0}")]
    Config(#[from] ConfigError),
}

impl NodeError {
    /// True for the wrong-arity failure.
    pub fn is_structural(&self) -> bool {
        matches!(self, NodeError::Structural { .. })
    }
}
