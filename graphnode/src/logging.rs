//! Logging helpers for node execution.
//!
//! Structured `tracing` events for dispatch decisions. No subscriber is installed here.

use crate::node::Branch;

/// Log node execution start.
pub fn log_node_start(node: &str) {
    tracing::debug!(node = node, "Starting node execution");
}

/// Log the branch a conditional node picked, before the successor runs.
///
/// `verbose` raises the event to info (see `NodeConfig::verbose`).
pub fn log_branch_selected(node: &str, key: &str, branch: Branch, successor: &str, verbose: bool) {
    if verbose {
        tracing::info!(node, key, ?branch, successor, "Branch selected");
    } else {
        tracing::debug!(node, key, ?branch, successor, "Branch selected");
    }
}

/// Log a wrong-arity failure.
pub fn log_structural_error(node: &str, expected: usize, found: usize) {
    tracing::error!(node, expected, found, "Wrong arity: node cannot dispatch");
}

/// Log node execution completion.
pub fn log_node_complete(node: &str) {
    tracing::debug!(node = node, "Node execution complete");
}
