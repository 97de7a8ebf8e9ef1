//! Conditional node: routes the traversal to one of exactly two successors.
//!
//! Successor 0 runs when `state[key_name]` is truthy (see [`crate::truthy`]),
//! successor 1 when the key is absent or falsy. The chosen successor is executed with
//! the same state and its result is returned as-is.

use async_trait::async_trait;

use crate::config::{NodeConfig, DEFAULT_CONDITIONAL_NAME};
use crate::error::NodeError;
use crate::logging::{
    log_branch_selected, log_node_complete, log_node_start, log_structural_error,
};
use crate::state::State;

use super::{Node, NodeBase, NodeType};

/// Number of successors a conditional node dispatches between.
pub const CONDITIONAL_ARITY: usize = 2;

/// Which successor a conditional node picks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Branch {
    /// Key present and truthy: successor 0.
    Truthy,
    /// Key absent or falsy: successor 1.
    Falsy,
}

impl Branch {
    /// Index into the successor list.
    pub fn index(self) -> usize {
        match self {
            Branch::Truthy => 0,
            Branch::Falsy => 1,
        }
    }
}

/// Two-way dispatcher keyed on one state entry.
///
/// Build with `ConditionalNode::new(key)`, then `add_successor` twice: the truthy branch
/// first, the falsy branch second. The successor count is checked on every `execute`;
/// anything other than two fails with `NodeError::Structural` before either successor
/// runs.
///
/// ```rust,no_run
/// use std::sync::Arc;
/// use graphnode::{ConditionalNode, Node, State};
///
/// # async fn demo(on_doc: Arc<dyn Node>, fetch: Arc<dyn Node>) -> Result<(), graphnode::NodeError> {
/// let mut check = ConditionalNode::new("doc");
/// check.add_successor(on_doc);
/// check.add_successor(fetch);
///
/// let state = check.execute(State::new().with("doc", "<html>")).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct ConditionalNode {
    base: NodeBase,
    key_name: String,
}

impl ConditionalNode {
    /// Creates a conditional node named `"ConditionalNode"` with no successors.
    pub fn new(key_name: impl Into<String>) -> Self {
        Self {
            base: NodeBase::new(
                DEFAULT_CONDITIONAL_NAME,
                NodeType::Conditional,
                CONDITIONAL_ARITY,
            ),
            key_name: key_name.into(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.base.set_name(name.into());
        self
    }

    pub fn with_input(mut self, input: impl Into<String>) -> Self {
        self.base.set_input(input);
        self
    }

    pub fn with_output(mut self, output: Vec<String>) -> Self {
        self.base.set_output(output);
        self
    }

    pub fn with_node_config(mut self, node_config: NodeConfig) -> Self {
        self.base.set_node_config(node_config);
        self
    }

    /// State key tested by this node.
    pub fn key_name(&self) -> &str {
        &self.key_name
    }

    /// Picks the branch for `state`. Pure: reads only `state[key_name]`.
    pub fn select_branch(&self, state: &State) -> Branch {
        if state.is_truthy(&self.key_name) {
            Branch::Truthy
        } else {
            Branch::Falsy
        }
    }

    fn verbose(&self) -> bool {
        self.base.node_config().map_or(false, |c| c.verbose)
    }
}

#[async_trait]
impl Node for ConditionalNode {
    fn base(&self) -> &NodeBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut NodeBase {
        &mut self.base
    }

    /// Checks arity, selects a branch and delegates to it.
    ///
    /// Errors from the successor are returned unchanged.
    async fn execute(&self, state: State) -> Result<State, NodeError> {
        log_node_start(self.name());

        let successors = self.connected_successors();
        if successors.len() != self.arity() {
            log_structural_error(self.name(), self.arity(), successors.len());
            return Err(NodeError::Structural {
                node: self.name().to_string(),
                expected: self.arity(),
                found: successors.len(),
            });
        }

        let branch = self.select_branch(&state);
        let next = &successors[branch.index()];
        log_branch_selected(
            self.name(),
            &self.key_name,
            branch,
            next.name(),
            self.verbose(),
        );

        let state = next.execute(state).await?;
        log_node_complete(self.name());
        Ok(state)
    }
}
