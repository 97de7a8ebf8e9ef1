//! Node contract: one participant in a node graph.
//!
//! Every node receives the traversal `State`, does its work and returns the updated
//! `State`. Structural bookkeeping (name, category, arity, successors) lives in
//! `NodeBase`, which each node type embeds and exposes through `Node::base`.

mod conditional;

pub use conditional::{Branch, ConditionalNode, CONDITIONAL_ARITY};

use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;

use crate::config::NodeConfig;
use crate::error::NodeError;
use crate::state::State;

/// Category tag of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeType {
    /// Work-performing node (fetch, parse, generate, ...).
    Node,
    /// Two-way conditional dispatcher.
    Conditional,
}

impl NodeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeType::Node => "node",
            NodeType::Conditional => "conditional_node",
        }
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Shared structural data of a node.
///
/// Successors are kept in insertion order. `add_successor` neither deduplicates nor
/// checks for cycles; that belongs to whoever builds the graph.
#[derive(Clone)]
pub struct NodeBase {
    name: String,
    node_type: NodeType,
    input: String,
    output: Vec<String>,
    arity: usize,
    node_config: Option<NodeConfig>,
    successors: Vec<Arc<dyn Node>>,
}

impl NodeBase {
    /// Creates bookkeeping for a node with the given name, category and declared arity.
    pub fn new(name: impl Into<String>, node_type: NodeType, arity: usize) -> Self {
        Self {
            name: name.into(),
            node_type,
            input: String::new(),
            output: Vec::new(),
            arity,
            node_config: None,
            successors: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn set_name(&mut self, name: String) {
        self.name = name;
    }

    pub fn node_type(&self) -> NodeType {
        self.node_type
    }

    /// Input-key expression; not interpreted here.
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, input: impl Into<String>) {
        self.input = input.into();
    }

    pub fn output(&self) -> &[String] {
        &self.output
    }

    pub fn set_output(&mut self, output: Vec<String>) {
        self.output = output;
    }

    /// Declared number of outgoing edges.
    pub fn arity(&self) -> usize {
        self.arity
    }

    pub fn node_config(&self) -> Option<&NodeConfig> {
        self.node_config.as_ref()
    }

    pub fn set_node_config(&mut self, node_config: NodeConfig) {
        self.node_config = Some(node_config);
    }

    pub fn successors(&self) -> &[Arc<dyn Node>] {
        &self.successors
    }

    pub fn push_successor(&mut self, node: Arc<dyn Node>) {
        self.successors.push(node);
    }
}

impl fmt::Debug for NodeBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeBase")
            .field("name", &self.name)
            .field("node_type", &self.node_type)
            .field("input", &self.input)
            .field("output", &self.output)
            .field("arity", &self.arity)
            .field("node_config", &self.node_config)
            .field(
                "successors",
                &self.successors.iter().map(|n| n.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

/// One participant in a node graph: state in, state out.
///
/// Implementors hold a `NodeBase` and supply `execute`; the structural accessors have
/// default implementations on top of `base`/`base_mut`.
///
/// **Interaction**: `ConditionalNode` calls `execute` on one of its successors through
/// `Arc<dyn Node>` without knowing the concrete type.
#[async_trait]
pub trait Node: Send + Sync {
    fn base(&self) -> &NodeBase;

    fn base_mut(&mut self) -> &mut NodeBase;

    /// Node name (e.g. `"ConditionalNode"`, `"fetch"`).
    fn name(&self) -> &str {
        self.base().name()
    }

    fn node_type(&self) -> NodeType {
        self.base().node_type()
    }

    fn arity(&self) -> usize {
        self.base().arity()
    }

    /// Successors in the order they were added. No side effects.
    fn connected_successors(&self) -> &[Arc<dyn Node>] {
        self.base().successors()
    }

    /// Appends one successor edge.
    fn add_successor(&mut self, node: Arc<dyn Node>) {
        self.base_mut().push_successor(node);
    }

    /// Runs the node against the traversal state and returns the (possibly replaced) state.
    async fn execute(&self, state: State) -> Result<State, NodeError>;
}
