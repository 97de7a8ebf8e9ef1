//! # GraphNode
//!
//! The conditional-branching primitive of a state-in, state-out node graph.
//!
//! A [`ConditionalNode`] looks up one key in the traversal [`State`] and hands the
//! whole traversal to one of its two successors: the first when the value is truthy,
//! the second when the key is absent or the value is falsy. It never edits the state
//! and returns whatever the chosen successor returns.
//!
//! ## Main modules
//!
//! - [`node`]: [`Node`] trait, [`NodeBase`], [`NodeType`], [`ConditionalNode`], [`Branch`].
//! - [`state`]: [`State`], the string-keyed JSON map threaded through a traversal.
//! - [`truthy`]: [`Truthiness`], the predicate that decides the branch.
//! - [`config`]: [`NodeConfig`], [`ConditionalNodeConfig`] (TOML).
//! - [`error`]: [`NodeError`].
//! - [`logging`]: `tracing` helpers used during dispatch.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use async_trait::async_trait;
//! use graphnode::{ConditionalNode, Node, NodeBase, NodeError, NodeType, State};
//!
//! struct Tag {
//!     base: NodeBase,
//! }
//!
//! #[async_trait]
//! impl Node for Tag {
//!     fn base(&self) -> &NodeBase {
//!         &self.base
//!     }
//!     fn base_mut(&mut self) -> &mut NodeBase {
//!         &mut self.base
//!     }
//!     async fn execute(&self, mut state: State) -> Result<State, NodeError> {
//!         state.insert("ran", self.name());
//!         Ok(state)
//!     }
//! }
//!
//! # async fn demo() -> Result<(), NodeError> {
//! let mut check = ConditionalNode::new("doc");
//! check.add_successor(Arc::new(Tag { base: NodeBase::new("parse", NodeType::Node, 1) }));
//! check.add_successor(Arc::new(Tag { base: NodeBase::new("fetch", NodeType::Node, 1) }));
//!
//! let state = check.execute(State::new()).await?;
//! assert_eq!(state.get("ran"), Some(&"fetch".into()));
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod node;
pub mod state;
pub mod truthy;

pub use config::{ConditionalNodeConfig, ConfigError, NodeConfig, DEFAULT_CONDITIONAL_NAME};
pub use error::NodeError;
pub use node::{Branch, ConditionalNode, Node, NodeBase, NodeType, CONDITIONAL_ARITY};
pub use state::State;
pub use truthy::Truthiness;
