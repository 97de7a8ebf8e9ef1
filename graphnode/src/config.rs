//! Node configuration: free-form per-node settings and TOML-described conditional nodes.
//!
//! A graph builder can describe a conditional node in TOML:
//!
//! ```toml
//! key_name = "relevant_chunks"
//! name = "check_chunks"
//! input = "relevant_chunks"
//! output = ["answer"]
//!
//! [node_config]
//! verbose = true
//! timeout_secs = 30
//! ```
//!
//! and turn it into a node with `ConditionalNodeConfig::from_toml_str(..)?.into_node()`.
//! Successors are still added by the graph builder.

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::node::ConditionalNode;

/// Default node name for conditional nodes.
pub const DEFAULT_CONDITIONAL_NAME: &str = "ConditionalNode";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("read node config: {0}")]
    Read(#[from] std::io::Error),
    #[error("parse node config toml: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Per-node settings. `verbose` is understood by this crate; every other key is kept in
/// `extra` for the node implementations that read it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NodeConfig {
    /// Log branch decisions at info level instead of debug.
    #[serde(default)]
    pub verbose: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl NodeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Sets a free-form setting.
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.extra.get(key)
    }
}

fn default_name() -> String {
    DEFAULT_CONDITIONAL_NAME.to_string()
}

/// Serializable description of a conditional node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionalNodeConfig {
    /// State key whose truthiness picks the branch.
    pub key_name: String,
    #[serde(default = "default_name")]
    pub name: String,
    /// Input-key expression; opaque to the conditional node.
    #[serde(default)]
    pub input: String,
    #[serde(default)]
    pub output: Vec<String>,
    #[serde(default)]
    pub node_config: Option<NodeConfig>,
}

impl ConditionalNodeConfig {
    pub fn new(key_name: impl Into<String>) -> Self {
        Self {
            key_name: key_name.into(),
            name: default_name(),
            input: String::new(),
            output: Vec::new(),
            node_config: None,
        }
    }

    /// Parses a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Reads and parses a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    /// Builds a conditional node with no successors.
    pub fn into_node(self) -> ConditionalNode {
        let node = ConditionalNode::new(self.key_name)
            .with_name(self.name)
            .with_input(self.input)
            .with_output(self.output);
        match self.node_config {
            Some(cfg) => node.with_node_config(cfg),
            None => node,
        }
    }
}
