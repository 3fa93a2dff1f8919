use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::layout::{DagLayout, Layout, LayoutError};

/// Stable identifier of a workflow node.
///
/// Layout keys every placement by this id, never by position in the node list.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub String);

impl NodeId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for NodeId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    #[serde(default)]
    pub x: f32,
    #[serde(default)]
    pub y: f32,
    /// Everything else the editor stores on a node. Layout never reads it.
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Connection {
    pub source: NodeId,
    pub target: NodeId,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl Connection {
    pub fn new(source: impl Into<NodeId>, target: impl Into<NodeId>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            attributes: Map::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workflow {
    #[serde(default)]
    pub nodes: Vec<Node>,
    #[serde(default)]
    pub connections: Vec<Connection>,
}

impl Workflow {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            connections: Vec::new(),
        }
    }

    pub fn add_node(&mut self, id: impl Into<NodeId>, x: f32, y: f32) -> NodeId {
        let id = id.into();
        self.nodes.push(Node {
            id: id.clone(),
            x,
            y,
            attributes: Map::new(),
        });
        id
    }

    /// Appends a connection as-is. Endpoints are not checked against the node list.
    pub fn add_connection(&mut self, source: impl Into<NodeId>, target: impl Into<NodeId>) {
        self.connections.push(Connection::new(source, target));
    }

    pub fn node(&self, id: &NodeId) -> Option<&Node> {
        self.nodes.iter().find(|node| &node.id == id)
    }

    pub fn node_ids(&self) -> Vec<NodeId> {
        self.nodes.iter().map(|node| node.id.clone()).collect()
    }

    pub fn apply_layout(&mut self) -> Result<Layout, LayoutError> {
        DagLayout::default().apply(self)
    }
}

impl Default for Workflow {
    fn default() -> Self {
        Self::new()
    }
}
