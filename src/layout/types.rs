use std::collections::BTreeMap;

use crate::ir::NodeId;

/// Width reserved for every node when spacing a layer.
pub const NODE_WIDTH: f32 = 240.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodePlacement {
    pub layer: usize,
    /// Left-to-right index within the layer after crossing minimization.
    pub order: usize,
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Layout {
    pub nodes: BTreeMap<NodeId, NodePlacement>,
    /// Final drawing order, one entry per layer.
    pub layers: Vec<Vec<NodeId>>,
    pub width: f32,
    pub height: f32,
    /// Connections skipped because an endpoint was not in the node list.
    pub dropped_connections: usize,
}

impl Layout {
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn layer_of(&self, id: &NodeId) -> Option<usize> {
        self.nodes.get(id).map(|placement| placement.layer)
    }

    pub fn position(&self, id: &NodeId) -> Option<(f32, f32)> {
        self.nodes.get(id).map(|placement| (placement.x, placement.y))
    }
}
