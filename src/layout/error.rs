use thiserror::Error;

use crate::ir::NodeId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// The graph has no topological order. Node coordinates were left untouched.
    #[error("workflow graph contains a cycle through node `{node}`")]
    Cycle { node: NodeId },
}
