//! Layered (Sugiyama-style) layout for workflow graphs.
//!
//! Four phases run in sequence over a fresh snapshot on every call:
//! graph construction, longest-path layering, barycenter crossing
//! minimization and coordinate assignment. Nothing is cached between calls.

mod error;
mod graph;
mod order;
mod position;
mod ranking;
pub(crate) mod types;
pub use error::LayoutError;
pub use types::*;

use crate::config::LayoutConfig;
use crate::ir::{Connection, NodeId, Workflow};
use graph::LayoutGraph;
use order::order_layers;
use position::assign_coordinates;
use ranking::assign_layers;

#[derive(Debug, Clone, Default)]
pub struct DagLayout {
    pub config: LayoutConfig,
}

impl DagLayout {
    pub fn new(config: LayoutConfig) -> Self {
        Self { config }
    }

    /// Computes placements without touching any workflow.
    pub fn compute(
        &self,
        node_ids: &[NodeId],
        connections: &[Connection],
    ) -> Result<Layout, LayoutError> {
        if node_ids.is_empty() {
            return Ok(Layout::default());
        }

        let graph = LayoutGraph::build(node_ids, connections);
        let mut ranking = assign_layers(&graph).inspect_err(|err| {
            tracing::warn!(%err, "layout skipped");
        })?;
        tracing::debug!(layers = ranking.layers.len(), "assigned layers");

        order_layers(&graph, &mut ranking, self.config.order_passes);
        Ok(assign_coordinates(&graph, &ranking, &self.config))
    }

    /// Lays out `workflow` in place.
    ///
    /// On error no coordinate is modified, so a cyclic workflow keeps its
    /// previous positions exactly.
    pub fn apply(&self, workflow: &mut Workflow) -> Result<Layout, LayoutError> {
        let layout = self.compute(&workflow.node_ids(), &workflow.connections)?;
        for node in &mut workflow.nodes {
            if let Some(placement) = layout.nodes.get(&node.id) {
                node.x = placement.x;
                node.y = placement.y;
            }
        }
        Ok(layout)
    }
}

pub fn compute_layout(workflow: &Workflow, config: &LayoutConfig) -> Result<Layout, LayoutError> {
    DagLayout::new(config.clone()).compute(&workflow.node_ids(), &workflow.connections)
}
