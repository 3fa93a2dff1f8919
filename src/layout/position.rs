use std::collections::BTreeMap;

use super::graph::LayoutGraph;
use super::ranking::Ranking;
use super::{Layout, NODE_WIDTH, NodePlacement};
use crate::config::LayoutConfig;

/// Turns the final layer order into coordinates.
///
/// Every layer is centered on x = 0 on its own; y grows by `layer_spacing` per layer.
pub(super) fn assign_coordinates(
    graph: &LayoutGraph,
    ranking: &Ranking,
    config: &LayoutConfig,
) -> Layout {
    let stride = NODE_WIDTH + config.node_spacing;
    let mut nodes = BTreeMap::new();
    let mut layers = Vec::with_capacity(ranking.layers.len());
    let mut width = 0.0f32;

    for (layer, bucket) in ranking.layers.iter().enumerate() {
        let layer_width = bucket.len() as f32 * stride - config.node_spacing;
        let start_x = -layer_width / 2.0;
        let y = layer as f32 * config.layer_spacing;
        width = width.max(layer_width);

        let mut ids = Vec::with_capacity(bucket.len());
        for (order, idx) in bucket.iter().enumerate() {
            let id = graph.node_id(*idx).clone();
            nodes.insert(
                id.clone(),
                NodePlacement {
                    layer,
                    order,
                    x: start_x + order as f32 * stride,
                    y,
                },
            );
            ids.push(id);
        }
        layers.push(ids);
    }

    let height = layers.len().saturating_sub(1) as f32 * config.layer_spacing;

    Layout {
        nodes,
        layers,
        width,
        height,
        dropped_connections: graph.dropped_connections,
    }
}
