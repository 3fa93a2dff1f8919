use petgraph::Direction::Incoming;
use petgraph::graph::NodeIndex;

use super::graph::LayoutGraph;
use super::ranking::Ranking;

/// Barycenter sweeps from layer 1 downward. Layer 0 is never reordered.
///
/// Each pass sorts a layer by the mean position of its parents on the layer
/// directly above, using that layer's order as already updated in this pass.
/// The sort is stable, so equal barycenters keep their current relative order.
pub(super) fn order_layers(graph: &LayoutGraph, ranking: &mut Ranking, passes: usize) {
    if ranking.layers.len() <= 1 {
        return;
    }

    let mut position = vec![0usize; graph.node_count()];
    for bucket in &ranking.layers {
        record_positions(bucket, &mut position);
    }

    for _ in 0..passes {
        for layer in 1..ranking.layers.len() {
            let mut scored: Vec<(NodeIndex, f32)> = ranking.layers[layer]
                .iter()
                .map(|&node| {
                    let score = barycenter(graph, node, layer - 1, &ranking.layer_of, &position);
                    (node, score)
                })
                .collect();
            scored.sort_by(|a, b| a.1.total_cmp(&b.1));

            let bucket = &mut ranking.layers[layer];
            bucket.clear();
            bucket.extend(scored.into_iter().map(|(node, _)| node));
            record_positions(bucket, &mut position);
        }
    }

    tracing::debug!(passes, layers = ranking.layers.len(), "crossing minimization done");
}

/// Mean position of `node`'s parents that live on `above`; 0 when it has none there.
fn barycenter(
    graph: &LayoutGraph,
    node: NodeIndex,
    above: usize,
    layer_of: &[usize],
    position: &[usize],
) -> f32 {
    let (sum, count) = graph
        .graph
        .neighbors_directed(node, Incoming)
        .filter(|parent| layer_of[parent.index()] == above)
        .fold((0usize, 0usize), |(sum, count), parent| {
            (sum + position[parent.index()], count + 1)
        });
    if count == 0 {
        0.0
    } else {
        sum as f32 / count as f32
    }
}

fn record_positions(bucket: &[NodeIndex], position: &mut [usize]) {
    for (idx, node) in bucket.iter().enumerate() {
        position[node.index()] = idx;
    }
}
