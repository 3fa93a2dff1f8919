use petgraph::Direction::Incoming;
use petgraph::algo::toposort;
use petgraph::graph::NodeIndex;

use super::LayoutError;
use super::graph::LayoutGraph;

pub(super) struct Ranking {
    /// Layer per node, indexed by `NodeIndex::index()`.
    pub layer_of: Vec<usize>,
    /// Nodes grouped by layer, each bucket in node-list order.
    pub layers: Vec<Vec<NodeIndex>>,
}

/// Longest-path layering: roots sit on layer 0, every other node one below its deepest parent.
pub(super) fn assign_layers(graph: &LayoutGraph) -> Result<Ranking, LayoutError> {
    let sorted = toposort(&graph.graph, None).map_err(|cycle| LayoutError::Cycle {
        node: graph.node_id(cycle.node_id()).clone(),
    })?;

    let mut layer_of = vec![0usize; graph.node_count()];
    for idx in sorted {
        let layer = graph
            .graph
            .neighbors_directed(idx, Incoming)
            .map(|parent| layer_of[parent.index()] + 1)
            .max()
            .unwrap_or(0);
        layer_of[idx.index()] = layer;
    }

    let depth = layer_of.iter().max().map_or(0, |deepest| deepest + 1);
    let mut layers: Vec<Vec<NodeIndex>> = vec![Vec::new(); depth];
    // Bucket by node index, not by topological position, so layer 0 keeps the
    // caller's ordering and repeated runs agree.
    for idx in graph.graph.node_indices() {
        layers[layer_of[idx.index()]].push(idx);
    }

    Ok(Ranking { layer_of, layers })
}
