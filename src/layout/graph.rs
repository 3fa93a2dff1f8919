use std::collections::HashMap;
use std::collections::hash_map::Entry;

use petgraph::graph::{DiGraph, NodeIndex};

use crate::ir::{Connection, NodeId};

/// Index-based view of a workflow: node weights are the external ids, edges carry nothing.
pub(super) struct LayoutGraph {
    pub graph: DiGraph<NodeId, ()>,
    pub index_of: HashMap<NodeId, NodeIndex>,
    pub dropped_connections: usize,
}

impl LayoutGraph {
    pub fn build(node_ids: &[NodeId], connections: &[Connection]) -> Self {
        let mut graph = DiGraph::with_capacity(node_ids.len(), connections.len());
        let mut index_of = HashMap::with_capacity(node_ids.len());

        for id in node_ids {
            // First occurrence owns the index; repeated ids share its placement.
            if let Entry::Vacant(slot) = index_of.entry(id.clone()) {
                slot.insert(graph.add_node(id.clone()));
            }
        }

        let mut dropped_connections = 0;
        for conn in connections {
            match (index_of.get(&conn.source), index_of.get(&conn.target)) {
                (Some(&src), Some(&tgt)) => {
                    graph.update_edge(src, tgt, ());
                }
                _ => dropped_connections += 1,
            }
        }

        tracing::debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            dropped_connections,
            "built layout graph"
        );

        Self {
            graph,
            index_of,
            dropped_connections,
        }
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn node_id(&self, idx: NodeIndex) -> &NodeId {
        &self.graph[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(names: &[&str]) -> Vec<NodeId> {
        names.iter().map(|name| NodeId::from(*name)).collect()
    }

    #[test]
    fn indices_follow_node_list_order() {
        let graph = LayoutGraph::build(&ids(&["c", "a", "b"]), &[]);
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.index_of[&NodeId::from("c")].index(), 0);
        assert_eq!(graph.index_of[&NodeId::from("b")].index(), 2);
        assert_eq!(graph.node_id(NodeIndex::new(1)).as_str(), "a");
    }

    #[test]
    fn dangling_connections_are_dropped() {
        let connections = vec![
            Connection::new("a", "b"),
            Connection::new("a", "missing"),
            Connection::new("ghost", "b"),
        ];
        let graph = LayoutGraph::build(&ids(&["a", "b"]), &connections);
        assert_eq!(graph.graph.edge_count(), 1);
        assert_eq!(graph.dropped_connections, 2);
    }

    #[test]
    fn parallel_connections_collapse() {
        let connections = vec![Connection::new("a", "b"), Connection::new("a", "b")];
        let graph = LayoutGraph::build(&ids(&["a", "b"]), &connections);
        assert_eq!(graph.graph.edge_count(), 1);
        assert_eq!(graph.dropped_connections, 0);
    }

    #[test]
    fn duplicate_ids_keep_first_index() {
        let graph = LayoutGraph::build(&ids(&["a", "b", "a"]), &[]);
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.index_of[&NodeId::from("a")].index(), 0);
    }
}
