use petgraph::graph::{DiGraph, NodeIndex as GraphIndex};

use super::types::{LinkKind, NodeRole, PathNode};
use crate::detector::{cycle_length, find_cycle_start};
use crate::path::{NodeIndex, PathStore};

/// Directed graph view of a path
pub type PathGraph = DiGraph<PathNode, LinkKind>;

/// Build the graph view of `path`
///
/// Arena node `i` becomes graph node `i`. When the path is not empty a
/// synthetic [`PathNode::Start`] node is appended after them with a single
/// edge to the first node.
pub fn to_digraph(path: &PathStore) -> PathGraph {
    let roles = classify_nodes(path);
    let mut graph = PathGraph::with_capacity(path.node_count() + 1, path.node_count() + 1);

    for (index, role) in roles.iter().enumerate() {
        graph.add_node(PathNode::Node { index, role: *role });
    }

    if path.start() != path.end() {
        let start = graph.add_node(PathNode::Start);
        graph.add_edge(start, GraphIndex::new(path.start()), LinkKind::Start);
    }

    for (from, to) in path.links() {
        if to == path.end() {
            continue;
        }

        let kind = if roles[from].on_cycle() && roles[to].on_cycle() {
            LinkKind::Cycle
        } else {
            LinkKind::Chain
        };
        graph.add_edge(GraphIndex::new(from), GraphIndex::new(to), kind);
    }

    graph
}

fn classify_nodes(path: &PathStore) -> Vec<NodeRole> {
    let mut roles = vec![NodeRole::Unreached; path.node_count()];
    let cycle_start = find_cycle_start(path);

    let mut current = path.start();
    while current != cycle_start {
        roles[current] = NodeRole::Chain;
        current = path.next(current);
    }

    if cycle_start != path.end() {
        let mut node: NodeIndex = cycle_start;
        for _ in 0..cycle_length(path, cycle_start) {
            roles[node] = NodeRole::Cycle;
            node = path.next(node);
        }
        roles[cycle_start] = NodeRole::CycleEntry;
    }

    roles
}

#[cfg(test)]
mod tests {
    use petgraph::visit::EdgeRef;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::path::{END, PathShape};

    fn roles(graph: &PathGraph) -> Vec<Option<NodeRole>> {
        graph.node_weights().map(PathNode::role).collect()
    }

    #[test]
    fn test_empty_path_has_no_nodes() {
        let graph = to_digraph(&PathStore::new());

        assert_eq!(graph.node_count(), 0);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_chain_then_cycle_roles() {
        let graph = to_digraph(&PathStore::from_shape(PathShape::new(2, 3)));

        assert_eq!(
            roles(&graph),
            vec![
                Some(NodeRole::Chain),
                Some(NodeRole::Chain),
                Some(NodeRole::CycleEntry),
                Some(NodeRole::Cycle),
                Some(NodeRole::Cycle),
                None,
            ]
        );
    }

    #[test]
    fn test_edge_kinds() {
        let graph = to_digraph(&PathStore::from_shape(PathShape::new(1, 2)));

        let mut edges: Vec<_> = graph
            .edge_references()
            .map(|edge| (edge.source().index(), edge.target().index(), *edge.weight()))
            .collect();
        edges.sort();

        assert_eq!(
            edges,
            vec![
                (0, 1, LinkKind::Chain),
                (1, 2, LinkKind::Cycle),
                (2, 1, LinkKind::Cycle),
                (3, 0, LinkKind::Start),
            ]
        );
    }

    #[test]
    fn test_acyclic_path_has_no_cycle_edges() {
        let graph = to_digraph(&PathStore::from_shape(PathShape::new(4, 0)));

        assert!(graph.edge_weights().all(|kind| *kind != LinkKind::Cycle));
        assert_eq!(graph.edge_count(), 4);
    }

    #[test]
    fn test_unreached_nodes_are_marked() {
        let mut path = PathStore::new();
        let a = path.add_node();
        let b = path.add_node();
        path.set_next(END, a);
        path.set_next(b, a);

        let graph = to_digraph(&path);

        assert_eq!(
            roles(&graph),
            vec![Some(NodeRole::Chain), Some(NodeRole::Unreached), None]
        );
    }
}
