use crate::dependency_tree::domain::{DependencyGraph, DependencyNode, GraphNode, ROOT_ID};
use std::collections::{HashMap, VecDeque};

/// GraphBuilder - converts a dependency tree into a deduplicated graph
///
/// Nodes are merged by identity (`module:version`); the first occurrence in
/// depth-first order supplies the attributes, later occurrences only add
/// edges. A synthetic root (`root:`) parents every top-level dependency.
pub struct GraphBuilder;

impl GraphBuilder {
    /// Builds the graph for `roots`.
    ///
    /// Returns `None` when there are no roots: no graph is produced for an
    /// empty tree.
    pub fn build(roots: &[DependencyNode]) -> Option<DependencyGraph> {
        if roots.is_empty() {
            return None;
        }

        let mut graph = DependencyGraph::new();
        // Pre-order walk: (node, id of the tree parent)
        let mut stack: Vec<(&DependencyNode, Option<String>)> =
            roots.iter().rev().map(|node| (node, None)).collect();

        while let Some((node, parent_id)) = stack.pop() {
            let id = node.identity();
            graph.add_node(GraphNode::from_tree_node(node));
            if let Some(parent_id) = parent_id.as_deref() {
                graph.connect(parent_id, &id);
            }
            stack.extend(
                node.children
                    .iter()
                    .rev()
                    .map(|child| (child, Some(id.clone()))),
            );
        }

        let top_level = graph.parentless_ids();
        graph.add_node(GraphNode::synthetic_root());
        for id in &top_level {
            graph.connect(ROOT_ID, id);
        }

        tracing::debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            top_level = top_level.len(),
            "dependency graph built"
        );

        Some(graph)
    }

    /// Removes every node whose id contains `keyword` (case-sensitive) and
    /// every edge touching one. Descendants are not re-parented.
    ///
    /// Returns the number of removed nodes.
    pub fn exclude(graph: &mut DependencyGraph, keyword: &str) -> usize {
        if keyword.is_empty() {
            return 0;
        }
        let removed = graph.retain_nodes(|node| !node.id.contains(keyword));
        tracing::debug!(keyword, removed, "exclude filter applied");
        removed
    }

    /// Keeps only nodes reachable from the synthetic root within
    /// `max_distance` hops along child edges.
    ///
    /// Returns the number of removed nodes, or `None` when the graph has no
    /// synthetic root; the graph is then left unchanged.
    pub fn limit_distance(graph: &mut DependencyGraph, max_distance: usize) -> Option<usize> {
        if !graph.contains(ROOT_ID) {
            tracing::warn!("root node not found in graph; distance filter skipped");
            return None;
        }

        let mut distances: HashMap<String, usize> = HashMap::new();
        distances.insert(ROOT_ID.to_string(), 0);
        let mut queue: VecDeque<(String, usize)> = VecDeque::new();
        queue.push_back((ROOT_ID.to_string(), 0));

        while let Some((current, distance)) = queue.pop_front() {
            if distance >= max_distance {
                continue;
            }
            let Some(node) = graph.node(&current) else {
                continue;
            };
            for child in node.children() {
                if !distances.contains_key(child) {
                    distances.insert(child.to_string(), distance + 1);
                    queue.push_back((child.to_string(), distance + 1));
                }
            }
        }

        let removed = graph.retain_nodes(|node| distances.contains_key(&node.id));
        tracing::debug!(max_distance, removed, "distance filter applied");
        Some(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dependency_tree::domain::{Edge, ResolutionMarker};

    fn node(full: &str, children: Vec<DependencyNode>) -> DependencyNode {
        let segments: Vec<&str> = full.split(':').collect();
        let (module, version) = if segments.len() > 2 {
            (format!("{}:{}", segments[0], segments[1]), segments[2].to_string())
        } else {
            (full.to_string(), String::new())
        };
        DependencyNode::new(module, version, ResolutionMarker::None, full).with_children(children)
    }

    fn edge_pairs(graph: &DependencyGraph) -> Vec<(String, String)> {
        graph.edges().map(|e| (e.source, e.target)).collect()
    }

    fn ids(graph: &DependencyGraph) -> Vec<String> {
        graph.nodes().map(|n| n.id.clone()).collect()
    }

    #[test]
    fn test_build_empty_tree_produces_no_graph() {
        assert!(GraphBuilder::build(&[]).is_none());
    }

    #[test]
    fn test_build_single_root_still_gets_synthetic_root() {
        let graph = GraphBuilder::build(&[node("g:a:1.0", vec![])]).unwrap();
        assert_eq!(ids(&graph), vec!["g:a:1.0", "root:"]);
        assert_eq!(
            edge_pairs(&graph),
            vec![("root:".to_string(), "g:a:1.0".to_string())]
        );
        let root = graph.node(ROOT_ID).unwrap();
        assert_eq!(root.module, "root");
        assert!(root.version.is_empty());
    }

    #[test]
    fn test_build_merges_identical_identities() {
        let tree = vec![
            node("g:a:1.0", vec![node("g:shared:2.0", vec![node("g:leaf:1.0", vec![])])]),
            node("g:b:1.0", vec![node("g:shared:2.0", vec![])]),
        ];
        let graph = GraphBuilder::build(&tree).unwrap();

        assert_eq!(
            ids(&graph),
            vec!["g:a:1.0", "g:shared:2.0", "g:leaf:1.0", "g:b:1.0", "root:"]
        );
        assert_eq!(graph.edge_count(), 5);
        let shared = graph.node("g:shared:2.0").unwrap();
        assert_eq!(shared.parents().collect::<Vec<_>>(), vec!["g:a:1.0", "g:b:1.0"]);
        assert_eq!(shared.children().collect::<Vec<_>>(), vec!["g:leaf:1.0"]);
    }

    #[test]
    fn test_build_first_occurrence_wins() {
        let mut first = node("g:a:1.0", vec![]);
        first.full = "g:a:1.0".to_string();
        let mut second = node("g:a:1.0", vec![]);
        second.full = "g:a:0.9 -> 1.0 (*)".to_string();
        second.resolution = ResolutionMarker::Omitted;

        let tree = vec![node("g:x:1.0", vec![first]), node("g:y:1.0", vec![second])];
        let graph = GraphBuilder::build(&tree).unwrap();

        let merged = graph.node("g:a:1.0").unwrap();
        assert_eq!(merged.full, "g:a:1.0");
        assert!(merged.resolution.is_none());
    }

    #[test]
    fn test_build_deduplicates_repeated_relationships() {
        let tree = vec![
            node("g:a:1.0", vec![node("g:b:1.0", vec![])]),
            node("g:c:1.0", vec![node("g:a:1.0", vec![node("g:b:1.0", vec![])])]),
        ];
        let graph = GraphBuilder::build(&tree).unwrap();

        let pairs = edge_pairs(&graph);
        let a_to_b = pairs
            .iter()
            .filter(|(s, t)| s == "g:a:1.0" && t == "g:b:1.0")
            .count();
        assert_eq!(a_to_b, 1);
        // g:a has a parent now, so only g:c hangs off the synthetic root
        let root_children: Vec<&str> = graph.node(ROOT_ID).unwrap().children().collect();
        assert_eq!(root_children, vec!["g:c:1.0"]);
    }

    #[test]
    fn test_build_uses_bare_module_when_version_empty() {
        let graph = GraphBuilder::build(&[node("project :core", vec![])]).unwrap();
        assert!(graph.contains("project :core"));
    }

    #[test]
    fn test_exclude_removes_nodes_and_touching_edges() {
        let tree = vec![node(
            "g:app:1.0",
            vec![node("g:libx:1.0", vec![node("g:leaf:1.0", vec![])]), node("g:other:1.0", vec![])],
        )];
        let mut graph = GraphBuilder::build(&tree).unwrap();

        let removed = GraphBuilder::exclude(&mut graph, "x");

        assert_eq!(removed, 1);
        assert!(!graph.contains("g:libx:1.0"));
        assert!(graph.contains("g:leaf:1.0"));
        assert_eq!(
            edge_pairs(&graph),
            vec![
                ("g:app:1.0".to_string(), "g:other:1.0".to_string()),
                ("root:".to_string(), "g:app:1.0".to_string()),
            ]
        );
    }

    #[test]
    fn test_exclude_is_case_sensitive() {
        let mut graph = GraphBuilder::build(&[node("g:Alpha:1.0", vec![])]).unwrap();
        assert_eq!(GraphBuilder::exclude(&mut graph, "alpha"), 0);
        assert_eq!(GraphBuilder::exclude(&mut graph, "Alpha"), 1);
    }

    #[test]
    fn test_exclude_keeps_nodes_with_another_parent() {
        let tree = vec![
            node("g:drop:1.0", vec![node("g:shared:1.0", vec![])]),
            node("g:keep:1.0", vec![node("g:shared:1.0", vec![])]),
        ];
        let mut graph = GraphBuilder::build(&tree).unwrap();
        GraphBuilder::exclude(&mut graph, "drop");

        let shared = graph.node("g:shared:1.0").unwrap();
        assert_eq!(shared.parents().collect::<Vec<_>>(), vec!["g:keep:1.0"]);
    }

    #[test]
    fn test_exclude_with_empty_keyword_is_noop() {
        let mut graph = GraphBuilder::build(&[node("g:a:1.0", vec![])]).unwrap();
        assert_eq!(GraphBuilder::exclude(&mut graph, ""), 0);
        assert_eq!(graph.node_count(), 2);
    }

    #[test]
    fn test_distance_zero_keeps_only_root() {
        let tree = vec![node("g:a:1.0", vec![node("g:b:1.0", vec![])])];
        let mut graph = GraphBuilder::build(&tree).unwrap();

        GraphBuilder::limit_distance(&mut graph, 0);

        assert_eq!(ids(&graph), vec!["root:"]);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_distance_uses_shortest_path() {
        let tree = vec![
            node("g:a:1.0", vec![node("g:b:1.0", vec![node("g:c:1.0", vec![])])]),
            node("g:d:1.0", vec![node("g:c:1.0", vec![node("g:e:1.0", vec![])])]),
        ];
        let mut graph = GraphBuilder::build(&tree).unwrap();

        let removed = GraphBuilder::limit_distance(&mut graph, 2);

        assert_eq!(removed, Some(1));
        assert!(graph.contains("g:c:1.0"));
        assert!(!graph.contains("g:e:1.0"));
        assert!(graph.edges().all(|e| e.target != "g:e:1.0"));
        assert!(graph.edges().any(|e| e == Edge::new("g:b:1.0", "g:c:1.0")));
    }

    #[test]
    fn test_distance_drops_nodes_unreachable_after_exclude() {
        let tree = vec![node("g:mid:1.0", vec![node("g:orphan:1.0", vec![])])];
        let mut graph = GraphBuilder::build(&tree).unwrap();
        GraphBuilder::exclude(&mut graph, "mid");
        assert!(graph.contains("g:orphan:1.0"));

        GraphBuilder::limit_distance(&mut graph, 10);
        assert!(!graph.contains("g:orphan:1.0"));
    }

    #[test]
    fn test_distance_without_root_is_noop() {
        let mut graph = GraphBuilder::build(&[node("g:a:1.0", vec![])]).unwrap();
        GraphBuilder::exclude(&mut graph, "root");
        let before = graph.node_count();

        assert_eq!(GraphBuilder::limit_distance(&mut graph, 0), None);
        assert_eq!(graph.node_count(), before);
    }

    #[test]
    fn test_build_deep_chain_iteratively() {
        let mut chain = node("g:n0:1.0", vec![]);
        for depth in 1..2_000 {
            chain = node(&format!("g:n{}:1.0", depth), vec![chain]);
        }
        let graph = GraphBuilder::build(std::slice::from_ref(&chain)).unwrap();
        assert_eq!(graph.node_count(), 2_001);

        let mut pending = vec![chain];
        while let Some(mut next) = pending.pop() {
            pending.append(&mut next.children);
        }
    }
}
