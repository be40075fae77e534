use super::{DependencyNode, ResolutionMarker};
use indexmap::{IndexMap, IndexSet};
use serde::Serialize;
use std::collections::HashSet;

/// Id of the synthetic node that parents every top-level dependency.
pub const ROOT_ID: &str = "root:";

/// A dependency merged by identity across every tree branch it appears in.
///
/// Attributes come from the first occurrence seen during traversal. The
/// adjacency sets are internal bookkeeping and are not serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphNode {
    pub id: String,
    pub module: String,
    pub version: String,
    pub resolution: ResolutionMarker,
    pub full: String,
    #[serde(skip)]
    parents: IndexSet<String>,
    #[serde(skip)]
    children: IndexSet<String>,
}

impl GraphNode {
    pub fn from_tree_node(node: &DependencyNode) -> Self {
        Self {
            id: node.identity(),
            module: node.module.clone(),
            version: node.version.clone(),
            resolution: node.resolution,
            full: node.full.clone(),
            parents: IndexSet::new(),
            children: IndexSet::new(),
        }
    }

    pub fn synthetic_root() -> Self {
        Self {
            id: ROOT_ID.to_string(),
            module: "root".to_string(),
            version: String::new(),
            resolution: ResolutionMarker::None,
            full: "root".to_string(),
            parents: IndexSet::new(),
            children: IndexSet::new(),
        }
    }

    pub fn parents(&self) -> impl Iterator<Item = &str> {
        self.parents.iter().map(String::as_str)
    }

    pub fn children(&self) -> impl Iterator<Item = &str> {
        self.children.iter().map(String::as_str)
    }

    pub fn has_parents(&self) -> bool {
        !self.parents.is_empty()
    }
}

/// A directed parent -> child relationship between two graph node ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Edge {
    pub source: String,
    pub target: String,
}

impl Edge {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }
}

/// Deduplicated dependency graph keyed by node identity.
#[derive(Debug, Clone, Default)]
pub struct DependencyGraph {
    nodes: IndexMap<String, GraphNode>,
    edges: IndexMap<String, IndexSet<String>>,
}

impl DependencyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `node` unless a node with the same id exists.
    ///
    /// Returns `false` when the id was already present; the existing node's
    /// attributes are left as they were.
    pub fn add_node(&mut self, node: GraphNode) -> bool {
        if self.nodes.contains_key(&node.id) {
            return false;
        }
        self.nodes.insert(node.id.clone(), node);
        true
    }

    /// Records `parent_id -> child_id` in both adjacency sets and the edge set.
    ///
    /// Both nodes must already be present; unknown ids are ignored.
    pub fn connect(&mut self, parent_id: &str, child_id: &str) {
        if !self.nodes.contains_key(parent_id) || !self.nodes.contains_key(child_id) {
            return;
        }
        if let Some(child) = self.nodes.get_mut(child_id) {
            child.parents.insert(parent_id.to_string());
        }
        if let Some(parent) = self.nodes.get_mut(parent_id) {
            parent.children.insert(child_id.to_string());
        }
        self.edges
            .entry(parent_id.to_string())
            .or_default()
            .insert(child_id.to_string());
    }

    pub fn node(&self, id: &str) -> Option<&GraphNode> {
        self.nodes.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    /// Nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &GraphNode> {
        self.nodes.values()
    }

    /// Edges grouped by source, in the order each source first gained a child.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.edges.iter().flat_map(|(source, targets)| {
            targets
                .iter()
                .map(move |target| Edge::new(source.as_str(), target.as_str()))
        })
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.values().map(IndexSet::len).sum()
    }

    /// Ids of nodes that nothing points to, in insertion order.
    pub fn parentless_ids(&self) -> Vec<String> {
        self.nodes
            .values()
            .filter(|node| !node.has_parents())
            .map(|node| node.id.clone())
            .collect()
    }

    /// Drops every node for which `keep` returns false, together with every
    /// edge and adjacency entry that references it. Surviving nodes are not
    /// re-parented.
    ///
    /// Returns the number of removed nodes.
    pub fn retain_nodes<F>(&mut self, mut keep: F) -> usize
    where
        F: FnMut(&GraphNode) -> bool,
    {
        let removed: HashSet<String> = self
            .nodes
            .values()
            .filter(|node| !keep(node))
            .map(|node| node.id.clone())
            .collect();

        if removed.is_empty() {
            return 0;
        }

        self.nodes.retain(|id, _| !removed.contains(id));
        for node in self.nodes.values_mut() {
            node.parents.retain(|id| !removed.contains(id));
            node.children.retain(|id| !removed.contains(id));
        }

        self.edges.retain(|source, targets| {
            if removed.contains(source) {
                return false;
            }
            targets.retain(|target| !removed.contains(target));
            !targets.is_empty()
        });

        removed.len()
    }

    /// Borrowing view in the shape of the emitted graph JSON.
    pub fn to_document(&self) -> GraphDocument<'_> {
        let nodes: Vec<&GraphNode> = self.nodes().collect();
        let edges: Vec<Edge> = self.edges().collect();
        GraphDocument {
            metadata: GraphMetadata {
                total_nodes: nodes.len(),
                total_edges: edges.len(),
            },
            nodes,
            edges,
        }
    }
}

/// Serializable form: `{"nodes": [...], "edges": [...], "metadata": {...}}`.
#[derive(Debug, Serialize)]
pub struct GraphDocument<'a> {
    pub nodes: Vec<&'a GraphNode>,
    pub edges: Vec<Edge>,
    pub metadata: GraphMetadata,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GraphMetadata {
    pub total_nodes: usize,
    pub total_edges: usize,
}
