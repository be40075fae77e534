use super::DependencyNode;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Root key used when a report names no project.
pub const DEFAULT_ROOT_KEY: &str = "root";

/// Named collections of root-level dependency nodes.
///
/// Serializes as a plain JSON object (`{"<rootKey>": [...]}`). Key order is
/// kept, and downstream stages operate on the first key only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Forest {
    collections: IndexMap<String, Vec<DependencyNode>>,
}

impl Forest {
    pub fn new() -> Self {
        Self::default()
    }

    /// A forest with a single named collection.
    pub fn single(root_key: impl Into<String>, roots: Vec<DependencyNode>) -> Self {
        let mut forest = Self::new();
        forest.insert(root_key, roots);
        forest
    }

    pub fn insert(&mut self, key: impl Into<String>, roots: Vec<DependencyNode>) {
        self.collections.insert(key.into(), roots);
    }

    /// The key of the root collection: the first key encountered.
    pub fn root_key(&self) -> Option<&str> {
        self.collections.keys().next().map(String::as_str)
    }

    /// Root nodes of the root collection (empty when the forest has no keys).
    pub fn roots(&self) -> &[DependencyNode] {
        self.collections
            .values()
            .next()
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Replaces the root collection's nodes, leaving other collections untouched.
    ///
    /// A forest without keys is returned unchanged.
    pub fn with_roots(mut self, roots: Vec<DependencyNode>) -> Self {
        if let Some(slot) = self.collections.values_mut().next() {
            *slot = roots;
        }
        self
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.collections.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.roots().is_empty()
    }

    /// Number of nodes in the root collection, counted over every level.
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut stack: Vec<&DependencyNode> = self.roots().iter().collect();
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.children.iter());
        }
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dependency_tree::domain::ResolutionMarker;

    fn node(module: &str, version: &str) -> DependencyNode {
        DependencyNode::new(
            module,
            version,
            ResolutionMarker::None,
            format!("{}:{}", module, version),
        )
    }

    #[test]
    fn test_root_key_is_first_inserted() {
        let mut forest = Forest::new();
        forest.insert("app", vec![node("g:a", "1.0")]);
        forest.insert("lib", vec![node("g:b", "1.0"), node("g:c", "1.0")]);

        assert_eq!(forest.root_key(), Some("app"));
        assert_eq!(forest.roots().len(), 1);
        assert_eq!(forest.roots()[0].module, "g:a");
    }

    #[test]
    fn test_empty_forest_has_no_roots() {
        let forest = Forest::new();
        assert_eq!(forest.root_key(), None);
        assert!(forest.roots().is_empty());
        assert!(forest.is_empty());
    }

    #[test]
    fn test_with_roots_replaces_only_root_collection() {
        let mut forest = Forest::new();
        forest.insert("app", vec![node("g:a", "1.0")]);
        forest.insert("lib", vec![node("g:b", "1.0")]);

        let forest = forest.with_roots(vec![]);
        assert!(forest.roots().is_empty());
        assert_eq!(forest.keys().collect::<Vec<_>>(), vec!["app", "lib"]);
    }

    #[test]
    fn test_node_count_includes_descendants() {
        let tree = node("g:a", "1.0").with_children(vec![
            node("g:b", "1.0").with_children(vec![node("g:c", "1.0")]),
            node("g:d", "1.0"),
        ]);
        let forest = Forest::single("root", vec![tree]);
        assert_eq!(forest.node_count(), 4);
    }

    #[test]
    fn test_serializes_as_plain_object() {
        let forest = Forest::single("root", vec![node("g:a", "1.0")]);
        let json = serde_json::to_value(&forest).unwrap();
        assert_eq!(json["root"][0]["module"], "g:a");
    }
}
