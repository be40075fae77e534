use crate::dependency_tree::domain::DependencyNode;
use std::collections::HashSet;

/// Module prefix that marks an in-repository project dependency
pub const PROJECT_PREFIX: &str = "project ";

/// TreeFilter - derives a filtered copy of a dependency tree
///
/// Both filters return freshly allocated nodes; the input tree is never
/// modified or aliased. Traversals use explicit stacks.
pub struct TreeFilter;

impl TreeFilter {
    /// Keeps every node whose module contains one of `keywords`
    /// (case-insensitive), every ancestor of such a node, and its direct
    /// children.
    ///
    /// Nodes are identified by their `full` text. A kept node's deeper
    /// descendants survive only when they were kept on their own account.
    pub fn by_keywords(roots: &[DependencyNode], keywords: &[String]) -> Vec<DependencyNode> {
        let kept = Self::collect_keyword_matches(roots, keywords);
        tracing::debug!(keywords = ?keywords, kept = kept.len(), "keyword filter matched");
        Self::retain(roots, |node| kept.contains(node.full.as_str()))
    }

    /// Keeps only `project ` modules. A non-project node is dropped together
    /// with its entire subtree.
    pub fn project_only(roots: &[DependencyNode]) -> Vec<DependencyNode> {
        Self::retain(roots, |node| node.module.starts_with(PROJECT_PREFIX))
    }

    /// Walks the whole tree, matching at every level, and returns the `full`
    /// keys of the nodes to keep.
    fn collect_keyword_matches<'a>(
        roots: &'a [DependencyNode],
        keywords: &[String],
    ) -> HashSet<&'a str> {
        let needles: Vec<String> = keywords.iter().map(|k| k.to_lowercase()).collect();
        let mut kept: HashSet<&'a str> = HashSet::new();
        let mut path: Vec<&'a DependencyNode> = Vec::new();
        let mut stack: Vec<(&'a DependencyNode, usize)> =
            roots.iter().rev().map(|node| (node, 0)).collect();

        while let Some((node, depth)) = stack.pop() {
            path.truncate(depth);
            path.push(node);

            let module = node.module.to_lowercase();
            if needles.iter().any(|needle| module.contains(needle.as_str())) {
                kept.extend(path.iter().map(|n| n.full.as_str()));
                kept.extend(node.children.iter().map(|c| c.full.as_str()));
            }

            stack.extend(node.children.iter().rev().map(|child| (child, depth + 1)));
        }

        kept
    }

    /// Copies the tree, keeping nodes for which `keep` holds. Children of a
    /// dropped node are never visited.
    fn retain<F>(roots: &[DependencyNode], keep: F) -> Vec<DependencyNode>
    where
        F: Fn(&DependencyNode) -> bool,
    {
        struct Frame<'a> {
            source: Option<&'a DependencyNode>,
            pending: std::slice::Iter<'a, DependencyNode>,
            kept: Vec<DependencyNode>,
        }

        let mut stack = vec![Frame {
            source: None,
            pending: roots.iter(),
            kept: Vec::new(),
        }];

        while let Some(frame) = stack.last_mut() {
            if let Some(child) = frame.pending.next() {
                if keep(child) {
                    stack.push(Frame {
                        source: Some(child),
                        pending: child.children.iter(),
                        kept: Vec::new(),
                    });
                }
                continue;
            }

            let Some(finished) = stack.pop() else {
                break;
            };
            let Some(source) = finished.source else {
                return finished.kept;
            };

            let mut copy = source.detached();
            copy.children = finished.kept;
            if let Some(parent) = stack.last_mut() {
                parent.kept.push(copy);
            }
        }

        Vec::new()
    }
}
