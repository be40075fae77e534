use crate::dependency_tree::domain::{DependencyList, DependencyNode};

/// DependencyLister - flattens a dependency tree into distinct coordinates
pub struct DependencyLister;

impl DependencyLister {
    /// Collects `module:version` for every node that has a version.
    pub fn list(roots: &[DependencyNode]) -> DependencyList {
        let mut coordinates = Vec::new();
        let mut stack: Vec<&DependencyNode> = roots.iter().collect();

        while let Some(node) = stack.pop() {
            if !node.version.is_empty() {
                coordinates.push(format!("{}:{}", node.module, node.version));
            }
            stack.extend(node.children.iter());
        }

        DependencyList::new(coordinates)
    }
}
