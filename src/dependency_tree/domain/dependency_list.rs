use serde::Serialize;

/// Sorted, distinct `module:version` coordinates found in a dependency tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DependencyList {
    dependencies: Vec<String>,
    total_count: usize,
}

impl DependencyList {
    /// Sorts and deduplicates `coordinates`.
    pub fn new(mut coordinates: Vec<String>) -> Self {
        coordinates.sort();
        coordinates.dedup();
        Self {
            total_count: coordinates.len(),
            dependencies: coordinates,
        }
    }

    pub fn dependencies(&self) -> &[String] {
        &self.dependencies
    }

    pub fn total_count(&self) -> usize {
        self.total_count
    }
}
