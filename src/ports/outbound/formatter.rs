use crate::dependency_tree::domain::{DependencyGraph, DependencyList, Forest};
use crate::shared::Result;

/// DocumentFormatter port for serializing the three document kinds
///
/// Implementations decide the concrete text format (JSON, YAML); the
/// document shapes are fixed by the domain types.
pub trait DocumentFormatter {
    /// Formats a tree document: `{ "<project>": [ node, ... ] }`
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format_tree(&self, forest: &Forest) -> Result<String>;

    /// Formats a graph document with `nodes`, `edges`, and `metadata`
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format_graph(&self, graph: &DependencyGraph) -> Result<String>;

    /// Formats a dependency list with `dependencies` and `total_count`
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format_list(&self, list: &DependencyList) -> Result<String>;
}
