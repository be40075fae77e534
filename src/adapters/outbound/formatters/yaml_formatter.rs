use crate::dependency_tree::domain::{DependencyGraph, DependencyList, Forest};
use crate::ports::outbound::DocumentFormatter;
use crate::shared::Result;
use serde::Serialize;

/// YamlFormatter adapter - block-style YAML, keys in declaration order
pub struct YamlFormatter;

impl YamlFormatter {
    pub fn new() -> Self {
        Self
    }

    fn to_yaml<T: Serialize + ?Sized>(value: &T) -> Result<String> {
        serde_yaml_ng::to_string(value)
            .map_err(|e| anyhow::anyhow!("Failed to serialize YAML output: {}", e))
    }
}

impl Default for YamlFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentFormatter for YamlFormatter {
    fn format_tree(&self, forest: &Forest) -> Result<String> {
        Self::to_yaml(forest)
    }

    fn format_graph(&self, graph: &DependencyGraph) -> Result<String> {
        Self::to_yaml(&graph.to_document())
    }

    fn format_list(&self, list: &DependencyList) -> Result<String> {
        Self::to_yaml(list)
    }
}
