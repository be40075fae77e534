use crate::dependency_tree::domain::{DependencyGraph, DependencyList, Forest};
use crate::ports::outbound::DocumentFormatter;
use crate::shared::Result;
use serde::Serialize;

/// JsonFormatter adapter - pretty-printed JSON with two-space indentation
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }

    fn to_pretty<T: Serialize + ?Sized>(value: &T) -> Result<String> {
        let mut output = serde_json::to_string_pretty(value)
            .map_err(|e| anyhow::anyhow!("Failed to serialize JSON output: {}", e))?;
        output.push('\n');
        Ok(output)
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentFormatter for JsonFormatter {
    fn format_tree(&self, forest: &Forest) -> Result<String> {
        Self::to_pretty(forest)
    }

    fn format_graph(&self, graph: &DependencyGraph) -> Result<String> {
        Self::to_pretty(&graph.to_document())
    }

    fn format_list(&self, list: &DependencyList) -> Result<String> {
        Self::to_pretty(list)
    }
}
