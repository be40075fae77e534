use crate::dependency_tree::domain::{DependencyGraph, DependencyList, Forest};

/// Tree document produced by `parse` or `filter`
#[derive(Debug, Clone)]
pub struct TreeResponse {
    pub forest: Forest,
}

impl TreeResponse {
    pub fn new(forest: Forest) -> Self {
        Self { forest }
    }
}

/// Result of the graph use case
///
/// `graph` is `None` when the (filtered) tree had no roots; that is reported
/// as a warning, not a failure.
#[derive(Debug, Clone)]
pub struct GraphResponse {
    pub graph: Option<DependencyGraph>,
}

impl GraphResponse {
    pub fn new(graph: Option<DependencyGraph>) -> Self {
        Self { graph }
    }
}

#[derive(Debug, Clone)]
pub struct ListResponse {
    pub list: DependencyList,
}

impl ListResponse {
    pub fn new(list: DependencyList) -> Self {
        Self { list }
    }
}
