use super::{InputKind, TreeFilterMode};
use std::path::PathBuf;

/// ParseRequest - turn a raw report into a tree document
#[derive(Debug, Clone)]
pub struct ParseRequest {
    pub input_path: PathBuf,
    /// Classpath header regex; the built-in default when `None`
    pub header_pattern: Option<String>,
}

impl ParseRequest {
    pub fn new(input_path: PathBuf, header_pattern: Option<String>) -> Self {
        Self {
            input_path,
            header_pattern,
        }
    }
}

/// FilterRequest - narrow an existing tree document
#[derive(Debug, Clone)]
pub struct FilterRequest {
    pub tree_path: PathBuf,
    pub mode: TreeFilterMode,
}

impl FilterRequest {
    pub fn new(tree_path: PathBuf, mode: TreeFilterMode) -> Self {
        Self { tree_path, mode }
    }
}

/// Where a tree comes from for commands that accept either input kind
#[derive(Debug, Clone)]
pub struct TreeSource {
    pub path: PathBuf,
    pub kind: InputKind,
    /// Only used when `kind` is [`InputKind::Report`]
    pub header_pattern: Option<String>,
}

impl TreeSource {
    /// Detects the input kind from the file extension.
    pub fn detect(path: PathBuf, header_pattern: Option<String>) -> Self {
        Self {
            kind: InputKind::detect(&path),
            path,
            header_pattern,
        }
    }
}

/// GraphRequest - build a deduplicated graph with optional filters
///
/// Filters run in a fixed order: tree filter, graph build, exclude, distance.
#[derive(Debug, Clone)]
pub struct GraphRequest {
    pub source: TreeSource,
    pub tree_filter: TreeFilterMode,
    /// Case-sensitive substring removed from graph ids
    pub exclude: Option<String>,
    /// Maximum hop count from the synthetic root; unlimited when `None`
    pub distance: Option<usize>,
}

impl GraphRequest {
    pub fn new(
        source: TreeSource,
        tree_filter: TreeFilterMode,
        exclude: Option<String>,
        distance: Option<usize>,
    ) -> Self {
        Self {
            source,
            tree_filter,
            exclude,
            distance,
        }
    }
}

/// ListRequest - flatten a tree into distinct coordinates
#[derive(Debug, Clone)]
pub struct ListRequest {
    pub source: TreeSource,
}

impl ListRequest {
    pub fn new(source: TreeSource) -> Self {
        Self { source }
    }
}
