mod dependency_lister;
mod graph_builder;
mod line_parser;
mod project_name;
mod tree_builder;
mod tree_filter;

pub use dependency_lister::DependencyLister;
pub use graph_builder::GraphBuilder;
pub use line_parser::{LineParser, ParsedLine, NODE_MARKER};
pub use project_name::ProjectNameExtractor;
pub use tree_builder::{TreeBuilder, DEFAULT_HEADER_PATTERN};
pub use tree_filter::{TreeFilter, PROJECT_PREFIX};
