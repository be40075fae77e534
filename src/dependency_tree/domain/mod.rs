pub mod dependency_graph;
pub mod dependency_list;
pub mod dependency_node;
pub mod forest;

pub use dependency_graph::{DependencyGraph, Edge, GraphDocument, GraphMetadata, GraphNode, ROOT_ID};
pub use dependency_list::DependencyList;
pub use dependency_node::{DependencyNode, ResolutionMarker};
pub use forest::{Forest, DEFAULT_ROOT_KEY};
