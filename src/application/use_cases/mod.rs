/// Use cases module containing application business logic orchestration
mod build_graph;
mod filter_tree;
mod list_dependencies;
mod parse_report;
mod tree_source;

pub use build_graph::BuildGraphUseCase;
pub use filter_tree::FilterTreeUseCase;
pub use list_dependencies::ListDependenciesUseCase;
pub use parse_report::ParseReportUseCase;
