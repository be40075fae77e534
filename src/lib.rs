//! deptree - dependency report parsing, filtering, and graph conversion
//!
//! This library turns the text output of a build tool's dependency task
//! (ASCII tree art under a classpath header) into a nested tree document,
//! narrows trees by keyword or to in-repository projects, and converts them
//! into a deduplicated graph with a synthetic root.
//!
//! # Architecture
//!
//! - **Domain Layer** (`dependency_tree`): tree/graph models and pure services
//! - **Application Layer** (`application`): use cases, DTOs, and factories
//! - **Ports** (`ports`): interface definitions for infrastructure
//! - **Adapters** (`adapters`): concrete implementations of ports
//! - **Shared** (`shared`): common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use deptree::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! let use_case = BuildGraphUseCase::new(
//!     FileSystemReader::new(),
//!     FileSystemReader::new(),
//!     StderrProgressReporter::new(),
//! );
//!
//! let source = TreeSource::detect(PathBuf::from("dependencies.txt"), None);
//! let request = GraphRequest::new(source, TreeFilterMode::None, None, Some(2));
//! let response = use_case.execute(request)?;
//!
//! if let Some(graph) = response.graph {
//!     println!("{}", JsonFormatter::new().format_graph(&graph)?);
//! }
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod dependency_tree;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonFormatter, YamlFormatter};
    pub use crate::application::dto::{
        FilterRequest, GraphRequest, GraphResponse, InputKind, ListRequest, ListResponse,
        OutputFormat, ParseRequest, TreeFilterMode, TreeResponse, TreeSource,
    };
    pub use crate::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
    pub use crate::application::use_cases::{
        BuildGraphUseCase, FilterTreeUseCase, ListDependenciesUseCase, ParseReportUseCase,
    };
    pub use crate::dependency_tree::domain::{
        DependencyGraph, DependencyList, DependencyNode, Edge, Forest, GraphNode,
        ResolutionMarker, DEFAULT_ROOT_KEY, ROOT_ID,
    };
    pub use crate::dependency_tree::services::{
        DependencyLister, GraphBuilder, LineParser, ProjectNameExtractor, TreeBuilder,
        TreeFilter, DEFAULT_HEADER_PATTERN,
    };
    pub use crate::ports::outbound::{
        DocumentFormatter, OutputPresenter, ProgressReporter, ReportReader, TreeDocumentReader,
    };
    pub use crate::shared::error::{DepTreeError, ExitCode};
    pub use crate::shared::Result;
}
