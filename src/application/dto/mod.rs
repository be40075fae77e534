/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod input_kind;
mod output_format;
mod requests;
mod responses;
mod tree_filter_mode;

pub use input_kind::InputKind;
pub use output_format::OutputFormat;
pub use requests::{FilterRequest, GraphRequest, ListRequest, ParseRequest, TreeSource};
pub use responses::{GraphResponse, ListResponse, TreeResponse};
pub use tree_filter_mode::TreeFilterMode;
