/// Formatter adapters for the supported document formats
mod json_formatter;
mod yaml_formatter;

pub use json_formatter::JsonFormatter;
pub use yaml_formatter::YamlFormatter;
