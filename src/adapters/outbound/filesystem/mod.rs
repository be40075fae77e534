/// Filesystem adapters for file I/O operations
pub mod encoding;
mod file_reader;
mod file_writer;

pub use file_reader::FileSystemReader;
pub use file_writer::{FileSystemWriter, StdoutPresenter};
