use crate::shared::Result;
use std::path::Path;

/// ReportReader port for loading a raw dependency report
///
/// A report is the plain-text output of a build tool's dependency task.
/// Implementations are responsible for decoding it to a `String`.
pub trait ReportReader {
    /// Reads the report at `path` as text
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file does not exist
    /// - The file cannot be read due to permissions or I/O errors
    /// - The file fails the size or symlink checks
    fn read_report(&self, path: &Path) -> Result<String>;
}
