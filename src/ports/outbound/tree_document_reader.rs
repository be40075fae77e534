use crate::dependency_tree::domain::Forest;
use crate::shared::Result;
use std::path::Path;

/// TreeDocumentReader port for loading a previously written tree document
pub trait TreeDocumentReader {
    /// Reads and deserializes the tree document at `path`
    ///
    /// Top-level entries whose value is not a list of nodes are skipped.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or is not a JSON object
    /// of node lists
    fn read_tree(&self, path: &Path) -> Result<Forest>;
}
