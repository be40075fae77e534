use super::encoding;
use crate::dependency_tree::domain::{DependencyNode, Forest};
use crate::ports::outbound::{ReportReader, TreeDocumentReader};
use crate::shared::error::DepTreeError;
use crate::shared::security::{validate_file_size, validate_regular_file, MAX_FILE_SIZE};
use crate::shared::Result;
use indexmap::IndexMap;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// FileSystemReader adapter for reading files from the file system
///
/// This adapter implements both ReportReader and TreeDocumentReader ports,
/// providing file system access for raw reports and tree documents.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystemReader {
    /// Safely read a file with security checks:
    /// - Reject symbolic links
    /// - Check file size limits
    /// - Validate file is a regular file
    fn safe_read_bytes(&self, path: &Path, file_description: &str) -> Result<Vec<u8>> {
        let file_size = validate_regular_file(path, file_description)?;
        validate_file_size(file_size, path, MAX_FILE_SIZE)?;

        fs::read(path).map_err(|e| {
            DepTreeError::FileReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }

    /// Each tree level nests two JSON levels (node object and `children`
    /// array), so serde_json's recursion limit is lifted and the stack grows
    /// on demand instead.
    fn parse_entries(text: &str) -> serde_json::Result<IndexMap<String, serde_json::Value>> {
        let mut deserializer = serde_json::Deserializer::from_str(text);
        deserializer.disable_recursion_limit();
        let entries =
            IndexMap::<String, serde_json::Value>::deserialize(serde_stacker::Deserializer::new(
                &mut deserializer,
            ))?;
        deserializer.end()?;
        Ok(entries)
    }

    fn ensure_exists(path: &Path, suggestion: &str) -> Result<()> {
        if !path.exists() {
            return Err(DepTreeError::InputNotFound {
                path: path.to_path_buf(),
                suggestion: suggestion.to_string(),
            }
            .into());
        }
        Ok(())
    }
}

impl ReportReader for FileSystemReader {
    fn read_report(&self, path: &Path) -> Result<String> {
        Self::ensure_exists(
            path,
            "Capture a report first, e.g. `gradle dependencies > dependencies.txt`",
        )?;

        let bytes = self.safe_read_bytes(path, "dependency report")?;
        let (text, encoding) = encoding::decode(&bytes);
        tracing::debug!(
            path = %path.display(),
            bytes = bytes.len(),
            encoding = encoding.name(),
            "dependency report decoded"
        );
        Ok(text)
    }
}

impl TreeDocumentReader for FileSystemReader {
    fn read_tree(&self, path: &Path) -> Result<Forest> {
        Self::ensure_exists(
            path,
            "Create a tree document first with `deptree parse <REPORT> -o tree.json`",
        )?;

        let bytes = self.safe_read_bytes(path, "tree document")?;
        let (text, _) = encoding::decode(&bytes);

        let entries = Self::parse_entries(&text).map_err(|e| DepTreeError::InvalidTreeDocument {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;

        let mut forest = Forest::new();
        for (key, value) in entries {
            if !value.is_array() {
                tracing::debug!(key = %key, "skipping non-list entry in tree document");
                continue;
            }
            let roots = Vec::<DependencyNode>::deserialize(serde_stacker::Deserializer::new(value))
                .map_err(|e| DepTreeError::InvalidTreeDocument {
                    path: path.to_path_buf(),
                    details: format!("entry '{}': {}", key, e),
                })?;
            forest.insert(key, roots);
        }

        Ok(forest)
    }
}
