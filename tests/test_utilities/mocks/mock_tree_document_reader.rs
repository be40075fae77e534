use deptree::prelude::*;
use std::path::Path;

/// Mock TreeDocumentReader returning a fixed forest
pub struct MockTreeDocumentReader {
    pub forest: Forest,
}

impl MockTreeDocumentReader {
    pub fn new(forest: Forest) -> Self {
        Self { forest }
    }

    pub fn empty() -> Self {
        Self {
            forest: Forest::new(),
        }
    }
}

impl TreeDocumentReader for MockTreeDocumentReader {
    fn read_tree(&self, _path: &Path) -> Result<Forest> {
        Ok(self.forest.clone())
    }
}
