use super::tree_source::filter_roots;
use crate::application::dto::{FilterRequest, TreeResponse};
use crate::ports::outbound::{ProgressReporter, TreeDocumentReader};
use crate::shared::error::DepTreeError;
use crate::shared::Result;

/// FilterTreeUseCase - narrows an existing tree document
///
/// Only the root collection (the document's first node list) is filtered;
/// any further collections are written back untouched.
///
/// # Type Parameters
/// * `TR` - TreeDocumentReader implementation
/// * `PR` - ProgressReporter implementation
pub struct FilterTreeUseCase<TR, PR> {
    tree_reader: TR,
    progress_reporter: PR,
}

impl<TR, PR> FilterTreeUseCase<TR, PR>
where
    TR: TreeDocumentReader,
    PR: ProgressReporter,
{
    pub fn new(tree_reader: TR, progress_reporter: PR) -> Self {
        Self {
            tree_reader,
            progress_reporter,
        }
    }

    pub fn execute(&self, request: FilterRequest) -> Result<TreeResponse> {
        if request.mode.is_none() {
            return Err(DepTreeError::Validation {
                message: "Either keywords or project-only filtering must be specified".to_string(),
            }
            .into());
        }

        self.progress_reporter.report(&format!(
            "📖 Loading tree document from: {}",
            request.tree_path.display()
        ));
        let forest = self.tree_reader.read_tree(&request.tree_path)?;

        if forest.root_key().is_none() {
            self.progress_reporter
                .report_warning("Tree document contains no node lists; nothing to filter");
        }

        self.progress_reporter.report(&format!(
            "🔍 Filtering dependencies: {}",
            request.mode.describe()
        ));
        let before = forest.node_count();
        let filtered = filter_roots(forest.roots(), &request.mode).unwrap_or_default();
        let forest = forest.with_roots(filtered);

        self.progress_reporter.report(&format!(
            "✅ Kept {} of {} node(s)",
            forest.node_count(),
            before
        ));
        Ok(TreeResponse::new(forest))
    }
}
