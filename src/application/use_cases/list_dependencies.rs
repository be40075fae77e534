use super::tree_source::load_forest;
use crate::application::dto::{ListRequest, ListResponse};
use crate::dependency_tree::services::DependencyLister;
use crate::ports::outbound::{ProgressReporter, ReportReader, TreeDocumentReader};
use crate::shared::Result;

/// ListDependenciesUseCase - distinct `module:version` coordinates of a tree
///
/// # Type Parameters
/// * `RR` - ReportReader implementation (raw report input)
/// * `TR` - TreeDocumentReader implementation (tree document input)
/// * `PR` - ProgressReporter implementation
pub struct ListDependenciesUseCase<RR, TR, PR> {
    report_reader: RR,
    tree_reader: TR,
    progress_reporter: PR,
}

impl<RR, TR, PR> ListDependenciesUseCase<RR, TR, PR>
where
    RR: ReportReader,
    TR: TreeDocumentReader,
    PR: ProgressReporter,
{
    pub fn new(report_reader: RR, tree_reader: TR, progress_reporter: PR) -> Self {
        Self {
            report_reader,
            tree_reader,
            progress_reporter,
        }
    }

    pub fn execute(&self, request: ListRequest) -> Result<ListResponse> {
        let forest = load_forest(
            &request.source,
            &self.report_reader,
            &self.tree_reader,
            &self.progress_reporter,
        )?;

        let list = DependencyLister::list(forest.roots());
        if list.total_count() == 0 {
            self.progress_reporter
                .report_warning("No versioned dependencies found in the tree");
        } else {
            self.progress_reporter.report(&format!(
                "✅ Extracted {} unique dependencies",
                list.total_count()
            ));
        }

        Ok(ListResponse::new(list))
    }
}
