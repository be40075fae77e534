use super::tree_source::forest_from_report;
use crate::application::dto::{ParseRequest, TreeResponse};
use crate::dependency_tree::services::DEFAULT_HEADER_PATTERN;
use crate::ports::outbound::{ProgressReporter, ReportReader};
use crate::shared::Result;

/// ParseReportUseCase - turns a raw dependency report into a tree document
///
/// # Type Parameters
/// * `RR` - ReportReader implementation
/// * `PR` - ProgressReporter implementation
pub struct ParseReportUseCase<RR, PR> {
    report_reader: RR,
    progress_reporter: PR,
}

impl<RR, PR> ParseReportUseCase<RR, PR>
where
    RR: ReportReader,
    PR: ProgressReporter,
{
    pub fn new(report_reader: RR, progress_reporter: PR) -> Self {
        Self {
            report_reader,
            progress_reporter,
        }
    }

    /// Reads the report and builds the tree of its classpath sections.
    ///
    /// A report without a matching header yields an empty tree and a
    /// warning, not an error.
    pub fn execute(&self, request: ParseRequest) -> Result<TreeResponse> {
        self.progress_reporter.report(&format!(
            "📖 Loading dependency report from: {}",
            request.input_path.display()
        ));
        let report = self.report_reader.read_report(&request.input_path)?;

        let forest = forest_from_report(&report, request.header_pattern.as_deref())?;

        if forest.is_empty() {
            self.progress_reporter.report_warning(&format!(
                "No dependency lines found under a header matching '{}'",
                request
                    .header_pattern
                    .as_deref()
                    .unwrap_or(DEFAULT_HEADER_PATTERN)
            ));
        } else {
            self.progress_reporter.report(&format!(
                "✅ Parsed {} node(s) ({} root(s)) for project '{}'",
                forest.node_count(),
                forest.roots().len(),
                forest.root_key().unwrap_or_default()
            ));
        }

        Ok(TreeResponse::new(forest))
    }
}
