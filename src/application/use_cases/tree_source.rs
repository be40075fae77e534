use crate::application::dto::{InputKind, TreeFilterMode, TreeSource};
use crate::dependency_tree::domain::{DependencyNode, Forest};
use crate::dependency_tree::services::{ProjectNameExtractor, TreeBuilder, TreeFilter};
use crate::ports::outbound::{ProgressReporter, ReportReader, TreeDocumentReader};
use crate::shared::Result;

/// Builds a tree document from report text, keyed by the report's project name.
///
/// # Errors
/// Returns an error if `header_pattern` is not a valid regular expression
pub(crate) fn forest_from_report(report: &str, header_pattern: Option<&str>) -> Result<Forest> {
    let builder = match header_pattern {
        Some(pattern) => TreeBuilder::new(pattern)?,
        None => TreeBuilder::default(),
    };
    let roots = builder.build(report);
    Ok(Forest::single(ProjectNameExtractor::extract(report), roots))
}

/// Loads a tree from either a raw report or a tree document.
pub(crate) fn load_forest<RR, TR, PR>(
    source: &TreeSource,
    report_reader: &RR,
    tree_reader: &TR,
    progress_reporter: &PR,
) -> Result<Forest>
where
    RR: ReportReader,
    TR: TreeDocumentReader,
    PR: ProgressReporter,
{
    let forest = match source.kind {
        InputKind::Report => {
            progress_reporter.report(&format!(
                "📖 Loading dependency report from: {}",
                source.path.display()
            ));
            let report = report_reader.read_report(&source.path)?;
            forest_from_report(&report, source.header_pattern.as_deref())?
        }
        InputKind::TreeDocument => {
            progress_reporter.report(&format!(
                "📖 Loading tree document from: {}",
                source.path.display()
            ));
            tree_reader.read_tree(&source.path)?
        }
    };

    progress_reporter.report(&format!(
        "✅ Loaded {} node(s) under '{}'",
        forest.node_count(),
        forest.root_key().unwrap_or_default()
    ));
    Ok(forest)
}

/// Applies the tree-level filter; `None` when no filter is configured, so
/// callers can keep borrowing the unfiltered roots.
pub(crate) fn filter_roots(
    roots: &[DependencyNode],
    mode: &TreeFilterMode,
) -> Option<Vec<DependencyNode>> {
    match mode {
        TreeFilterMode::None => None,
        TreeFilterMode::Keywords(keywords) => Some(TreeFilter::by_keywords(roots, keywords)),
        TreeFilterMode::ProjectOnly => Some(TreeFilter::project_only(roots)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const REPORT: &str = "\
Project ':demo'
releaseRuntimeClasspath - Runtime classpath of variant 'release'.
+--- project :core
|    \\--- g:a:1.0
\\--- g:b:2.0
";

    #[test]
    fn test_forest_from_report_uses_project_name() {
        let forest = forest_from_report(REPORT, None).unwrap();
        assert_eq!(forest.root_key(), Some("demo"));
        assert_eq!(forest.roots().len(), 2);
        assert_eq!(forest.node_count(), 3);
    }

    #[test]
    fn test_forest_from_report_custom_pattern_without_match() {
        let forest = forest_from_report(REPORT, Some("^compileOnly")).unwrap();
        assert!(forest.is_empty());
    }

    #[test]
    fn test_forest_from_report_invalid_pattern() {
        let err = forest_from_report(REPORT, Some("(unclosed")).unwrap_err();
        assert!(err.to_string().contains("Invalid classpath header pattern"));
    }

    #[test]
    fn test_filter_roots_none_borrows() {
        let forest = forest_from_report(REPORT, None).unwrap();
        assert!(filter_roots(forest.roots(), &TreeFilterMode::None).is_none());
    }

    #[test]
    fn test_filter_roots_project_only() {
        let forest = forest_from_report(REPORT, None).unwrap();
        let filtered = filter_roots(forest.roots(), &TreeFilterMode::ProjectOnly).unwrap();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].module, "project :core");
        assert!(filtered[0].children.is_empty());
    }
}
