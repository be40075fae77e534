use super::tree_source::{filter_roots, load_forest};
use crate::application::dto::{GraphRequest, GraphResponse};
use crate::dependency_tree::services::GraphBuilder;
use crate::ports::outbound::{ProgressReporter, ReportReader, TreeDocumentReader};
use crate::shared::Result;

/// BuildGraphUseCase - converts a dependency tree into a deduplicated graph
///
/// Stages run in a fixed order: tree filter, graph build, exclude filter,
/// distance filter.
///
/// # Type Parameters
/// * `RR` - ReportReader implementation (raw report input)
/// * `TR` - TreeDocumentReader implementation (tree document input)
/// * `PR` - ProgressReporter implementation
pub struct BuildGraphUseCase<RR, TR, PR> {
    report_reader: RR,
    tree_reader: TR,
    progress_reporter: PR,
}

impl<RR, TR, PR> BuildGraphUseCase<RR, TR, PR>
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

    /// Executes the graph conversion
    ///
    /// An empty tree produces no graph (`GraphResponse::graph` is `None`)
    /// and a warning.
    pub fn execute(&self, request: GraphRequest) -> Result<GraphResponse> {
        let forest = load_forest(
            &request.source,
            &self.report_reader,
            &self.tree_reader,
            &self.progress_reporter,
        )?;

        let filtered = filter_roots(forest.roots(), &request.tree_filter);
        if filtered.is_some() {
            self.progress_reporter.report(&format!(
                "🔍 Applied tree filter: {}",
                request.tree_filter.describe()
            ));
        }
        let roots = filtered.as_deref().unwrap_or(forest.roots());

        self.progress_reporter
            .report("🔗 Converting dependency tree to graph representation...");
        let Some(mut graph) = GraphBuilder::build(roots) else {
            self.progress_reporter
                .report_warning("No graph data generated: the dependency tree is empty");
            return Ok(GraphResponse::new(None));
        };

        if let Some(keyword) = request.exclude.as_deref().filter(|k| !k.is_empty()) {
            let removed = GraphBuilder::exclude(&mut graph, keyword);
            self.progress_reporter.report(&format!(
                "🚫 Excluded {} node(s) whose id contains '{}'",
                removed, keyword
            ));
        }

        if let Some(max_distance) = request.distance {
            match GraphBuilder::limit_distance(&mut graph, max_distance) {
                Some(removed) => self.progress_reporter.report(&format!(
                    "📏 Dropped {} node(s) more than {} hop(s) from root",
                    removed, max_distance
                )),
                None => self
                    .progress_reporter
                    .report_warning("Root node not found in graph; distance filter skipped"),
            }
        }

        self.progress_reporter.report(&format!(
            "✅ Graph contains {} unique node(s) and {} edge(s)",
            graph.node_count(),
            graph.edge_count()
        ));
        Ok(GraphResponse::new(Some(graph)))
    }
}
