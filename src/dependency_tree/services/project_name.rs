use crate::dependency_tree::domain::DEFAULT_ROOT_KEY;
use regex::Regex;
use std::sync::LazyLock;

static PROJECT_HEADER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^Project ':([^']+)'").unwrap());

/// ProjectNameExtractor - names the tree document after the reported project
pub struct ProjectNameExtractor;

impl ProjectNameExtractor {
    /// Returns the project path from the first `Project ':name'` banner,
    /// or `"root"` when the report has none.
    pub fn extract(report: &str) -> String {
        report
            .lines()
            .find_map(|line| {
                PROJECT_HEADER_RE
                    .captures(line.trim())
                    .and_then(|caps| caps.get(1))
                    .map(|m| m.as_str().to_string())
            })
            .unwrap_or_else(|| DEFAULT_ROOT_KEY.to_string())
    }
}
