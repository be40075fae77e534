/// Tree-level filter applied before a tree is written or turned into a graph
///
/// Only one mode is active at a time; project-only takes precedence over
/// keywords when both are requested.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TreeFilterMode {
    #[default]
    None,
    /// Case-insensitive substrings matched against `module`
    Keywords(Vec<String>),
    /// Keep only `project ` modules
    ProjectOnly,
}

impl TreeFilterMode {
    pub fn from_options(keywords: Vec<String>, project_only: bool) -> Self {
        if project_only {
            TreeFilterMode::ProjectOnly
        } else if keywords.is_empty() {
            TreeFilterMode::None
        } else {
            TreeFilterMode::Keywords(keywords)
        }
    }

    /// Splits a comma-separated keyword list, trimming entries and dropping
    /// empty ones.
    pub fn parse_keywords(raw: &str) -> Vec<String> {
        raw.split(',')
            .map(str::trim)
            .filter(|keyword| !keyword.is_empty())
            .map(str::to_string)
            .collect()
    }

    pub fn is_none(&self) -> bool {
        matches!(self, TreeFilterMode::None)
    }

    pub fn describe(&self) -> String {
        match self {
            TreeFilterMode::None => "no filter".to_string(),
            TreeFilterMode::Keywords(keywords) => format!("keywords [{}]", keywords.join(", ")),
            TreeFilterMode::ProjectOnly => "project dependencies only".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_keywords_trims_and_drops_empty() {
        assert_eq!(
            TreeFilterMode::parse_keywords(" jackson, ,guava ,"),
            vec!["jackson".to_string(), "guava".to_string()]
        );
        assert!(TreeFilterMode::parse_keywords(" , ").is_empty());
    }

    #[test]
    fn test_project_only_wins() {
        let mode = TreeFilterMode::from_options(vec!["a".to_string()], true);
        assert_eq!(mode, TreeFilterMode::ProjectOnly);
    }

    #[test]
    fn test_no_keywords_means_no_filter() {
        let mode = TreeFilterMode::from_options(Vec::new(), false);
        assert!(mode.is_none());
    }

    #[test]
    fn test_describe() {
        let mode = TreeFilterMode::Keywords(vec!["a".to_string(), "b".to_string()]);
        assert_eq!(mode.describe(), "keywords [a, b]");
        assert_eq!(TreeFilterMode::ProjectOnly.describe(), "project dependencies only");
    }
}
