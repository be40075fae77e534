use std::path::Path;

/// What kind of document an input path holds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// Raw text report from a build tool's dependency task
    Report,
    /// Tree document previously written by `parse` or `filter`
    TreeDocument,
}

impl InputKind {
    /// `.json` files (any case) are tree documents; everything else is a report.
    pub fn detect(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => InputKind::TreeDocument,
            _ => InputKind::Report,
        }
    }
}
