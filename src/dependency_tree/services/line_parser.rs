use crate::dependency_tree::domain::{DependencyNode, ResolutionMarker};
use regex::Regex;
use std::sync::LazyLock;

/// Characters that draw the tree and precede a dependency's text
const TREE_GLYPHS: [char; 5] = [' ', '|', '+', '-', '\\'];

/// Marker that separates the tree art from the dependency text
pub const NODE_MARKER: &str = "--- ";

/// Version override notation, e.g. `g:a:1.0 -> 2.0`
const OVERRIDE_SEPARATOR: &str = " -> ";

static VERSION_TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9A-Za-z.\-]+").unwrap());

static RESOLUTION_MARKER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(([*+c])\)").unwrap());

/// A dependency line turned into a childless node plus its indentation.
///
/// `level` is the raw character offset of the dependency text. Only the
/// relative order of levels is meaningful.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine {
    pub node: DependencyNode,
    pub level: usize,
}

/// LineParser - classifies one report line as a dependency node or not.
///
/// Pure text processing with no I/O.
pub struct LineParser;

impl LineParser {
    /// Parses a single line of a dependency report.
    ///
    /// Returns `None` for lines that are not dependency entries: no `--- `
    /// marker, or nothing after it.
    pub fn parse_line(line: &str) -> Option<ParsedLine> {
        let marker_at = line.find(NODE_MARKER)?;
        let full = line[marker_at + NODE_MARKER.len()..].trim();
        if full.is_empty() {
            return None;
        }

        let level = Self::indentation_level(line);
        let (module, version) = Self::split_identity(full);
        if module.is_empty() {
            return None;
        }
        let resolution = Self::resolution_marker(full);

        Some(ParsedLine {
            node: DependencyNode::new(module, version, resolution, full),
            level,
        })
    }

    /// Offset of the first character that is not tree-drawing art.
    pub fn indentation_level(line: &str) -> usize {
        line.chars()
            .position(|c| !TREE_GLYPHS.contains(&c))
            .unwrap_or_else(|| line.chars().count())
    }

    /// Splits the dependency text into `(module, version)`.
    fn split_identity(full: &str) -> (String, String) {
        if let Some((left, right)) = full.split_once(OVERRIDE_SEPARATOR) {
            let module = left.split(':').take(2).collect::<Vec<_>>().join(":");
            return (module, Self::version_token(right));
        }

        let segments: Vec<&str> = full.split(':').collect();
        if segments.len() > 2 {
            let module = format!("{}:{}", segments[0], segments[1]);
            (module, Self::version_token(segments[2]))
        } else {
            // Bare module reference such as `project :core`
            (full.to_string(), String::new())
        }
    }

    fn version_token(text: &str) -> String {
        VERSION_TOKEN_RE
            .find(text)
            .map(|m| m.as_str().to_string())
            .unwrap_or_default()
    }

    fn resolution_marker(full: &str) -> ResolutionMarker {
        RESOLUTION_MARKER_RE
            .captures(full)
            .and_then(|caps| caps.get(1))
            .and_then(|m| m.as_str().chars().next())
            .and_then(ResolutionMarker::from_symbol)
            .unwrap_or_default()
    }
}
