use super::line_parser::LineParser;
use crate::dependency_tree::domain::DependencyNode;
use crate::shared::error::DepTreeError;
use crate::shared::Result;
use regex::Regex;

/// Header that opens a parseable classpath section, e.g. `testCompileClasspath - ...`
pub const DEFAULT_HEADER_PATTERN: &str = r"^\w+(Runtime|Compile)Classpath";

/// Node stored by index while the tree shape is still being discovered
struct ArenaNode {
    node: DependencyNode,
    children: Vec<usize>,
}

/// TreeBuilder - rebuilds the dependency forest from indented report text
///
/// Only lines after a line matching the header pattern are considered. The
/// parent of each entry is found with an ancestor stack ordered by
/// indentation level, so no recursion is involved at any depth.
#[derive(Debug, Clone)]
pub struct TreeBuilder {
    header_pattern: Regex,
}

impl TreeBuilder {
    /// Creates a builder for a custom header pattern.
    ///
    /// # Errors
    /// Returns `InvalidHeaderPattern` when `pattern` is not a valid regex.
    pub fn new(pattern: &str) -> Result<Self> {
        let header_pattern = Regex::new(pattern).map_err(|e| DepTreeError::InvalidHeaderPattern {
            pattern: pattern.to_string(),
            details: e.to_string(),
        })?;
        Ok(Self { header_pattern })
    }

    pub fn header_pattern(&self) -> &str {
        self.header_pattern.as_str()
    }

    /// Builds the root nodes of a whole report.
    pub fn build(&self, report: &str) -> Vec<DependencyNode> {
        self.build_from_lines(report.lines())
    }

    /// Builds the root nodes from lines in file order.
    ///
    /// A second section header re-enables parsing but keeps the ancestor
    /// stack, so entries of a later section may attach below nodes of an
    /// earlier one.
    pub fn build_from_lines<'a, I>(&self, lines: I) -> Vec<DependencyNode>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut arena: Vec<ArenaNode> = Vec::new();
        let mut roots: Vec<usize> = Vec::new();
        // (arena index, level), levels strictly increasing from bottom to top
        let mut ancestors: Vec<(usize, usize)> = Vec::new();
        let mut in_section = false;
        let mut sections = 0usize;
        let mut skipped = 0usize;

        for raw_line in lines {
            let line = raw_line.trim_end();
            if self.header_pattern.is_match(line) {
                in_section = true;
                sections += 1;
                continue;
            }

            if !in_section || line.trim().is_empty() {
                continue;
            }

            let Some(parsed) = LineParser::parse_line(line) else {
                skipped += 1;
                continue;
            };

            while ancestors
                .last()
                .is_some_and(|&(_, level)| level >= parsed.level)
            {
                ancestors.pop();
            }

            let index = arena.len();
            match ancestors.last() {
                None => roots.push(index),
                Some(&(parent, _)) => arena[parent].children.push(index),
            }
            arena.push(ArenaNode {
                node: parsed.node,
                children: Vec::new(),
            });
            ancestors.push((index, parsed.level));
        }

        tracing::debug!(
            sections,
            nodes = arena.len(),
            roots = roots.len(),
            skipped,
            "dependency tree rebuilt"
        );

        Self::assemble(arena, roots)
    }

    /// Turns the index arena into owned nested nodes.
    ///
    /// A child is always pushed after its parent, so sweeping the arena from
    /// the back finishes every child before its parent takes it.
    fn assemble(arena: Vec<ArenaNode>, roots: Vec<usize>) -> Vec<DependencyNode> {
        let mut slots: Vec<Option<DependencyNode>> = Vec::with_capacity(arena.len());
        let mut child_lists: Vec<Vec<usize>> = Vec::with_capacity(arena.len());
        for entry in arena {
            slots.push(Some(entry.node));
            child_lists.push(entry.children);
        }

        for index in (0..slots.len()).rev() {
            let children: Vec<DependencyNode> = child_lists[index]
                .iter()
                .filter_map(|&child| slots[child].take())
                .collect();
            if let Some(node) = slots[index].as_mut() {
                node.children = children;
            }
        }

        roots
            .into_iter()
            .filter_map(|index| slots[index].take())
            .collect()
    }
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self {
            header_pattern: Regex::new(DEFAULT_HEADER_PATTERN).unwrap(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn modules(nodes: &[DependencyNode]) -> Vec<&str> {
        nodes.iter().map(|n| n.module.as_str()).collect()
    }

    #[test]
    fn test_build_simple_section() {
        let report = "testCompileClasspath\n+--- g:a:1.0\n|    \\--- g:b:2.0\n";
        let roots = TreeBuilder::default().build(report);

        assert_eq!(roots.len(), 1);
        assert_eq!(roots[0].module, "g:a");
        assert_eq!(roots[0].version, "1.0");
        assert_eq!(roots[0].full, "g:a:1.0");
        assert_eq!(roots[0].children.len(), 1);
        assert_eq!(roots[0].children[0].module, "g:b");
        assert_eq!(roots[0].children[0].version, "2.0");
        assert!(roots[0].children[0].children.is_empty());
    }

    #[test]
    fn test_lines_before_header_are_ignored() {
        let report = "\
Project ':app'
+--- ignored:before:1.0
testRuntimeClasspath - Runtime classpath of source set 'main'.
+--- g:a:1.0
";
        let roots = TreeBuilder::default().build(report);
        assert_eq!(modules(&roots), vec!["g:a"]);
    }

    #[test]
    fn test_missing_header_yields_empty_forest() {
        let report = "+--- g:a:1.0\n|    \\--- g:b:2.0\n";
        assert!(TreeBuilder::default().build(report).is_empty());
    }

    #[test]
    fn test_siblings_keep_source_order() {
        let report = "\
testCompileClasspath - Compile classpath
+--- g:a:1.0
|    +--- g:c:1.0
|    +--- g:d:1.0
|    \\--- g:e:1.0
+--- g:b:1.0
\\--- g:f:1.0
";
        let roots = TreeBuilder::default().build(report);
        assert_eq!(modules(&roots), vec!["g:a", "g:b", "g:f"]);
        assert_eq!(modules(&roots[0].children), vec!["g:c", "g:d", "g:e"]);
    }

    #[test]
    fn test_deep_nesting_and_unwinding() {
        let report = "\
testCompileClasspath
+--- g:a:1.0
|    \\--- g:b:1.0
|         \\--- g:c:1.0
|              \\--- g:d:1.0
\\--- g:e:1.0
";
        let roots = TreeBuilder::default().build(report);
        assert_eq!(modules(&roots), vec!["g:a", "g:e"]);
        let d = &roots[0].children[0].children[0].children[0];
        assert_eq!(d.module, "g:d");
    }

    #[test]
    fn test_noise_lines_do_not_disturb_the_stack() {
        let report = "\
testCompileClasspath
+--- g:a:1.0
|    +--- g:b:1.0

(*) - Indicates repeated occurrences of a transitive dependency subtree.
|    \\--- g:c:1.0
";
        let roots = TreeBuilder::default().build(report);
        assert_eq!(roots.len(), 1);
        assert_eq!(modules(&roots[0].children), vec!["g:b", "g:c"]);
    }

    #[test]
    fn test_second_header_keeps_ancestor_stack() {
        let report = "\
testCompileClasspath
+--- g:a:1.0
|    \\--- g:b:1.0
testRuntimeClasspath
|         \\--- g:c:1.0
+--- g:d:1.0
";
        let roots = TreeBuilder::default().build(report);
        assert_eq!(modules(&roots), vec!["g:a", "g:d"]);
        assert_eq!(roots[0].children[0].children[0].module, "g:c");
    }

    #[test]
    fn test_custom_header_pattern() {
        let builder = TreeBuilder::new(r"^deps:").unwrap();
        let roots = builder.build("deps:\n+--- g:a:1.0\n");
        assert_eq!(modules(&roots), vec!["g:a"]);
        assert_eq!(builder.header_pattern(), "^deps:");
    }

    #[test]
    fn test_invalid_header_pattern() {
        let err = TreeBuilder::new("(unclosed").unwrap_err();
        assert!(err.to_string().contains("Invalid classpath header pattern"));
    }

    #[test]
    fn test_crlf_lines() {
        let report = "testCompileClasspath\r\n+--- g:a:1.0\r\n|    \\--- g:b:2.0\r\n";
        let roots = TreeBuilder::default().build(report);
        assert_eq!(roots[0].full, "g:a:1.0");
        assert_eq!(roots[0].children[0].full, "g:b:2.0");
    }

    #[test]
    fn test_very_deep_tree_does_not_overflow() {
        let mut report = String::from("testCompileClasspath\n");
        for depth in 0..2_000 {
            report.push_str(&" ".repeat(depth * 5));
            report.push_str(&format!("\\--- g:a{}:1.0\n", depth));
        }

        let roots = TreeBuilder::default().build(&report);
        assert_eq!(roots.len(), 1);

        let mut depth = 0;
        let mut current = &roots[0];
        while let Some(child) = current.children.first() {
            current = child;
            depth += 1;
        }
        assert_eq!(depth, 1_999);

        // Nested Vec drops recurse; unwind the chain iteratively instead.
        let mut pending = roots;
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}
