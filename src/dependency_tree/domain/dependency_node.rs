use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Annotation a build tool appends to a dependency line, e.g. `(*)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResolutionMarker {
    #[default]
    #[serde(rename = "")]
    None,
    /// `(*)` - the subtree was printed earlier and is omitted here
    #[serde(rename = "*")]
    Omitted,
    /// `(+)` - the version was forced
    #[serde(rename = "+")]
    Forced,
    /// `(c)` - the entry is a dependency constraint
    #[serde(rename = "c")]
    Constraint,
}

impl ResolutionMarker {
    /// Maps the character found inside a parenthesized suffix to a marker.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '*' => Some(ResolutionMarker::Omitted),
            '+' => Some(ResolutionMarker::Forced),
            'c' => Some(ResolutionMarker::Constraint),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ResolutionMarker::None => "",
            ResolutionMarker::Omitted => "*",
            ResolutionMarker::Forced => "+",
            ResolutionMarker::Constraint => "c",
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, ResolutionMarker::None)
    }

    /// Reads a stored marker leniently: `null`, non-strings, and unknown
    /// labels all become [`ResolutionMarker::None`].
    fn deserialize_lenient<'de, D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Stored {
            Label(String),
            Other(serde::de::IgnoredAny),
        }

        let marker = match Stored::deserialize(deserializer)? {
            Stored::Label(label) => {
                let mut symbols = label.chars();
                match (symbols.next(), symbols.next()) {
                    (Some(symbol), None) => Self::from_symbol(symbol).unwrap_or_default(),
                    _ => ResolutionMarker::None,
                }
            }
            Stored::Other(_) => ResolutionMarker::None,
        };
        Ok(marker)
    }
}

impl fmt::Display for ResolutionMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of a dependency tree.
///
/// `full` is the verbatim text that followed the `--- ` marker on the source
/// line. Tree filters use it as the node key, so two lines with identical
/// text are treated as the same node by those filters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyNode {
    #[serde(default)]
    pub module: String,
    #[serde(default)]
    pub version: String,
    #[serde(default, deserialize_with = "ResolutionMarker::deserialize_lenient")]
    pub resolution: ResolutionMarker,
    #[serde(default)]
    pub full: String,
    #[serde(default)]
    pub children: Vec<DependencyNode>,
}

impl DependencyNode {
    pub fn new(
        module: impl Into<String>,
        version: impl Into<String>,
        resolution: ResolutionMarker,
        full: impl Into<String>,
    ) -> Self {
        Self {
            module: module.into(),
            version: version.into(),
            resolution,
            full: full.into(),
            children: Vec::new(),
        }
    }

    /// Builder-style helper used mostly by tests and fixtures.
    pub fn with_children(mut self, children: Vec<DependencyNode>) -> Self {
        self.children = children;
        self
    }

    /// Copies this node's own fields, leaving the children list empty.
    pub fn detached(&self) -> Self {
        Self {
            module: self.module.clone(),
            version: self.version.clone(),
            resolution: self.resolution,
            full: self.full.clone(),
            children: Vec::new(),
        }
    }

    /// Graph identity: `module:version`, or the bare module when the version is empty.
    pub fn identity(&self) -> String {
        if self.version.is_empty() {
            self.module.clone()
        } else {
            format!("{}:{}", self.module, self.version)
        }
    }
}
