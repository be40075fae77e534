//! Configuration file support for deptree.
//!
//! Provides YAML-based configuration through `deptree.config.yml` files,
//! including data structures, file loading, validation, and merging with
//! command-line values.

use anyhow::Context;
use deptree::application::dto::TreeFilterMode;
use deptree::dependency_tree::services::TreeBuilder;
use deptree::shared::Result;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

pub const CONFIG_FILENAME: &str = "deptree.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    /// Regular expression marking the start of a classpath section
    pub header_pattern: Option<String>,
    /// Maximum hop count from the synthetic root (graph)
    pub distance: Option<usize>,
    /// Substring removed from graph ids (graph)
    pub exclude: Option<String>,
    /// Tree filter keywords (filter, graph)
    pub keywords: Option<Vec<String>>,
    /// Keep only project dependencies (filter, graph)
    pub project_only: Option<bool>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: BTreeMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    /// Tree filter from command-line flags, or from the config file when no
    /// tree filter flag was given. Project-only wins over keywords.
    pub fn tree_filter(&self, cli_filter: Option<&str>, cli_project_only: bool) -> TreeFilterMode {
        if cli_filter.is_some() || cli_project_only {
            let keywords = cli_filter
                .map(TreeFilterMode::parse_keywords)
                .unwrap_or_default();
            return TreeFilterMode::from_options(keywords, cli_project_only);
        }

        let keywords = self
            .keywords
            .iter()
            .flatten()
            .map(|keyword| keyword.trim())
            .filter(|keyword| !keyword.is_empty())
            .map(str::to_string)
            .collect();
        TreeFilterMode::from_options(keywords, self.project_only.unwrap_or(false))
    }

    pub fn header_pattern(&self, cli: Option<String>) -> Option<String> {
        cli.or_else(|| self.header_pattern.clone())
    }

    pub fn distance(&self, cli: Option<usize>) -> Option<usize> {
        cli.or(self.distance)
    }

    pub fn exclude(&self, cli: Option<String>) -> Option<String> {
        cli.or_else(|| self.exclude.clone())
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    if content.trim().is_empty() {
        return Ok(ConfigFile::default());
    }

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    tracing::debug!(path = %path.display(), "config file loaded");

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(pattern) = config.header_pattern.as_deref() {
        TreeBuilder::new(pattern).context("Invalid config: header_pattern")?;
    }
    Ok(())
}
