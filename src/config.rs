//! Name list configuration.
//!
//! The set of selectors to generate comes from, in order of precedence:
//! names given on the command line, a `selectors.toml` in the project root,
//! or the embedded default list (the crop-ratio buttons this tool was
//! originally written for).

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

// Embedded at compile time so the binary works with no config file present
const DEFAULT_SELECTORS: &str = include_str!("../defaults/selectors.toml");

/// Name of the optional per-project override file.
pub const CONFIG_FILE: &str = "selectors.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectorConfig {
    /// Drawable state names; each must have `<name>_pressed` and
    /// `<name>_normal` image resources in the project.
    pub names: Vec<String>,
}

impl SelectorConfig {
    /// Parse a TOML document into a config, rejecting empty name lists.
    pub fn parse(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents).context("Failed to parse selector config")?;
        if config.names.is_empty() {
            bail!("Selector config contains no names");
        }
        Ok(config)
    }

    /// The compiled-in default list.
    pub fn default_list() -> Self {
        // The embedded file is validated by tests, so a parse failure here
        // is a build defect
        Self::parse(DEFAULT_SELECTORS).expect("embedded defaults/selectors.toml is invalid")
    }

    /// Load the config for a project: `<root>/selectors.toml` if present,
    /// otherwise the embedded defaults.
    pub fn load(project_dir: &Path) -> Result<Self> {
        let path = project_dir.join(CONFIG_FILE);
        if path.is_file() {
            tracing::debug!("Loading name list from {}", path.display());
            let contents = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            Self::parse(&contents)
                .with_context(|| format!("Invalid selector config at {}", path.display()))
        } else {
            tracing::debug!("No {} in project root, using built-in list", CONFIG_FILE);
            Ok(Self::default_list())
        }
    }
}
