//! Render configuration, loadable from YAML.
//!
//! ```yaml
//! begin_policy: first_child
//! source_fallback: true
//! verbatim_tags: [send, def]
//! ```

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// How a `begin` node whose arity is not exactly one is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BeginPolicy {
    /// Zero or several children is a malformed node.
    #[default]
    Strict,
    /// Render the first child, ignore the rest. Still an error when empty.
    FirstChild,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UnparserConfig {
    pub begin_policy: BeginPolicy,
    /// Render nodes with unregistered tags from their source range, when
    /// they have one.
    pub source_fallback: bool,
    /// Tags always rendered verbatim from their source range.
    pub verbatim_tags: Vec<String>,
}

impl Default for UnparserConfig {
    fn default() -> Self {
        Self {
            begin_policy: BeginPolicy::Strict,
            source_fallback: true,
            verbatim_tags: Vec::new(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl UnparserConfig {
    pub fn from_yaml_str(input: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(input)?)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_yaml_str(&contents)
    }
}
