//! Engine configuration
//!
//! Default parameters for the parameterised queries, loadable from YAML.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Parameters used when a caller runs the whole battery at once
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// N for the top-tagged photos query
    pub top_photos: usize,
    /// N for the matchmaker query
    pub top_matches: usize,
    /// Maximum birth-year difference for matchmaker pairs (inclusive)
    pub match_year_diff: u32,
    /// N for the friend suggestion query
    pub top_suggestions: usize,
    /// Siblings must be born strictly fewer than this many years apart
    pub sibling_year_gap: u32,
    /// Default tracing filter for binaries embedding the engine
    pub log_level: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            top_photos: 5,
            top_matches: 5,
            match_year_diff: 2,
            top_suggestions: 5,
            sibling_year_gap: 10,
            log_level: "info".to_string(),
        }
    }
}

impl EngineConfig {
    pub fn from_yaml_str(yaml: &str) -> ConfigResult<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&text)
    }
}
