//! Run configuration
//!
//! Where the template and parameter files live and how substitution behaves.
//! Every field has a fixed default, so running without a config file or flags
//! reads `template.html` and `params` from the working directory.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::renderer::{RenderConfig, UnknownPolicy, DEFAULT_PLACEHOLDER};

/// Template path used when none is configured
pub const DEFAULT_TEMPLATE_PATH: &str = "template.html";

/// Parameter file path used when none is configured
pub const DEFAULT_PARAMS_PATH: &str = "params";

/// Errors that can occur when loading or parsing a config file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Settings for one run
///
/// ```toml
/// template = "site/index.html.tpl"
/// params = "/run/secrets/params"
/// placeholder = "params"
/// unknown = "error"
/// trim_trailing_newline = true
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Template file
    pub template: PathBuf,
    /// File holding the value to inject
    pub params: PathBuf,
    /// Placeholder name to substitute
    pub placeholder: String,
    /// Handling of other placeholder names
    pub unknown: UnknownPolicy,
    /// Strip one trailing newline from the parameter value
    pub trim_trailing_newline: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            template: PathBuf::from(DEFAULT_TEMPLATE_PATH),
            params: PathBuf::from(DEFAULT_PARAMS_PATH),
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            unknown: UnknownPolicy::default(),
            trim_trailing_newline: false,
        }
    }
}

impl Config {
    /// Load config from TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load config from TOML string
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Substitution settings for the renderer
    pub fn render_config(&self) -> RenderConfig {
        RenderConfig::new()
            .with_placeholder(self.placeholder.clone())
            .with_unknown_policy(self.unknown)
            .with_trim_trailing_newline(self.trim_trailing_newline)
    }
}
