//! Configuration for placeholder substitution

use serde::Deserialize;

/// Placeholder name used when none is configured
pub const DEFAULT_PLACEHOLDER: &str = "params";

/// What to do with placeholders other than the recognized one
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum UnknownPolicy {
    /// Leave them verbatim without comment
    Keep,
    /// Leave them verbatim and log a warning
    #[default]
    Warn,
    /// Fail the render
    Error,
}

/// Configuration options for rendering
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Name of the placeholder that receives the value
    pub placeholder: String,

    /// Handling of other placeholder names
    pub unknown: UnknownPolicy,

    /// Strip one trailing newline from the value before substituting
    pub trim_trailing_newline: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            unknown: UnknownPolicy::default(),
            trim_trailing_newline: false,
        }
    }
}

impl RenderConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the placeholder name
    pub fn with_placeholder(mut self, name: impl Into<String>) -> Self {
        self.placeholder = name.into();
        self
    }

    /// Set the unknown placeholder policy
    pub fn with_unknown_policy(mut self, policy: UnknownPolicy) -> Self {
        self.unknown = policy;
        self
    }

    /// Set whether one trailing newline is stripped from the value
    pub fn with_trim_trailing_newline(mut self, trim: bool) -> Self {
        self.trim_trailing_newline = trim;
        self
    }
}
