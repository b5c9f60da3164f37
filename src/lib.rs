//! param-inject - inject a parameter value into a text template
//!
//! Reads a template, reads a single value from a file, replaces every
//! occurrence of one named placeholder (`${params}` or `$params`) with that
//! value and hands back the rendered text.
//!
//! # Example
//!
//! ```rust
//! use param_inject::render;
//!
//! let out = render("user: ${params}", "params", "alice").unwrap();
//! assert_eq!(out, "user: alice");
//! ```

pub mod config;
pub mod error;
pub mod loader;
pub mod renderer;
pub mod template;

use std::io::Write;

use log::info;

pub use config::{Config, ConfigError};
pub use error::RenderError;
pub use loader::load;
pub use renderer::{render, render_with_config, RenderConfig, UnknownPolicy};
pub use template::{Placeholder, Template};

/// Load both files and render them, without writing anything
pub fn render_files(config: &Config) -> Result<String, RenderError> {
    let template = load(&config.template)?;
    let value = load(&config.params)?;
    render_with_config(&template, &value, &config.render_config())
}

/// Render the configured files and write the result to `out`
///
/// Nothing is written unless both files load and the render succeeds.
///
/// # Example
///
/// ```rust
/// use std::fs;
/// use param_inject::{run, Config};
///
/// let dir = tempfile::tempdir().unwrap();
/// fs::write(dir.path().join("template.html"), "user: ${params}").unwrap();
/// fs::write(dir.path().join("params"), "alice").unwrap();
///
/// let config = Config {
///     template: dir.path().join("template.html"),
///     params: dir.path().join("params"),
///     ..Config::default()
/// };
///
/// let mut out = Vec::new();
/// run(&config, &mut out).unwrap();
/// assert_eq!(out, b"user: alice");
/// ```
pub fn run<W: Write>(config: &Config, out: &mut W) -> Result<(), RenderError> {
    let rendered = render_files(config)?;
    out.write_all(rendered.as_bytes())
        .and_then(|()| out.flush())
        .map_err(RenderError::Write)?;
    info!(
        "rendered {} into {} bytes",
        config.template.display(),
        rendered.len()
    );
    Ok(())
}
