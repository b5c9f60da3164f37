//! Single-key substitution over a scanned template

use log::{debug, warn};

use crate::error::RenderError;
use crate::template::{group_by_name, is_identifier, Placeholder, Template};

use super::config::{RenderConfig, UnknownPolicy};

/// Replace every occurrence of `placeholder` in `template` with `value`
///
/// Other placeholders are left verbatim and logged as warnings.
///
/// # Example
///
/// ```rust
/// use param_inject::render;
///
/// let html = render("<p>${params}</p>", "params", "${params}").unwrap();
/// assert_eq!(html, "<p>${params}</p>");
/// ```
pub fn render(template: &str, placeholder: &str, value: &str) -> Result<String, RenderError> {
    let config = RenderConfig::new().with_placeholder(placeholder);
    render_with_config(template, value, &config)
}

/// Render with an explicit [`RenderConfig`]
///
/// # Example
///
/// ```rust
/// use param_inject::{render_with_config, RenderConfig, RenderError, UnknownPolicy};
///
/// let config = RenderConfig::new().with_unknown_policy(UnknownPolicy::Error);
/// let result = render_with_config("${params} ${other}", "x", &config);
/// assert!(matches!(result, Err(RenderError::UnknownPlaceholder { .. })));
/// ```
pub fn render_with_config(
    template: &str,
    value: &str,
    config: &RenderConfig,
) -> Result<String, RenderError> {
    let name = config.placeholder.as_str();
    if !is_identifier(name) {
        return Err(RenderError::InvalidPlaceholderName {
            name: name.to_string(),
        });
    }

    let parsed = Template::parse(template);
    let unknown = parsed.unknown(name);

    if !unknown.is_empty() {
        match config.unknown {
            UnknownPolicy::Keep => {}
            UnknownPolicy::Warn => {
                for (unknown_name, refs) in group_by_name(unknown.iter().copied()) {
                    warn!("{}", unknown_warning(unknown_name, &refs));
                }
            }
            UnknownPolicy::Error => {
                return Err(RenderError::UnknownPlaceholder {
                    placeholders: unknown.into_iter().cloned().collect(),
                    template: template.to_string(),
                });
            }
        }
    }

    let value = if config.trim_trailing_newline {
        trim_trailing_newline(value)
    } else {
        value
    };

    debug!(
        "substituting {} occurrence(s) of '{}'",
        parsed.count(name),
        name
    );
    Ok(parsed.substitute(name, value))
}

/// One warning line for all references to an unknown name
fn unknown_warning(name: &str, refs: &[&Placeholder]) -> String {
    let offsets: Vec<String> = refs.iter().map(|p| p.span.start.to_string()).collect();
    format!(
        "leaving unknown placeholder '{}' untouched ({} occurrence(s) at byte {})",
        name,
        refs.len(),
        offsets.join(", ")
    )
}

/// Strip one trailing `\n` or `\r\n`
fn trim_trailing_newline(value: &str) -> &str {
    value
        .strip_suffix("\r\n")
        .or_else(|| value.strip_suffix('\n'))
        .unwrap_or(value)
}
