//! Error types for loading and rendering

use std::io;
use std::path::PathBuf;

use ariadne::{Color, Config, Label, Report, ReportKind, Source};
use thiserror::Error;

use crate::template::{group_by_name, Placeholder};

/// Errors that can occur while producing the rendered output
#[derive(Error, Debug)]
pub enum RenderError {
    /// Template or parameter file does not exist
    #[error("file not found: {}", .path.display())]
    NotFound { path: PathBuf },

    /// File exists but could not be read
    #[error("failed to read '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Template references placeholders other than the recognized one
    #[error("unknown placeholder(s) in template: {}", format_names(.placeholders))]
    UnknownPlaceholder {
        placeholders: Vec<Placeholder>,
        /// Template text the spans refer to
        template: String,
    },

    /// The configured placeholder name can never match
    #[error("invalid placeholder name '{name}': expected [A-Za-z_][A-Za-z0-9_]*")]
    InvalidPlaceholderName { name: String },

    /// Writing the rendered output failed
    #[error("failed to write output: {0}")]
    Write(#[source] io::Error),
}

fn format_names(placeholders: &[Placeholder]) -> String {
    let names: Vec<&str> = group_by_name(placeholders)
        .into_iter()
        .map(|(name, _)| name)
        .collect();
    names.join(", ")
}

impl RenderError {
    /// Format the error for the terminal
    ///
    /// Unknown placeholders get an ariadne report pointing into the template;
    /// everything else is the plain message. `color` enables ANSI colors in
    /// the report.
    pub fn format(&self, filename: &str, color: bool) -> String {
        let (placeholders, template) = match self {
            RenderError::UnknownPlaceholder {
                placeholders,
                template,
            } => (placeholders, template),
            _ => return format!("Error: {}\n", self),
        };

        let offset = placeholders.first().map(|p| p.span.start).unwrap_or(0);
        let labels = placeholders.iter().map(|p| {
            Label::new((filename, p.span.clone()))
                .with_message(format!("{} placeholder '{}' is not substituted", p.syntax, p.name))
                .with_color(Color::Red)
        });

        let mut buf = Vec::new();
        let written = Report::build(ReportKind::Error, filename, offset)
            .with_config(Config::default().with_color(color))
            .with_message("unknown placeholder in template")
            .with_labels(labels)
            .finish()
            .write((filename, Source::from(template.as_str())), &mut buf);

        match written {
            Ok(()) => String::from_utf8_lossy(&buf).into_owned(),
            Err(_) => format!("Error: {}\n", self),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::Template;

    #[test]
    fn test_not_found_display() {
        let err = RenderError::NotFound {
            path: PathBuf::from("missing.html"),
        };
        insta::assert_snapshot!(err.to_string(), @"file not found: missing.html");
    }

    #[test]
    fn test_read_display_includes_cause() {
        let err = RenderError::Read {
            path: PathBuf::from("params"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
        };
        assert_eq!(err.to_string(), "failed to read 'params': permission denied");
    }

    #[test]
    fn test_unknown_placeholder_display_dedups_names() {
        let source = "${user} ${host} $user";
        let placeholders = Template::parse(source)
            .placeholders()
            .cloned()
            .collect();
        let err = RenderError::UnknownPlaceholder {
            placeholders,
            template: source.to_string(),
        };
        insta::assert_snapshot!(err.to_string(), @"unknown placeholder(s) in template: user, host");
    }

    #[test]
    fn test_format_unknown_placeholder_report() {
        let source = "<p>${user}</p> $user";
        let placeholders = Template::parse(source)
            .placeholders()
            .cloned()
            .collect();
        let err = RenderError::UnknownPlaceholder {
            placeholders,
            template: source.to_string(),
        };
        let report = err.format("index.html.tpl", false);
        assert!(!report.contains('\u{1b}'));
        assert!(report.contains("unknown placeholder in template"));
        assert!(report.contains("index.html.tpl"));
        assert!(report.contains("braced placeholder 'user' is not substituted"));
        assert!(report.contains("bare placeholder 'user' is not substituted"));
    }

    #[test]
    fn test_format_plain_error() {
        let err = RenderError::InvalidPlaceholderName {
            name: "api-key".to_string(),
        };
        assert_eq!(
            err.format("t.html", true),
            "Error: invalid placeholder name 'api-key': expected [A-Za-z_][A-Za-z0-9_]*\n"
        );
    }
}
