//! Template scanning
//!
//! A template is split once into literal text and placeholder references.
//! Substitution then works over these segments, so an injected value is never
//! looked at again for further placeholders.
//!
//! # Example
//!
//! ```rust
//! use param_inject::Template;
//!
//! let template = Template::parse("user: ${params} ($other)");
//! let names: Vec<_> = template.placeholders().map(|p| p.name.as_str()).collect();
//! assert_eq!(names, ["params", "other"]);
//! assert_eq!(template.substitute("params", "alice"), "user: alice ($other)");
//! ```

pub mod lexer;

use std::fmt;

pub use lexer::{is_identifier, Span};

use lexer::{lex, Token};

/// How a placeholder was written in the template
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Syntax {
    /// `${name}`
    Braced,
    /// `$name`
    Bare,
}

impl fmt::Display for Syntax {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Syntax::Braced => write!(f, "braced"),
            Syntax::Bare => write!(f, "bare"),
        }
    }
}

/// A placeholder reference found in a template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    pub name: String,
    pub syntax: Syntax,
    pub span: Span,
}

/// A piece of a scanned template
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Literal text, copied to the output as-is
    Text(Span),
    Placeholder(Placeholder),
}

/// Group placeholder references by name, keeping first-seen order
pub fn group_by_name<'p>(
    placeholders: impl IntoIterator<Item = &'p Placeholder>,
) -> Vec<(&'p str, Vec<&'p Placeholder>)> {
    let mut groups: Vec<(&'p str, Vec<&'p Placeholder>)> = Vec::new();
    for p in placeholders {
        match groups.iter_mut().find(|(name, _)| *name == p.name) {
            Some((_, refs)) => refs.push(p),
            None => groups.push((p.name.as_str(), vec![p])),
        }
    }
    groups
}

/// A scanned template borrowing its source text
#[derive(Debug, Clone)]
pub struct Template<'a> {
    source: &'a str,
    segments: Vec<Segment>,
}

impl<'a> Template<'a> {
    /// Scan template text into segments
    pub fn parse(source: &'a str) -> Self {
        let mut segments: Vec<Segment> = Vec::new();

        for (token, span) in lex(source) {
            let placeholder = match token {
                Token::Braced(name) => Placeholder {
                    name,
                    syntax: Syntax::Braced,
                    span,
                },
                Token::Bare(name) => Placeholder {
                    name,
                    syntax: Syntax::Bare,
                    span,
                },
                Token::Text | Token::Dollar => {
                    // Merge adjacent literal runs
                    if let Some(Segment::Text(prev)) = segments.last_mut() {
                        prev.end = span.end;
                    } else {
                        segments.push(Segment::Text(span));
                    }
                    continue;
                }
            };
            segments.push(Segment::Placeholder(placeholder));
        }

        Self { source, segments }
    }

    /// The unparsed template text
    pub fn source(&self) -> &'a str {
        self.source
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// All placeholder references, in source order
    pub fn placeholders(&self) -> impl Iterator<Item = &Placeholder> {
        self.segments.iter().filter_map(|seg| match seg {
            Segment::Placeholder(p) => Some(p),
            Segment::Text(_) => None,
        })
    }

    /// Placeholder references whose name is not `name`
    pub fn unknown(&self, name: &str) -> Vec<&Placeholder> {
        self.placeholders().filter(|p| p.name != name).collect()
    }

    /// Number of references to `name`
    pub fn count(&self, name: &str) -> usize {
        self.placeholders().filter(|p| p.name == name).count()
    }

    /// Replace every reference to `name` with `value` in a single pass
    ///
    /// Other placeholders are copied verbatim.
    pub fn substitute(&self, name: &str, value: &str) -> String {
        let hits = self.count(name);
        let mut out = String::with_capacity(self.source.len() + hits * value.len());

        for seg in &self.segments {
            match seg {
                Segment::Placeholder(p) if p.name == name => out.push_str(value),
                Segment::Placeholder(p) => out.push_str(&self.source[p.span.clone()]),
                Segment::Text(span) => out.push_str(&self.source[span.clone()]),
            }
        }

        out
    }
}
