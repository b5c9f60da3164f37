//! Lexer for template text using logos

use logos::Logos;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

#[derive(Logos, Debug, Clone, PartialEq)]
pub enum Token {
    // Placeholders (longest match wins, so `${name}` beats `$`)
    #[regex(r"\$\{[A-Za-z_][A-Za-z0-9_]*\}", |lex| {
        let s = lex.slice();
        s[2..s.len()-1].to_string()
    })]
    Braced(String),

    #[regex(r"\$[A-Za-z_][A-Za-z0-9_]*", |lex| lex.slice()[1..].to_string())]
    Bare(String),

    // Dollar sequences that do not form a placeholder. Every prefix of a
    // placeholder is accepted here so the lexer never has to backtrack.
    #[token("$")]
    #[token("${")]
    #[regex(r"\$\{[A-Za-z_][A-Za-z0-9_]*")]
    Dollar,

    #[regex(r"[^$]+")]
    Text,
}

/// Lex input string into tokens with spans
///
/// Spans are contiguous and cover the whole input. Anything the lexer cannot
/// classify is reported as [`Token::Text`].
pub fn lex(input: &str) -> impl Iterator<Item = (Token, Span)> + '_ {
    Token::lexer(input)
        .spanned()
        .map(|(tok, span)| (tok.unwrap_or(Token::Text), span))
}

/// Whether `name` is a valid placeholder identifier
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
