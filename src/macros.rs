//! Utility macros for the lexer.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_RULE!` - Creates an anchored Rule for the rule table
//!
//! These macros keep the rule table readable.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's source text
/// * `$span` - The source span
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::NumberInt, "42".to_string(), span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $span:expr) => {
        Token {
            kind: $kind,
            value: $value,
            span: $span,
        }
    };
}

/// Creates a Rule whose pattern only matches at the start of the haystack.
///
/// The pattern is wrapped as `^(?:pattern)`, so no rule can ever search
/// ahead of the current scan position.
///
/// # Arguments
///
/// * `$kind` - The (possibly provisional) TokenKind produced on a match
/// * `$pattern` - A string literal regex
/// * `skip` - Optional marker: matches are consumed but not emitted
///
/// # Example
///
/// ```ignore
/// MK_RULE!(TokenKind::Comment, r"#.*")
/// MK_RULE!(TokenKind::Whitespace, r"[ \t\n]+", skip)
/// ```
#[macro_export]
macro_rules! MK_RULE {
    ($kind:expr, $pattern:literal) => {
        Rule::new($kind, concat!("^(?:", $pattern, ")"), false)
    };
    ($kind:expr, $pattern:literal, skip) => {
        Rule::new($kind, concat!("^(?:", $pattern, ")"), true)
    };
}
