use lazy_static::lazy_static;
use std::{collections::HashSet, fmt::Display};

use crate::Span;

lazy_static! {
    /// Reserved words. Matching is exact and case-sensitive.
    pub static ref KEYWORDS: HashSet<&'static str> = {
        let mut set = HashSet::new();
        set.insert("__ENCODING__");
        set.insert("__LINE__");
        set.insert("__FILE__");
        set.insert("BEGIN");
        set.insert("END");
        set.insert("alias");
        set.insert("and");
        set.insert("begin");
        set.insert("break");
        set.insert("case");
        set.insert("class");
        set.insert("def");
        set.insert("defined?");
        set.insert("do");
        set.insert("else");
        set.insert("elsif");
        set.insert("end");
        set.insert("ensure");
        set.insert("false");
        set.insert("for");
        set.insert("if");
        set.insert("in");
        set.insert("module");
        set.insert("next");
        set.insert("nil");
        set.insert("not");
        set.insert("or");
        set.insert("redo");
        set.insert("rescue");
        set.insert("retry");
        set.insert("return");
        set.insert("self");
        set.insert("super");
        set.insert("then");
        set.insert("true");
        set.insert("undef");
        set.insert("unless");
        set.insert("until");
        set.insert("when");
        set.insert("while");
        set.insert("yield");
        set
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    CommentBlock,
    Comment,
    String,
    Regex,
    Symbol,
    ClassVar,
    InstanceVar,
    GlobalVar,

    NumberHex,
    NumberBin,
    NumberOct,
    NumberFloat,
    NumberInt,

    Op,

    Keyword,
    Constant,
    Identifier,

    Error,

    // Provisional: refined by `classify`, never emitted
    IdentOrKeyword,
    // Skip-only unless the lexer keeps whitespace
    Whitespace,
}

impl TokenKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::CommentBlock => "COMMENT_BLOCK",
            TokenKind::Comment => "COMMENT",
            TokenKind::String => "STRING",
            TokenKind::Regex => "REGEX",
            TokenKind::Symbol => "SYMBOL",
            TokenKind::ClassVar => "CLASS_VAR",
            TokenKind::InstanceVar => "INSTANCE_VAR",
            TokenKind::GlobalVar => "GLOBAL_VAR",
            TokenKind::NumberHex => "NUMBER_HEX",
            TokenKind::NumberBin => "NUMBER_BIN",
            TokenKind::NumberOct => "NUMBER_OCT",
            TokenKind::NumberFloat => "NUMBER_FLOAT",
            TokenKind::NumberInt => "NUMBER_INT",
            TokenKind::Op => "OP",
            TokenKind::Keyword => "KEYWORD",
            TokenKind::Constant => "CONSTANT",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Error => "ERROR",
            TokenKind::IdentOrKeyword => "IDENT_OR_KW",
            TokenKind::Whitespace => "WS",
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Refines a rule's kind into the kind a token is emitted with.
///
/// Only `IdentOrKeyword` is refined: a reserved word becomes `Keyword`, a
/// word starting with an ASCII uppercase letter becomes `Constant`, and
/// anything else is an `Identifier`. Every other kind passes through.
pub fn classify(kind: TokenKind, value: &str) -> TokenKind {
    if kind != TokenKind::IdentOrKeyword {
        return kind;
    }

    if KEYWORDS.contains(value) {
        TokenKind::Keyword
    } else if value.starts_with(|c: char| c.is_ascii_uppercase()) {
        TokenKind::Constant
    } else {
        TokenKind::Identifier
    }
}

/// Replaces newline, carriage return and tab with their two-character
/// escapes. Everything else, quotes included, is left alone.
pub fn escape_for_output(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 16);
    for c in value.chars() {
        match c {
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

/// `< text , KIND >` with the text escaped for single-line output.
impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "< {} , {} >", escape_for_output(&self.value), self.kind)
    }
}

impl Token {
    pub fn line(&self) -> usize {
        self.span.start.line
    }

    pub fn column(&self) -> usize {
        self.span.start.column
    }
}
