use lazy_static::lazy_static;
use regex::Regex;

use crate::MK_RULE;

use super::tokens::TokenKind;

#[derive(Debug, Clone)]
pub struct Rule {
    pub kind: TokenKind,
    pub regex: Regex,
    pub skip: bool,
}

impl Rule {
    /// `pattern` must already be anchored; use `MK_RULE!` rather than calling
    /// this directly.
    pub fn new(kind: TokenKind, pattern: &str, skip: bool) -> Rule {
        let regex = Regex::new(pattern)
            .unwrap_or_else(|err| panic!("invalid pattern for {} rule: {}", kind, err));

        Rule { kind, regex, skip }
    }

    /// Returns the text this rule matches at the very start of `remainder`.
    /// Empty matches are rejected so a match always makes progress.
    pub fn find<'h>(&self, remainder: &'h str) -> Option<&'h str> {
        self.regex
            .find(remainder)
            .filter(|m| m.start() == 0 && !m.is_empty())
            .map(|m| m.as_str())
    }
}

lazy_static! {
    /// The rule table, most specific first. The first rule that matches at
    /// the scan position wins, so the order below is load-bearing.
    pub static ref RULES: Vec<Rule> = vec![
        // An unterminated block comment runs to the end of the input.
        MK_RULE!(TokenKind::CommentBlock, r"=begin(?:[\s\S]*?=end|[\s\S]*)"),
        MK_RULE!(TokenKind::Comment, r"#[^\r\n]*"),

        MK_RULE!(TokenKind::String, r#""(?:\\[\s\S]|[^"\\])*""#),
        MK_RULE!(TokenKind::String, r#"'(?:\\[\s\S]|[^'\\])*'"#),

        // Must come before `/`. Bounded to one line: an unclosed literal
        // falls through to the division operator.
        MK_RULE!(TokenKind::Regex, r"/(?:\\[^\n]|[^/\\\n])+/[a-zA-Z]*"),

        // Before `:` and `::`
        MK_RULE!(TokenKind::Symbol, r#":'(?:\\[\s\S]|[^'\\])*'"#),
        MK_RULE!(TokenKind::Symbol, r#":"(?:\\[\s\S]|[^"\\])*""#),
        MK_RULE!(TokenKind::Symbol, r":[A-Za-z_][A-Za-z0-9_]*[!?=]?"),

        MK_RULE!(TokenKind::ClassVar, r"@@[A-Za-z_][A-Za-z0-9_]*"),
        MK_RULE!(TokenKind::InstanceVar, r"@[A-Za-z_][A-Za-z0-9_]*"),

        MK_RULE!(TokenKind::GlobalVar, r"\$[0-9]+"),
        MK_RULE!(TokenKind::GlobalVar, r"\$[A-Za-z_][A-Za-z0-9_]*"),

        MK_RULE!(TokenKind::NumberHex, r"0[xX][0-9A-Fa-f_]+"),
        MK_RULE!(TokenKind::NumberBin, r"0[bB][01_]+"),
        MK_RULE!(TokenKind::NumberOct, r"0[oO][0-7_]+"),
        MK_RULE!(TokenKind::NumberFloat, r"[0-9][0-9_]*\.[0-9][0-9_]*(?:[eE][+-]?[0-9][0-9_]*)?"),
        MK_RULE!(TokenKind::NumberFloat, r"[0-9][0-9_]*[eE][+-]?[0-9][0-9_]*"),
        MK_RULE!(TokenKind::NumberInt, r"[0-9][0-9_]*"),

        // Compound operators, longest alternatives first. Never split these.
        MK_RULE!(
            TokenKind::Op,
            r"<=>|===|<<=|>>=|\*\*=|&&=|\|\|=|\+=|-=|\*=|/=|%=|&=|\|=|\^=|<=|>=|==|!=|=~|!~|\.\.\.|::|=>|\*\*|<<|>>|&&|\|\||&\.|\.\."
        ),
        MK_RULE!(TokenKind::Op, r"[+\-*/%&|\^~!=<>?:.,;()\[\]{}]"),

        MK_RULE!(TokenKind::IdentOrKeyword, r"[A-Za-z_][A-Za-z0-9_]*[!?=]?"),

        MK_RULE!(TokenKind::Whitespace, r"[ \t\n\r\x0B\x0C]+", skip),
    ];
}
