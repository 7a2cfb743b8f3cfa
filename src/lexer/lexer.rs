use crate::{Position, Span, MK_TOKEN};

use super::{
    rules::{Rule, RULES},
    tokens::{classify, Token, TokenKind},
};

/// Scanner over the shared rule table.
///
/// A `Lexer` holds no per-input state, so one value can tokenize any number
/// of inputs, from any number of threads.
#[derive(Debug, Clone, Copy)]
pub struct Lexer {
    rules: &'static [Rule],
    keep_whitespace: bool,
}

impl Default for Lexer {
    fn default() -> Self {
        Lexer::new()
    }
}

impl Lexer {
    pub fn new() -> Lexer {
        Lexer {
            rules: RULES.as_slice(),
            keep_whitespace: false,
        }
    }

    /// Emit whitespace runs as `WS` tokens instead of dropping them.
    pub fn keep_whitespace(mut self, keep: bool) -> Lexer {
        self.keep_whitespace = keep;
        self
    }

    pub fn rules(&self) -> &'static [Rule] {
        self.rules
    }

    /// Splits `source` into tokens.
    ///
    /// Never fails: a character no rule accepts becomes a one-character
    /// `ERROR` token and scanning resumes right after it.
    pub fn tokenize(&self, source: &str) -> Vec<Token> {
        let mut scan = Scan {
            source,
            pos: Position::start(),
            tokens: vec![],
        };

        while !scan.at_eof() {
            let remainder = scan.remainder();

            match self.match_rule(remainder) {
                Some((rule, matched)) => {
                    if !rule.skip || self.keep_whitespace {
                        scan.push(classify(rule.kind, matched), matched);
                    }
                    scan.advance(matched);
                }
                None => {
                    let bad = scan.at();
                    let matched = &remainder[..bad.len_utf8()];

                    tracing::trace!(
                        line = scan.pos.line,
                        column = scan.pos.column,
                        "unrecognised character {:?}",
                        bad
                    );

                    scan.push(TokenKind::Error, matched);
                    scan.advance(matched);
                }
            }
        }

        tracing::debug!(
            bytes = source.len(),
            tokens = scan.tokens.len(),
            errors = scan.tokens.iter().filter(|t| t.kind == TokenKind::Error).count(),
            "tokenized input"
        );

        scan.tokens
    }

    fn match_rule<'h>(&self, remainder: &'h str) -> Option<(&'static Rule, &'h str)> {
        self.rules
            .iter()
            .find_map(|rule| rule.find(remainder).map(|matched| (rule, matched)))
    }
}

struct Scan<'s> {
    source: &'s str,
    pos: Position,
    tokens: Vec<Token>,
}

impl<'s> Scan<'s> {
    fn at_eof(&self) -> bool {
        self.pos.offset >= self.source.len()
    }

    fn remainder(&self) -> &'s str {
        &self.source[self.pos.offset..]
    }

    fn at(&self) -> char {
        // only called while !at_eof, and offsets always land on char boundaries
        self.remainder().chars().next().unwrap_or('\0')
    }

    fn push(&mut self, kind: TokenKind, matched: &str) {
        let span = Span {
            start: self.pos,
            end: self.pos.advanced(matched),
        };
        self.tokens.push(MK_TOKEN!(kind, matched.to_string(), span));
    }

    fn advance(&mut self, matched: &str) {
        self.pos.advance(matched);
    }
}

/// Tokenizes `source` with the default lexer (whitespace skipped).
pub fn tokenize(source: &str) -> Vec<Token> {
    Lexer::new().tokenize(source)
}

/// Concatenates token text in order. Equals the original input when the
/// tokens came from a lexer that keeps whitespace.
pub fn reconstruct(tokens: &[Token]) -> String {
    tokens.iter().map(|token| token.value.as_str()).collect()
}
