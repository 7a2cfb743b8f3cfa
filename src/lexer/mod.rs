//! Lexical analysis for Ruby source text.
//!
//! This module turns source text into a flat stream of classified tokens:
//!
//! - An ordered table of anchored regex rules; the first match wins
//! - Post-match classification of keywords, constants and identifiers
//! - Line/column tracking across every consumed span
//! - Recovery from unrecognised characters via `ERROR` tokens

pub mod lexer;
pub mod rules;
pub mod tokens;
