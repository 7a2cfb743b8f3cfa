#![allow(clippy::module_inception)]

use std::{fs, path::Path};

use errors::errors::Error;
use lexer::tokens::Token;

pub mod errors;
pub mod lexer;
pub mod macros;

extern crate regex;

/// A point in the source text.
///
/// `offset` is a byte offset into the input; `line` and `column` are 1-based
/// and count characters, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub offset: usize,
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn start() -> Self {
        Position {
            offset: 0,
            line: 1,
            column: 1,
        }
    }

    /// Moves past `text`, which must be the span starting at this position.
    /// Every `\n` starts a new line at column 1; any other character moves
    /// one column right.
    pub fn advance(&mut self, text: &str) {
        for c in text.chars() {
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }

        self.offset += text.len();
    }

    pub fn advanced(mut self, text: &str) -> Self {
        self.advance(text);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Reads a source file. Bytes that are not valid UTF-8 are replaced with
/// U+FFFD, which later lexes as an `ERROR` token.
pub fn read_source(path: &Path) -> Result<String, Error> {
    let bytes = fs::read(path).map_err(|err| Error::unreadable(path, &err))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Returns `(line_number, line_text, column_index)` for the byte `position`
/// in `content`. `column_index` is 0-based and counts characters.
///
/// A position at the very end of the content resolves to the last line.
pub fn get_line_at_position(content: &str, position: usize) -> (usize, String, usize) {
    let pos = position.min(content.len());

    let mut start = 0;
    let mut line_number = 1;

    for line in content.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            let line_pos = content[start..pos].chars().count();
            return (line_number, line.to_string(), line_pos);
        }

        start = end;
        line_number += 1;
    }

    // past the final newline, or empty content
    let last = content[..pos].rfind('\n').map(|i| i + 1).unwrap_or(0);
    let line_number = content[..pos].matches('\n').count() + 1;
    (
        line_number,
        content[last..].to_string(),
        content[last..pos].chars().count(),
    )
}

/// Renders a caret diagnostic pointing at `token` inside `content`.
///
/// ```text
/// error: unrecognised character `\u{1}`
/// -> script.rb
///   |
/// 3 | x = 1 \u{1} y
///   | ------^
/// ```
pub fn render_diagnostic(content: &str, file: &str, token: &Token) -> String {
    let (line, line_text, line_pos) = get_line_at_position(content, token.span.start.offset);

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;

    let mut out = String::new();
    out.push_str(&format!(
        "error: unrecognised character `{}`\n",
        token.value.escape_debug()
    ));
    out.push_str(&format!("-> {}\n", file));
    out.push_str(&format!("{:>padding$}\n", "|"));
    out.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));
    out.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));
    out
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}
