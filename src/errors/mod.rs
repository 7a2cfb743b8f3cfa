//! Error types for the command-line front end.
//!
//! Lexing itself cannot fail; the only failures are around obtaining the
//! input text:
//!
//! - Error structures with a name and an optional user-facing tip
//! - Variants for unreadable files and missing paths

pub mod errors;
