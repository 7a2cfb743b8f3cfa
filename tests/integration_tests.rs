//! Integration tests for end-to-end tokenization.
//!
//! These tests run the lexer over a real Ruby file and drive the `rblex`
//! binary the way a user would.

use assert_cmd::Command;
use predicates::prelude::*;
use rblex::{
    lexer::{
        lexer::{reconstruct, tokenize, Lexer},
        tokens::TokenKind,
    },
    read_source,
};
use std::path::PathBuf;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

#[test]
fn test_tokenize_fixture() {
    let source = read_source(&fixture("classes.rb")).unwrap();
    let tokens = tokenize(&source);

    assert_eq!(tokens.len(), 54);
    assert!(tokens.iter().all(|t| t.kind != TokenKind::Error));

    assert_eq!(tokens[0].kind, TokenKind::Comment);
    assert_eq!(tokens[0].value, "# classes & methods");
    assert_eq!(tokens[1].kind, TokenKind::Keyword);
    assert_eq!(tokens[2].kind, TokenKind::Constant);
    assert_eq!(tokens[2].value, "Greeter");
    assert_eq!((tokens[2].line(), tokens[2].column()), (2, 7));
}

#[test]
fn test_fixture_interpolated_string_is_one_token() {
    let source = read_source(&fixture("classes.rb")).unwrap();
    let tokens = tokenize(&source);

    let greeting = tokens
        .iter()
        .find(|t| t.kind == TokenKind::String && t.value.starts_with("\"Hello"))
        .unwrap();

    assert_eq!(greeting.value, "\"Hello, #{@name}! ##{i+1}\"");
    assert_eq!((greeting.line(), greeting.column()), (11, 12));
}

#[test]
fn test_fixture_variables_and_operators() {
    let source = read_source(&fixture("classes.rb")).unwrap();
    let tokens = tokenize(&source);

    let class_vars: Vec<_> = tokens
        .iter()
        .filter(|t| t.kind == TokenKind::ClassVar)
        .map(|t| t.line())
        .collect();
    assert_eq!(class_vars, vec![4, 7]);

    let plus_equals = tokens.iter().find(|t| t.value == "+=").unwrap();
    assert_eq!(plus_equals.kind, TokenKind::Op);
    assert_eq!((plus_equals.line(), plus_equals.column()), (7, 13));
}

#[test]
fn test_fixture_round_trip() {
    let source = read_source(&fixture("classes.rb")).unwrap();
    let tokens = Lexer::new().keep_whitespace(true).tokenize(&source);

    assert_eq!(reconstruct(&tokens), source);
}

#[test]
fn test_cli_prints_tokens() {
    let mut cmd = Command::cargo_bin("rblex").unwrap();
    let assert = cmd.arg(fixture("classes.rb")).assert();

    assert
        .success()
        .stdout(predicate::str::starts_with(
            "< # classes & methods , COMMENT >\n< class , KEYWORD >\n< Greeter , CONSTANT >\n",
        ))
        .stdout(predicate::str::contains("< @@count , CLASS_VAR >"))
        .stdout(predicate::str::contains("< \"1.0.0\" , STRING >"))
        .stdout(predicate::str::contains("< += , OP >"))
        .stdout(predicate::str::ends_with("< 2 , NUMBER_INT >\n< ) , OP >\n"));
}

#[test]
fn test_cli_prints_one_line_per_token() {
    let mut cmd = Command::cargo_bin("rblex").unwrap();
    let output = cmd.arg(fixture("classes.rb")).output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 54);
}

#[test]
fn test_cli_whitespace_flag() {
    let mut cmd = Command::cargo_bin("rblex").unwrap();
    let assert = cmd.arg("-w").arg(fixture("classes.rb")).assert();

    assert
        .success()
        .stdout(predicate::str::contains("< \\n , WS >"))
        .stdout(predicate::str::contains("< \\n   , WS >"));
}

#[test]
fn test_cli_diagnostics_for_unrecognised_character() {
    let dir = std::env::temp_dir().join("rblex_tests");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("bad.rb");
    std::fs::write(&path, "x = 1\ny = `ls`\n").unwrap();

    let mut cmd = Command::cargo_bin("rblex").unwrap();
    let assert = cmd.arg("--diagnostics").arg(&path).assert();

    assert
        .success()
        .stdout(predicate::str::contains("< ` , ERROR >"))
        .stderr(predicate::str::contains("error: unrecognised character ```"))
        .stderr(predicate::str::contains("2 | y = `ls`"));
}

#[test]
fn test_cli_missing_file() {
    let mut cmd = Command::cargo_bin("rblex").unwrap();
    let assert = cmd.arg("does/not/exist.rb").assert();

    assert
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Error: Cannot open file: does/not/exist.rb"));
}

#[test]
fn test_cli_prompts_for_path() {
    let mut cmd = Command::cargo_bin("rblex").unwrap();
    let path = fixture("classes.rb");
    let assert = cmd
        .write_stdin(format!("  {}  \n", path.display()))
        .assert();

    assert
        .success()
        .stdout(predicate::str::starts_with(
            "Enter the path to the Ruby file (.rb): ",
        ))
        .stdout(predicate::str::contains("< Greeter , CONSTANT >"));
}

#[test]
fn test_cli_prompt_rejects_empty_path() {
    let mut cmd = Command::cargo_bin("rblex").unwrap();
    let assert = cmd.write_stdin("   \n").assert();

    assert
        .failure()
        .code(1)
        .stderr(predicate::str::contains("You must enter the path to the file."));
}
