//! rblex command-line driver
//!
//! Reads a Ruby source file and prints one `< text , KIND >` line per token.

use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
    process::ExitCode,
};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use rblex::{
    errors::errors::{Error, ErrorImpl, ErrorTip},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
    read_source, render_diagnostic,
};

/// Tokenize a Ruby source file
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Ruby source file; prompted for on stdin when omitted
    #[arg(value_name = "PATH")]
    path: Option<PathBuf>,

    /// Also print whitespace runs as WS tokens
    #[arg(short, long)]
    whitespace: bool,

    /// Print a caret diagnostic to stderr for every unrecognised character
    #[arg(short, long)]
    diagnostics: bool,

    /// Verbosity level (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let args = Args::parse();

    setup_logging(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("Error: {}", error);
            if let ErrorTip::Suggestion(tip) = error.get_tip() {
                eprintln!("  {}", tip);
            }
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), Error> {
    let path = match &args.path {
        Some(path) => path.clone(),
        None => prompt_for_path()?,
    };

    tracing::info!("Tokenizing {:?}", path);
    let source = read_source(&path)?;

    let lexer = Lexer::new().keep_whitespace(args.whitespace);
    let tokens = lexer.tokenize(&source);

    print_tokens(&tokens).map_err(|err| {
        Error::new(ErrorImpl::OutputFailed {
            message: err.to_string(),
        })
    })?;

    if args.diagnostics {
        let label = path.to_string_lossy();
        for token in tokens.iter().filter(|t| t.kind == TokenKind::Error) {
            eprint!("{}", render_diagnostic(&source, &label, token));
        }
    }

    Ok(())
}

fn prompt_for_path() -> Result<PathBuf, Error> {
    print!("Enter the path to the Ruby file (.rb): ");
    // a failed flush only loses the prompt text
    let _ = io::stdout().flush();

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .map_err(|err| Error::unreadable("<stdin>", &err))?;

    let path = line.trim();
    if path.is_empty() {
        return Err(Error::new(ErrorImpl::MissingPath));
    }

    Ok(PathBuf::from(path))
}

fn print_tokens(tokens: &[Token]) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    for token in tokens {
        writeln!(out, "{}", token)?;
    }

    out.flush()
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .init();
}
