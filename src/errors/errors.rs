use std::{fmt::Display, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
}

impl Error {
    pub fn new(error_impl: ErrorImpl) -> Self {
        Error {
            internal_error: error_impl,
        }
    }

    pub fn unreadable(path: impl Into<PathBuf>, source: &std::io::Error) -> Self {
        Error::new(ErrorImpl::UnreadableInput {
            path: path.into(),
            message: source.to_string(),
        })
    }

    pub fn get_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnreadableInput { .. } => "UnreadableInput",
            ErrorImpl::MissingPath => "MissingPath",
            ErrorImpl::OutputFailed { .. } => "OutputFailed",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnreadableInput { path, .. } => ErrorTip::Suggestion(format!(
                "Check that `{}` exists and is readable",
                path.display()
            )),
            ErrorImpl::MissingPath => ErrorTip::None,
            ErrorImpl::OutputFailed { .. } => ErrorTip::None,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.internal_error)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.internal_error)
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("Cannot open file: {}", path.display())]
    UnreadableInput { path: PathBuf, message: String },
    #[error("You must enter the path to the file.")]
    MissingPath,
    #[error("Cannot write tokens: {message}")]
    OutputFailed { message: String },
}
