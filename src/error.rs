//! Error types for the sheetlink command line

use thiserror::Error;

use sheetlink_core::{ErrorKind, SheetError};

/// Errors from running a single command
#[derive(Error, Debug)]
pub enum CommandError {
    #[error("Usage: {0}")]
    Usage(String),

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("No sheet selected (use `create` or `use` first)")]
    NoSheet,

    #[error(transparent)]
    Sheet(#[from] SheetError),
}

impl CommandError {
    /// Process exit code: 1 for rejected input, 2 for missing resources,
    /// 3 for anything else.
    pub fn exit_code(&self) -> i32 {
        match self {
            CommandError::Usage(_) | CommandError::UnknownCommand(_) => 1,
            CommandError::NoSheet => 2,
            CommandError::Sheet(err) => match err.kind() {
                ErrorKind::Validation => 1,
                ErrorKind::NotFound => 2,
                ErrorKind::Internal => 3,
            },
        }
    }
}

pub type Result<T> = std::result::Result<T, CommandError>;
