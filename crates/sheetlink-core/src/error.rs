//! Error types for Sheetlink core.

use thiserror::Error;

use sheetlink_engine::engine::{ColumnType, SchemaError};

/// Broad classification of a [`SheetError`].
///
/// Callers usually map these to different responses: a missing resource
/// versus a request that can never succeed as given.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    NotFound,
    Validation,
    Internal,
}

/// Errors that can occur while working with sheets
#[derive(Error, Debug)]
pub enum SheetError {
    #[error("Sheet with id {0} not found")]
    SheetNotFound(String),

    #[error("Column '{0}' not found in sheet")]
    ColumnNotFound(String),

    #[error("Row must be a positive integer, got {0}")]
    InvalidRow(u64),

    #[error("Value type mismatch. Expected {expected}, got {actual}")]
    TypeMismatch {
        expected: ColumnType,
        actual: &'static str,
    },

    #[error("Value {0} cannot be stored exactly in a double column")]
    InexactDouble(i64),

    #[error(
        "Lookup type mismatch. Column {column} is {source_type}, but referenced column {target} is {target_type}"
    )]
    LookupTypeMismatch {
        column: String,
        source_type: ColumnType,
        target: String,
        target_type: ColumnType,
    },

    #[error("Lookup would create a cycle of size {0}")]
    Cycle(usize),

    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SheetError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SheetError::SheetNotFound(_) | SheetError::ColumnNotFound(_) => ErrorKind::NotFound,
            SheetError::InvalidRow(_)
            | SheetError::TypeMismatch { .. }
            | SheetError::InexactDouble(_)
            | SheetError::LookupTypeMismatch { .. }
            | SheetError::Cycle(_)
            | SheetError::Schema(_) => ErrorKind::Validation,
            SheetError::Io(_) | SheetError::Json(_) => ErrorKind::Internal,
        }
    }
}

pub type Result<T> = std::result::Result<T, SheetError>;
