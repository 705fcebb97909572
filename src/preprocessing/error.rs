//! Error types for preprocessing operations.

use crate::dataset::{ColumnId, ColumnType, DatasetError};
use thiserror::Error;

/// Error type for preprocessing operations.
#[derive(Debug, Error)]
pub enum PreprocessingError {
    /// Invalid hyperparameter value.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// A stateful transformer was used before `fit`.
    #[error("Not fitted: {0} has not been fitted")]
    NotFitted(&'static str),

    /// Feature dimension mismatch.
    #[error("Feature mismatch: expected {expected_features} features, got {got_features}")]
    FeatureMismatch {
        expected_features: usize,
        got_features: usize,
    },

    /// A sample lacks a column the transformer needs.
    #[error("Missing column: {0}")]
    MissingColumn(ColumnId),

    /// A value's tag disagrees with the type the transformer needs.
    #[error("Type mismatch: column {column} expects {expected} values")]
    TypeMismatch {
        column: ColumnId,
        expected: ColumnType,
    },

    /// Empty data provided where non-empty was required.
    #[error("Empty data: {0}")]
    EmptyData(String),

    /// Error raised by the dataset while fitting.
    #[error("Dataset error: {0}")]
    Dataset(#[from] DatasetError),

    /// Serialization or deserialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    IoError(String),
}

impl From<std::io::Error> for PreprocessingError {
    fn from(err: std::io::Error) -> Self {
        PreprocessingError::IoError(err.to_string())
    }
}

impl From<bincode::Error> for PreprocessingError {
    fn from(err: bincode::Error) -> Self {
        PreprocessingError::SerializationError(err.to_string())
    }
}

/// Result alias for preprocessing operations.
pub type Result<T> = std::result::Result<T, PreprocessingError>;
