//! Distance kernels.
//!
//! A distance kernel maps two samples with the same columns to a non-negative
//! dissimilarity score.

use crate::dataset::{ColumnId, Sample};
use thiserror::Error;

mod hamming;

pub use hamming::Hamming;

/// Errors raised when two samples cannot be compared.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DistanceError {
    /// The samples have different numbers of columns.
    #[error("Length mismatch: {left} columns vs {right} columns")]
    LengthMismatch { left: usize, right: usize },

    /// A column of the first sample is absent from the second.
    #[error("Missing column: {0}")]
    MissingColumn(ColumnId),
}

/// A dissimilarity measure between two samples.
pub trait Distance {
    /// Compute the distance between `a` and `b`.
    ///
    /// # Errors
    /// Returns [`DistanceError`] if the samples do not share the same column set.
    fn compute(&self, a: &Sample, b: &Sample) -> Result<f64, DistanceError>;
}
