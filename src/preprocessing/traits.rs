//! Core traits for preprocessing transformers.
//!
//! This module defines the two central traits:
//! - [`Transformer`]: Applies a transformation to a batch of samples.
//! - [`Stateful`]: A transformer whose `transform` depends on parameters learned by `fit`.

use crate::dataset::{Dataset, Sample};
use crate::preprocessing::error::PreprocessingError;
use crate::serialization::SerializableParams;

/// Trait for anything that maps a batch of samples to a new batch.
///
/// Transformations are pure: the input batch is never mutated, and either every
/// sample is transformed or the call fails without producing output.
///
/// # Example
/// ```ignore
/// use tabular_transformers::preprocessing::{PolynomialExpander, Transformer};
///
/// let expander = PolynomialExpander::new(2)?;
/// let expanded = expander.transform(&samples)?;
/// ```
pub trait Transformer {
    /// Transform a batch of samples.
    ///
    /// # Errors
    /// Returns [`PreprocessingError`] if:
    /// - The transformer is stateful and has not been fitted
    /// - A sample does not match the expected schema
    fn transform(&self, samples: &[Sample]) -> Result<Vec<Sample>, PreprocessingError>;
}

/// Trait for transformers that learn parameters from a dataset.
///
/// A stateful transformer starts unfitted. `fit` learns its parameters from a
/// [`Dataset`]; afterwards `transform` may be called any number of times. Calling
/// `transform` before `fit` fails with [`PreprocessingError::NotFitted`].
///
/// # Guarantees
/// - A failed `fit` leaves previously learned parameters untouched.
/// - `extract_params()` + `from_params()` is a round-trip.
pub trait Stateful: Transformer {
    /// Serializable representation of learned parameters.
    type Params: SerializableParams;

    /// Learn parameters from the dataset, replacing any previous fit.
    fn fit<D: Dataset + ?Sized>(&mut self, dataset: &D) -> Result<(), PreprocessingError>;

    /// Whether `fit` has completed successfully.
    fn is_fitted(&self) -> bool;

    /// Fit to the dataset and transform its own samples.
    fn fit_transform<D: Dataset + ?Sized>(
        &mut self,
        dataset: &D,
    ) -> Result<Vec<Sample>, PreprocessingError> {
        self.fit(dataset)?;
        self.transform(dataset.samples())
    }

    /// Extract learned parameters as a serializable representation.
    ///
    /// # Errors
    /// Returns [`PreprocessingError::NotFitted`] before `fit`.
    fn extract_params(&self) -> Result<Self::Params, PreprocessingError>;

    /// Reconstruct a fitted transformer from parameters.
    fn from_params(params: Self::Params) -> Result<Self, PreprocessingError>
    where
        Self: Sized;

    /// Save the fitted parameters to a file.
    fn save_to_file<P: AsRef<std::path::Path>>(&self, path: P) -> Result<(), PreprocessingError> {
        let params = self.extract_params()?;
        let bytes = params
            .to_bytes()
            .map_err(|e| PreprocessingError::SerializationError(e.to_string()))?;
        std::fs::write(path, bytes)?;
        Ok(())
    }

    /// Load a fitted transformer from a file.
    fn load_from_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self, PreprocessingError>
    where
        Self: Sized,
    {
        let bytes = std::fs::read(path)?;
        let params = Self::Params::from_bytes(&bytes)
            .map_err(|e| PreprocessingError::SerializationError(e.to_string()))?;
        Self::from_params(params)
    }
}
