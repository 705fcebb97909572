//! # tabular-transformers
//!
//! Feature transformers and distance kernels for tabular samples, with a strict
//! separation between learning parameters (`fit`) and applying them (`transform`).
//!
//! ## Core Design Principles
//!
//! - **Tagged values**: Every value is either continuous or categorical, and every
//!   dataset declares the type of each column, so no transformer inspects raw data
//!   to guess what it is.
//! - **Pure transforms**: `transform` borrows its input and returns a new batch;
//!   a batch is either fully transformed or rejected.
//! - **Explicit fit state**: Stateful transformers refuse to transform until they
//!   have been fitted, and their learned parameters can be saved and restored.
//!
//! ## Quick Start
//!
//! ```rust
//! use tabular_transformers::dataset::{InMemoryDataset, Sample, Value};
//! use tabular_transformers::preprocessing::{OneHotEncoder, Stateful, Transformer};
//!
//! let dataset = InMemoryDataset::from_samples(vec![
//!     Sample::from_values([Value::from("sunny"), Value::from(21.0)]),
//!     Sample::from_values([Value::from("rainy"), Value::from(14.5)]),
//! ])
//! .unwrap();
//!
//! let mut encoder = OneHotEncoder::new();
//! let encoded = encoder.fit_transform(&dataset).unwrap();
//!
//! assert_eq!(encoded[1], Sample::from_values([14.5, 0.0, 1.0]));
//! ```
//!
//! ## Module Structure
//!
//! - `dataset`: Column ids, tagged values, samples and the `Dataset` trait
//! - `preprocessing`: One-hot encoding, polynomial expansion, variance-threshold selection
//! - `kernels`: Distance kernels between samples (Hamming)
//! - `stats`: Population mean and variance
//! - `serialization`: Byte encoding of fitted parameters

/// Column ids, tagged values, samples and dataset abstractions.
pub mod dataset;

/// Pairwise kernels between samples.
pub mod kernels;

/// Data preprocessing transformers for ML pipelines.
pub mod preprocessing;

/// Parameter persistence.
pub mod serialization;

/// Descriptive statistics used while fitting.
pub mod stats;

pub use dataset::{ColumnId, ColumnType, Dataset, InMemoryDataset, Sample, Value};
pub use kernels::distance::{Distance, Hamming};
pub use preprocessing::{
    OneHotEncoder, PolynomialExpander, PreprocessingError, Stateful, Transformer,
    VarianceThresholdFilter,
};
