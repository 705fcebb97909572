//! Data preprocessing transformers for machine learning pipelines.
//!
//! Every transformer maps a batch of [`Sample`](crate::dataset::Sample)s to a
//! new batch. Stateful transformers first learn their parameters from a
//! [`Dataset`](crate::dataset::Dataset).
//!
//! # Core Traits
//!
//! - [`Transformer`]: `transform` a batch of samples
//! - [`Stateful`]: `fit` on a dataset before transforming; fitted parameters
//!   can be saved and loaded
//!
//! # Available Transformers
//!
//! ## Encoding
//! - [`OneHotEncoder`]: Indicator features for categorical columns
//!
//! ## Feature Engineering
//! - [`PolynomialExpander`]: Powers `1..=degree` of every feature
//!
//! ## Feature Selection
//! - [`VarianceThresholdFilter`]: Drop continuous columns with low variance
//!
//! # Example
//!
//! ```ignore
//! use tabular_transformers::preprocessing::{OneHotEncoder, Stateful, Transformer};
//!
//! let mut encoder = OneHotEncoder::new();
//! encoder.fit(&training_data)?;
//!
//! let encoded = encoder.transform(&batch)?;
//!
//! // Save for later use
//! encoder.save_to_file("encoder.bin")?;
//! let loaded = OneHotEncoder::load_from_file("encoder.bin")?;
//! ```

pub mod encoding;
pub mod error;
pub mod feature_engineering;
pub mod feature_selection;
pub mod traits;

// Re-export main types
pub use encoding::{ColumnCategories, OneHotEncoder, OneHotEncoderParams};
pub use error::{PreprocessingError, Result};
pub use feature_engineering::PolynomialExpander;
pub use feature_selection::{
    ColumnSelection, VarianceThresholdFilter, VarianceThresholdFilterParams,
};
pub use traits::{Stateful, Transformer};
