//! Categorical feature encoding transformers.
//!
//! This module provides encoders for converting categorical columns to numerical
//! representations that can be used by machine learning models.
//!
//! # Available Encoders
//!
//! ## OneHotEncoder
//! Expands each categorical column into one indicator feature per category.
//!
//! ```ignore
//! // Input:  [["red", 1.5], ["blue", 2.0]]
//! // Output: [[1.5, 1, 0], [2.0, 0, 1]]
//! ```
//!
//! # Design Notes
//!
//! Encoders read column types from the [`Dataset`](crate::dataset::Dataset)
//! they are fitted on, so continuous columns pass through untouched without
//! any inspection of the values themselves.

mod one_hot;

pub use one_hot::{ColumnCategories, OneHotEncoder, OneHotEncoderParams};
