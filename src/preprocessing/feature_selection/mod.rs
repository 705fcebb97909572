//! Feature selection transformers.
//!
//! Selectors learn which columns to keep during `fit` and drop the rest at
//! transform time.

mod variance_threshold;

pub use variance_threshold::{
    ColumnSelection, VarianceThresholdFilter, VarianceThresholdFilterParams,
};
