//! Variance threshold feature selection.
//!
//! Drops continuous columns whose population variance does not exceed a
//! threshold. Categorical columns are always kept.

use crate::dataset::{ColumnId, ColumnType, Dataset, Sample};
use crate::preprocessing::error::PreprocessingError;
use crate::preprocessing::traits::{Stateful, Transformer};
use crate::stats;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{debug, trace};

/// Selection decision for one column.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ColumnSelection {
    /// Column the decision applies to.
    pub column: ColumnId,
    /// Whether the column survives `transform`.
    pub keep: bool,
    /// Population variance for continuous columns, `None` otherwise.
    pub variance: Option<f64>,
}

/// Serializable parameters for a fitted VarianceThresholdFilter.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VarianceThresholdFilterParams {
    /// Minimum variance a continuous column must exceed.
    pub threshold: f64,
    /// Per-column decisions in column order.
    pub columns: Vec<ColumnSelection>,
}

/// Feature selector that removes low-variance continuous columns.
///
/// A continuous column is selected when its population variance is strictly
/// greater than the threshold, so with the default threshold of 0 only
/// constant columns are removed.
///
/// # Example
/// ```rust
/// use tabular_transformers::dataset::{InMemoryDataset, Sample};
/// use tabular_transformers::preprocessing::{Stateful, Transformer, VarianceThresholdFilter};
///
/// let dataset = InMemoryDataset::from_samples(vec![
///     Sample::from_values([1.0, 5.0]),
///     Sample::from_values([2.0, 5.0]),
///     Sample::from_values([3.0, 5.0]),
/// ])
/// .unwrap();
///
/// let mut filter = VarianceThresholdFilter::new(0.0).unwrap();
/// let filtered = filter.fit_transform(&dataset).unwrap();
///
/// assert_eq!(filtered[2], Sample::from_values([3.0]));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct VarianceThresholdFilter {
    threshold: f64,
    selection: Option<Vec<ColumnSelection>>,
}

impl Default for VarianceThresholdFilter {
    fn default() -> Self {
        Self {
            threshold: 0.0,
            selection: None,
        }
    }
}

fn validate_threshold(threshold: f64) -> Result<(), PreprocessingError> {
    if threshold.is_nan() || threshold < 0.0 {
        return Err(PreprocessingError::InvalidParameter(format!(
            "Threshold must be a non-negative value, got {}",
            threshold
        )));
    }
    Ok(())
}

impl VarianceThresholdFilter {
    /// Create an unfitted filter.
    ///
    /// # Errors
    /// Returns [`PreprocessingError::InvalidParameter`] if `threshold` is
    /// negative or NaN.
    pub fn new(threshold: f64) -> Result<Self, PreprocessingError> {
        validate_threshold(threshold)?;
        Ok(Self {
            threshold,
            selection: None,
        })
    }

    /// Minimum variance a continuous column must exceed.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Selected columns in column order; empty before fitting.
    pub fn selected(&self) -> Vec<&ColumnId> {
        self.selection
            .iter()
            .flatten()
            .filter(|s| s.keep)
            .map(|s| &s.column)
            .collect()
    }

    /// Learned variance of every continuous column; empty before fitting.
    pub fn variances(&self) -> Vec<(&ColumnId, f64)> {
        self.selection
            .iter()
            .flatten()
            .filter_map(|s| s.variance.map(|v| (&s.column, v)))
            .collect()
    }
}

impl Transformer for VarianceThresholdFilter {
    fn transform(&self, samples: &[Sample]) -> Result<Vec<Sample>, PreprocessingError> {
        let selection = self
            .selection
            .as_ref()
            .ok_or(PreprocessingError::NotFitted("VarianceThresholdFilter"))?;

        let kept: HashSet<&ColumnId> = selection
            .iter()
            .filter(|s| s.keep)
            .map(|s| &s.column)
            .collect();

        Ok(samples
            .iter()
            .map(|sample| {
                Sample::from_values(
                    sample
                        .iter()
                        .filter(|(column, _)| kept.contains(column))
                        .map(|(_, value)| value.clone()),
                )
            })
            .collect())
    }
}

impl Stateful for VarianceThresholdFilter {
    type Params = VarianceThresholdFilterParams;

    fn fit<D: Dataset + ?Sized>(&mut self, dataset: &D) -> Result<(), PreprocessingError> {
        if dataset.is_empty() {
            return Err(PreprocessingError::EmptyData(
                "Cannot fit VarianceThresholdFilter on empty data".to_string(),
            ));
        }

        let mut selection = Vec::with_capacity(dataset.n_columns());

        for (column, ty) in dataset.types() {
            let decision = match ty {
                ColumnType::Continuous => {
                    let values = dataset.continuous_column(column)?;
                    let (_, variance) = stats::mean_var(&values).ok_or_else(|| {
                        PreprocessingError::EmptyData(format!("column {} has no values", column))
                    })?;
                    let keep = variance > self.threshold;
                    if !keep {
                        trace!(column = %column, variance, "dropping low-variance column");
                    }
                    ColumnSelection {
                        column: column.clone(),
                        keep,
                        variance: Some(variance),
                    }
                }
                ColumnType::Categorical => ColumnSelection {
                    column: column.clone(),
                    keep: true,
                    variance: None,
                },
            };
            selection.push(decision);
        }

        let n_kept = selection.iter().filter(|s| s.keep).count();
        debug!(
            "Fitted VarianceThresholdFilter: kept {} of {} columns (threshold {})",
            n_kept,
            selection.len(),
            self.threshold
        );

        self.selection = Some(selection);
        Ok(())
    }

    fn is_fitted(&self) -> bool {
        self.selection.is_some()
    }

    fn extract_params(&self) -> Result<Self::Params, PreprocessingError> {
        let columns = self
            .selection
            .clone()
            .ok_or(PreprocessingError::NotFitted("VarianceThresholdFilter"))?;
        Ok(VarianceThresholdFilterParams {
            threshold: self.threshold,
            columns,
        })
    }

    fn from_params(params: Self::Params) -> Result<Self, PreprocessingError> {
        validate_threshold(params.threshold)?;
        Ok(Self {
            threshold: params.threshold,
            selection: Some(params.columns),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{InMemoryDataset, Value};
    use approx::assert_abs_diff_eq;

    fn row(x: f64, label: &str, y: f64) -> Sample {
        Sample::from_values([Value::from(x), Value::from(5.0), Value::from(label), Value::from(y)])
    }

    fn dataset() -> InMemoryDataset {
        InMemoryDataset::from_samples(vec![
            row(1.0, "a", 0.0),
            row(2.0, "a", 0.0),
            row(3.0, "b", 0.0),
            row(4.0, "a", 4.0),
        ])
        .unwrap()
    }

    #[test]
    fn test_zero_threshold_drops_constant_columns() {
        let mut filter = VarianceThresholdFilter::new(0.0).unwrap();
        filter.fit(&dataset()).unwrap();

        assert_eq!(
            filter.selected(),
            vec![&ColumnId::Index(0), &ColumnId::Index(2), &ColumnId::Index(3)]
        );
    }

    #[test]
    fn test_variances_are_population_variances() {
        let mut filter = VarianceThresholdFilter::default();
        filter.fit(&dataset()).unwrap();

        let variances = filter.variances();
        assert_eq!(variances.len(), 3);
        assert_abs_diff_eq!(variances[0].1, 1.25);
        assert_abs_diff_eq!(variances[1].1, 0.0);
        assert_abs_diff_eq!(variances[2].1, 3.0);
    }

    #[test]
    fn test_threshold_is_strict() {
        let mut filter = VarianceThresholdFilter::new(1.25).unwrap();
        filter.fit(&dataset()).unwrap();

        // 1.25 is not > 1.25; the categorical column always survives
        assert_eq!(
            filter.selected(),
            vec![&ColumnId::Index(2), &ColumnId::Index(3)]
        );
    }

    #[test]
    fn test_transform_flattens_selected_columns() {
        let mut filter = VarianceThresholdFilter::new(0.0).unwrap();
        let out = filter.fit_transform(&dataset()).unwrap();

        assert_eq!(out.len(), 4);
        assert_eq!(
            out[2],
            Sample::from_values([Value::from(3.0), Value::from("b"), Value::from(0.0)])
        );
    }

    #[test]
    fn test_transform_rekeys_named_columns_and_drops_unknown() {
        let data = InMemoryDataset::from_samples(vec![
            Sample::new().with("x", 1.0).with("y", 7.0),
            Sample::new().with("x", 3.0).with("y", 7.0),
        ])
        .unwrap();
        let mut filter = VarianceThresholdFilter::default();
        filter.fit(&data).unwrap();

        let out = filter
            .transform(&[Sample::new().with("z", 0.0).with("y", 1.0).with("x", 9.0)])
            .unwrap();
        assert_eq!(out[0], Sample::from_values([9.0]));
    }

    #[test]
    fn test_selected_before_fit_is_empty() {
        let filter = VarianceThresholdFilter::default();
        assert!(filter.selected().is_empty());
        assert!(filter.variances().is_empty());
        assert!(!filter.is_fitted());
    }

    #[test]
    fn test_transform_before_fit_fails() {
        let filter = VarianceThresholdFilter::default();
        assert!(matches!(
            filter.transform(&[Sample::from_values([1.0])]),
            Err(PreprocessingError::NotFitted(_))
        ));
    }

    #[test]
    fn test_negative_threshold_fails() {
        assert!(matches!(
            VarianceThresholdFilter::new(-0.1),
            Err(PreprocessingError::InvalidParameter(_))
        ));
        assert!(VarianceThresholdFilter::new(f64::NAN).is_err());
    }

    #[test]
    fn test_fit_empty_dataset_fails() {
        let mut filter = VarianceThresholdFilter::default();
        let empty = InMemoryDataset::from_samples(Vec::new()).unwrap();

        assert!(matches!(
            filter.fit(&empty),
            Err(PreprocessingError::EmptyData(_))
        ));
        assert!(!filter.is_fitted());
    }

    #[test]
    fn test_failed_fit_keeps_previous_state() {
        let mut filter = VarianceThresholdFilter::default();
        filter.fit(&dataset()).unwrap();
        let before: Vec<ColumnId> = filter.selected().into_iter().cloned().collect();

        let empty = InMemoryDataset::from_samples(Vec::new()).unwrap();
        assert!(filter.fit(&empty).is_err());

        struct Mistyped(Vec<(ColumnId, ColumnType)>, Vec<Sample>);
        impl Dataset for Mistyped {
            fn types(&self) -> &[(ColumnId, ColumnType)] {
                &self.0
            }
            fn samples(&self) -> &[Sample] {
                &self.1
            }
        }
        let mistyped = Mistyped(
            vec![(ColumnId::Index(0), ColumnType::Continuous)],
            vec![Sample::from_values(["x"])],
        );
        assert!(matches!(
            filter.fit(&mistyped),
            Err(PreprocessingError::Dataset(_))
        ));

        let after: Vec<ColumnId> = filter.selected().into_iter().cloned().collect();
        assert_eq!(after, before);
        assert_abs_diff_eq!(filter.variances()[0].1, 1.25);
    }

    #[test]
    fn test_params_round_trip() {
        let mut filter = VarianceThresholdFilter::new(0.5).unwrap();
        filter.fit(&dataset()).unwrap();

        let params = filter.extract_params().unwrap();
        let restored = VarianceThresholdFilter::from_params(params).unwrap();

        assert_eq!(restored, filter);
    }

    #[test]
    fn test_from_params_rejects_negative_threshold() {
        let params = VarianceThresholdFilterParams {
            threshold: -1.0,
            columns: Vec::new(),
        };
        assert!(VarianceThresholdFilter::from_params(params).is_err());
    }

    #[test]
    fn test_serialization() {
        let mut filter = VarianceThresholdFilter::default();
        filter.fit(&dataset()).unwrap();

        let temp_file = std::env::temp_dir().join("test_tabular_variance_threshold.bin");
        filter.save_to_file(&temp_file).unwrap();

        let loaded = VarianceThresholdFilter::load_from_file(&temp_file).unwrap();
        assert_eq!(loaded.selected(), filter.selected());
        assert_eq!(loaded.threshold(), filter.threshold());

        std::fs::remove_file(temp_file).ok();
    }
}
