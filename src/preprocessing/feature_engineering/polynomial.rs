//! Polynomial feature expansion.
//!
//! Replaces every feature with its successive powers up to a fixed degree.

use crate::dataset::{ColumnType, Sample};
use crate::preprocessing::error::PreprocessingError;
use crate::preprocessing::traits::Transformer;

/// PolynomialExpander transformer for generating power features.
///
/// For a sample `[a, b]` and degree `d` the output is
/// `[a, a^2, .., a^d, b, b^2, .., b^d]`. There are no interaction terms and no
/// bias column, so the output has exactly `n_features * degree` columns.
///
/// The expander learns nothing from data and needs no `fit`.
///
/// # Example
/// ```rust
/// use tabular_transformers::dataset::Sample;
/// use tabular_transformers::preprocessing::{PolynomialExpander, Transformer};
///
/// let expander = PolynomialExpander::new(2).unwrap();
/// let expanded = expander.transform(&[Sample::from_values([2.0, 3.0])]).unwrap();
///
/// assert_eq!(expanded[0], Sample::from_values([2.0, 4.0, 3.0, 9.0]));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PolynomialExpander {
    /// Highest power generated for each feature.
    degree: usize,
}

impl Default for PolynomialExpander {
    /// Quadratic expansion.
    fn default() -> Self {
        Self { degree: 2 }
    }
}

impl PolynomialExpander {
    /// Create an expander generating powers `1..=degree`.
    ///
    /// # Errors
    /// Returns [`PreprocessingError::InvalidParameter`] if `degree` is 0 or
    /// does not fit a floating-point integer power.
    pub fn new(degree: usize) -> Result<Self, PreprocessingError> {
        if degree < 1 {
            return Err(PreprocessingError::InvalidParameter(format!(
                "The degree of the polynomial must be greater than 0, got {}",
                degree
            )));
        }
        if i32::try_from(degree).is_err() {
            return Err(PreprocessingError::InvalidParameter(format!(
                "The degree of the polynomial must be at most {}, got {}",
                i32::MAX,
                degree
            )));
        }
        Ok(Self { degree })
    }

    /// Highest power generated for each feature.
    pub fn degree(&self) -> usize {
        self.degree
    }

    /// Number of output features for `n_features_in` input features.
    pub fn n_features_out(&self, n_features_in: usize) -> usize {
        n_features_in * self.degree
    }

    fn expand_into(&self, x: f64, out: &mut Vec<f64>) {
        // degree <= i32::MAX is checked in `new`
        out.extend((1..=self.degree as i32).map(|power| x.powi(power)));
    }

    /// Expand a dense `(n_samples, n_features)` matrix.
    #[cfg(feature = "ndarray")]
    pub fn transform_array(&self, data: &ndarray::Array2<f64>) -> ndarray::Array2<f64> {
        let (rows, cols) = data.dim();
        let mut out = ndarray::Array2::zeros((rows, self.n_features_out(cols)));
        let mut powers = Vec::with_capacity(self.degree);

        for ((row, col), &x) in data.indexed_iter() {
            powers.clear();
            self.expand_into(x, &mut powers);
            for (j, &p) in powers.iter().enumerate() {
                out[[row, col * self.degree + j]] = p;
            }
        }

        out
    }
}

impl Transformer for PolynomialExpander {
    fn transform(&self, samples: &[Sample]) -> Result<Vec<Sample>, PreprocessingError> {
        let Some(first) = samples.first() else {
            return Ok(Vec::new());
        };
        let n_features = first.len();

        samples
            .iter()
            .map(|sample| {
                if sample.len() != n_features {
                    return Err(PreprocessingError::FeatureMismatch {
                        expected_features: n_features,
                        got_features: sample.len(),
                    });
                }

                let mut expanded = Vec::with_capacity(self.n_features_out(n_features));
                for (column, value) in sample.iter() {
                    let x = value.as_f64().ok_or_else(|| PreprocessingError::TypeMismatch {
                        column: column.clone(),
                        expected: ColumnType::Continuous,
                    })?;
                    self.expand_into(x, &mut expanded);
                }

                Ok(Sample::from_values(expanded))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{ColumnId, Value};
    use approx::assert_abs_diff_eq;

    fn values(sample: &Sample) -> Vec<f64> {
        sample.values().map(|v| v.as_f64().unwrap()).collect()
    }

    #[test]
    fn test_polynomial_expander_degree_2() {
        let expander = PolynomialExpander::new(2).unwrap();
        let out = expander.transform(&[Sample::from_values([2.0, 3.0])]).unwrap();

        assert_eq!(values(&out[0]), vec![2.0, 4.0, 3.0, 9.0]);
    }

    #[test]
    fn test_polynomial_expander_degree_1_is_identity() {
        let samples = vec![
            Sample::from_values([1.5, -2.0, 0.0]),
            Sample::from_values([3.25, 7.0, -0.5]),
        ];
        let expander = PolynomialExpander::new(1).unwrap();

        assert_eq!(expander.transform(&samples).unwrap(), samples);
    }

    #[test]
    fn test_polynomial_expander_degree_3_multiple_rows() {
        let expander = PolynomialExpander::new(3).unwrap();
        let out = expander
            .transform(&[
                Sample::from_values([1.0, 2.0]),
                Sample::from_values([-2.0, 0.5]),
            ])
            .unwrap();

        assert_eq!(out.len(), 2);
        assert_eq!(out[0].len(), expander.n_features_out(2));
        assert_eq!(values(&out[0]), vec![1.0, 1.0, 1.0, 2.0, 4.0, 8.0]);

        let row1 = values(&out[1]);
        assert_abs_diff_eq!(row1[2], -8.0);
        assert_abs_diff_eq!(row1[5], 0.125);
    }

    #[test]
    fn test_polynomial_expander_rekeys_named_columns() {
        let expander = PolynomialExpander::default();
        let out = expander.transform(&[Sample::new().with("x", 3.0)]).unwrap();

        assert_eq!(out[0].get(&ColumnId::Index(1)), Some(&Value::Continuous(9.0)));
        assert!(!out[0].contains(&ColumnId::from("x")));
    }

    #[test]
    fn test_polynomial_expander_zero_degree_fails() {
        assert!(matches!(
            PolynomialExpander::new(0),
            Err(PreprocessingError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_polynomial_expander_huge_degree_fails() {
        assert!(PolynomialExpander::new(i32::MAX as usize + 1).is_err());
    }

    #[test]
    fn test_polynomial_expander_default() {
        assert_eq!(PolynomialExpander::default().degree(), 2);
    }

    #[test]
    fn test_polynomial_expander_empty_batch() {
        let expander = PolynomialExpander::new(4).unwrap();
        assert!(expander.transform(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_polynomial_expander_ragged_batch_fails() {
        let expander = PolynomialExpander::new(2).unwrap();
        let result = expander.transform(&[
            Sample::from_values([1.0, 2.0]),
            Sample::from_values([1.0]),
        ]);

        assert!(matches!(
            result,
            Err(PreprocessingError::FeatureMismatch {
                expected_features: 2,
                got_features: 1
            })
        ));
    }

    #[test]
    fn test_polynomial_expander_categorical_value_fails() {
        let expander = PolynomialExpander::new(2).unwrap();
        let sample = Sample::from_values([Value::from(1.0), Value::from("a")]);
        let result = expander.transform(&[sample]);

        assert!(matches!(
            result,
            Err(PreprocessingError::TypeMismatch { .. })
        ));
    }

    #[cfg(feature = "ndarray")]
    #[test]
    fn test_polynomial_expander_transform_array() {
        let expander = PolynomialExpander::new(2).unwrap();
        let data = ndarray::array![[2.0, 3.0], [-1.0, 0.5]];
        let out = expander.transform_array(&data);

        assert_eq!(out, ndarray::array![[2.0, 4.0, 3.0, 9.0], [-1.0, 1.0, 0.5, 0.25]]);
    }
}
