//! Descriptive statistics over numeric columns.
//!
//! All estimators are population estimators (normalized by `N`, not `N - 1`).

/// Arithmetic mean, or `None` for an empty slice.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Population variance, or `None` for an empty slice.
pub fn variance(values: &[f64]) -> Option<f64> {
    mean_var(values).map(|(_, var)| var)
}

/// Population mean and variance (Welford's online update).
///
/// A constant column yields a variance of exactly 0, without rounding residue.
///
/// ```rust
/// use tabular_transformers::stats::mean_var;
///
/// let (mean, var) = mean_var(&[1.0, 2.0, 3.0, 4.0]).unwrap();
/// assert_eq!(mean, 2.5);
/// assert_eq!(var, 1.25);
/// ```
pub fn mean_var(values: &[f64]) -> Option<(f64, f64)> {
    if values.is_empty() {
        return None;
    }

    let mut mean = 0.0;
    let mut m2 = 0.0;
    for (k, &x) in values.iter().enumerate() {
        let delta = x - mean;
        mean += delta / (k + 1) as f64;
        m2 += delta * (x - mean);
    }

    Some((mean, m2 / values.len() as f64))
}
