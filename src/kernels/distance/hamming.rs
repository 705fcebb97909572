use super::{Distance, DistanceError};
use crate::dataset::Sample;

/// Hamming distance: the fraction of columns on which two samples disagree.
///
/// Values are compared exactly, so it suits categorical or discretized
/// features. The result lies in `[0, 1]` and is 0 only when every column matches.
///
/// # Example
/// ```rust
/// use tabular_transformers::dataset::Sample;
/// use tabular_transformers::kernels::distance::{Distance, Hamming};
///
/// let a = Sample::from_iter([("x", 2), ("y", 1), ("z", 4)]);
/// let b = Sample::from_iter([("x", 7), ("y", 9), ("z", 4)]);
///
/// let d = Hamming.compute(&a, &b).unwrap();
/// assert!((d - 2.0 / 3.0).abs() < 1e-12);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Hamming;

impl Hamming {
    pub fn new() -> Self {
        Self
    }
}

impl Distance for Hamming {
    fn compute(&self, a: &Sample, b: &Sample) -> Result<f64, DistanceError> {
        if a.len() != b.len() {
            return Err(DistanceError::LengthMismatch {
                left: a.len(),
                right: b.len(),
            });
        }
        if a.is_empty() {
            return Ok(0.0);
        }

        let mut mismatches = 0usize;
        for (column, x) in a.iter() {
            let y = b
                .get(column)
                .ok_or_else(|| DistanceError::MissingColumn(column.clone()))?;
            if !x.same_as(y) {
                mismatches += 1;
            }
        }

        Ok(mismatches as f64 / a.len() as f64)
    }
}
