//! One-hot encoding for categorical features.
//!
//! Expands every categorical column into a fixed-width block of indicator
//! features, one per category observed during fitting.

use crate::dataset::{ColumnId, ColumnType, Dataset, Sample, Value};
use crate::preprocessing::error::PreprocessingError;
use crate::preprocessing::traits::{Stateful, Transformer};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use tracing::{debug, trace};

/// Categories learned for a single categorical column.
///
/// Positions are global: the first categorical column owns positions
/// `0..k`, the next one `k..k + m`, and so on. `offset` is the first position
/// owned by this column.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ColumnCategories {
    column: ColumnId,
    offset: usize,
    positions: HashMap<String, usize>,
}

impl ColumnCategories {
    /// The column these categories belong to.
    pub fn column(&self) -> &ColumnId {
        &self.column
    }

    /// First global position owned by this column.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Number of categories, i.e. the width of the indicator block.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Global position of a category label.
    pub fn position(&self, label: &str) -> Option<usize> {
        self.positions.get(label).copied()
    }

    /// Category labels in first-seen order.
    pub fn labels(&self) -> Vec<&str> {
        let mut labels: Vec<(&str, usize)> = self
            .positions
            .iter()
            .map(|(label, &pos)| (label.as_str(), pos))
            .collect();
        labels.sort_by_key(|&(_, pos)| pos);
        labels.into_iter().map(|(label, _)| label).collect()
    }
}

/// One-hot encoder for categorical columns.
///
/// During fitting, every column the dataset declares as categorical is scanned
/// in sample order and each new label is given the next free position. At
/// transform time the categorical columns are removed and replaced by their
/// indicator blocks, appended after the remaining columns.
///
/// Labels not seen during fitting encode as an all-zero block.
///
/// # Example
/// ```rust
/// use tabular_transformers::dataset::{InMemoryDataset, Sample, Value};
/// use tabular_transformers::preprocessing::{OneHotEncoder, Stateful, Transformer};
///
/// let dataset = InMemoryDataset::from_samples(vec![
///     Sample::from_values([Value::from("red"), Value::from(1.0)]),
///     Sample::from_values([Value::from("blue"), Value::from(2.0)]),
/// ])
/// .unwrap();
///
/// let mut encoder = OneHotEncoder::new();
/// encoder.fit(&dataset).unwrap();
///
/// let sample = Sample::from_values([Value::from("blue"), Value::from(3.0)]);
/// let encoded = encoder.transform(&[sample]).unwrap();
/// assert_eq!(encoded[0], Sample::from_values([3.0, 0.0, 1.0]));
/// ```
#[derive(Clone, Debug, Default)]
pub struct OneHotEncoder {
    categories: Option<Vec<ColumnCategories>>,
}

/// Serializable parameters for a fitted OneHotEncoder.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OneHotEncoderParams {
    /// Learned categories for each categorical column, in column order.
    pub categories: Vec<ColumnCategories>,
}

impl OneHotEncoder {
    /// Create an unfitted encoder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Learned categories per column, or `None` before fitting.
    pub fn categories(&self) -> Option<&[ColumnCategories]> {
        self.categories.as_deref()
    }

    /// Category labels of one column in first-seen order.
    pub fn categories_of(&self, column: &ColumnId) -> Option<Vec<&str>> {
        self.categories()?
            .iter()
            .find(|c| &c.column == column)
            .map(ColumnCategories::labels)
    }

    /// Total width of the indicator block (0 before fitting).
    pub fn n_categories(&self) -> usize {
        self.categories()
            .map_or(0, |cats| cats.iter().map(ColumnCategories::len).sum())
    }
}

/// Learn the categories of one column, starting at global position `offset`.
fn learn_column<D: Dataset + ?Sized>(
    dataset: &D,
    column: &ColumnId,
    offset: usize,
) -> Result<ColumnCategories, PreprocessingError> {
    let mut positions = HashMap::new();

    for value in dataset.column(column)? {
        let label = value
            .as_category()
            .ok_or_else(|| PreprocessingError::TypeMismatch {
                column: column.clone(),
                expected: ColumnType::Categorical,
            })?;
        if !positions.contains_key(label) {
            let next = offset + positions.len();
            positions.insert(label.to_string(), next);
        }
    }

    Ok(ColumnCategories {
        column: column.clone(),
        offset,
        positions,
    })
}

/// Encode one sample. Named columns keep their ids; positional columns and the
/// indicator block are renumbered from 0 in output order.
fn encode_sample(
    categories: &[ColumnCategories],
    encoded_columns: &HashSet<&ColumnId>,
    width: usize,
    sample: &Sample,
) -> Result<Sample, PreprocessingError> {
    let mut indicators = Vec::with_capacity(width);

    for cats in categories {
        let mut block = vec![0.0; cats.len()];
        match sample.get(&cats.column) {
            Some(Value::Categorical(label)) => match cats.position(label) {
                Some(pos) => block[pos - cats.offset] = 1.0,
                None => trace!(column = %cats.column, label = %label, "unseen category"),
            },
            Some(Value::Continuous(_)) => {
                return Err(PreprocessingError::TypeMismatch {
                    column: cats.column.clone(),
                    expected: ColumnType::Categorical,
                })
            }
            None => return Err(PreprocessingError::MissingColumn(cats.column.clone())),
        }
        indicators.extend(block);
    }

    let mut entries = Vec::with_capacity(sample.len() + width);
    for (column, value) in sample.iter() {
        if !encoded_columns.contains(column) {
            entries.push((column.clone(), value.clone()));
        }
    }

    let mut next_index = 0usize;
    for (column, _) in entries.iter_mut() {
        if let ColumnId::Index(i) = column {
            *i = next_index;
            next_index += 1;
        }
    }
    entries.extend(
        indicators
            .into_iter()
            .enumerate()
            .map(|(i, x)| (ColumnId::Index(next_index + i), Value::Continuous(x))),
    );

    Ok(Sample::from_entries(entries))
}

impl Transformer for OneHotEncoder {
    fn transform(&self, samples: &[Sample]) -> Result<Vec<Sample>, PreprocessingError> {
        let categories = self
            .categories
            .as_ref()
            .ok_or(PreprocessingError::NotFitted("OneHotEncoder"))?;

        let encoded_columns: HashSet<&ColumnId> = categories.iter().map(|c| &c.column).collect();
        let width = self.n_categories();

        samples
            .iter()
            .map(|sample| encode_sample(categories, &encoded_columns, width, sample))
            .collect()
    }
}

impl Stateful for OneHotEncoder {
    type Params = OneHotEncoderParams;

    fn fit<D: Dataset + ?Sized>(&mut self, dataset: &D) -> Result<(), PreprocessingError> {
        // The running position is threaded through the columns so that every
        // category gets a globally unique slot.
        let (categories, n_positions) = dataset
            .types()
            .iter()
            .filter(|(_, ty)| *ty == ColumnType::Categorical)
            .try_fold(
                (Vec::new(), 0usize),
                |(mut acc, position), (column, _)| {
                    let cats = learn_column(dataset, column, position)?;
                    let next = position + cats.len();
                    acc.push(cats);
                    Ok::<_, PreprocessingError>((acc, next))
                },
            )?;

        debug!(
            "Fitted OneHotEncoder: {} categorical columns, {} categories over {} samples",
            categories.len(),
            n_positions,
            dataset.len()
        );

        self.categories = Some(categories);
        Ok(())
    }

    fn is_fitted(&self) -> bool {
        self.categories.is_some()
    }

    fn extract_params(&self) -> Result<Self::Params, PreprocessingError> {
        let categories = self
            .categories
            .clone()
            .ok_or(PreprocessingError::NotFitted("OneHotEncoder"))?;
        Ok(OneHotEncoderParams { categories })
    }

    fn from_params(params: Self::Params) -> Result<Self, PreprocessingError> {
        let mut expected_offset = 0;
        for cats in &params.categories {
            let range = cats.offset..cats.offset + cats.len();
            let distinct: HashSet<usize> = cats.positions.values().copied().collect();
            if cats.offset != expected_offset
                || distinct.len() != cats.len()
                || !distinct.iter().all(|p| range.contains(p))
            {
                return Err(PreprocessingError::InvalidParameter(format!(
                    "category positions for column {} are not contiguous from {}",
                    cats.column, expected_offset
                )));
            }
            expected_offset = range.end;
        }

        Ok(Self {
            categories: Some(params.categories),
        })
    }
}
