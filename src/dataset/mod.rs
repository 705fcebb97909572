//! Dataset abstractions for tabular transformers.
//!
//! This module provides the tagged value model shared by every transformer and
//! the [`Dataset`] trait that stateful transformers learn from.
//!
//! # Core Concepts
//!
//! - **ColumnId**: A stable column identifier, either an integer index or a name.
//! - **Value**: A tagged scalar: continuous (`f64`) or categorical (label).
//! - **Sample**: An ordered mapping from [`ColumnId`] to [`Value`].
//! - **Dataset**: An ordered collection of samples plus a declared type per column.
//!
//! # Example
//!
//! ```rust
//! use tabular_transformers::dataset::{ColumnType, Dataset, InMemoryDataset, Sample, Value};
//!
//! let samples = vec![
//!     Sample::from_iter([("color", Value::from("red")), ("size", Value::from(1.5))]),
//!     Sample::from_iter([("color", Value::from("blue")), ("size", Value::from(2.5))]),
//! ];
//! let dataset = InMemoryDataset::from_samples(samples).unwrap();
//!
//! assert_eq!(dataset.len(), 2);
//! assert_eq!(dataset.types()[0].1, ColumnType::Categorical);
//! ```

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;
use thiserror::Error;

pub mod memory;
pub use self::memory::InMemoryDataset;

/// Identifier of a feature column.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ColumnId {
    /// Positional column.
    Index(usize),
    /// Named column.
    Name(String),
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnId::Index(i) => write!(f, "{}", i),
            ColumnId::Name(name) => write!(f, "{}", name),
        }
    }
}

impl From<usize> for ColumnId {
    fn from(index: usize) -> Self {
        ColumnId::Index(index)
    }
}

impl From<&str> for ColumnId {
    fn from(name: &str) -> Self {
        ColumnId::Name(name.to_string())
    }
}

impl From<String> for ColumnId {
    fn from(name: String) -> Self {
        ColumnId::Name(name)
    }
}

/// Declared type of a column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColumnType {
    /// Discrete labels with no ordering.
    Categorical,
    /// Real-valued measurements.
    Continuous,
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnType::Categorical => f.write_str("categorical"),
            ColumnType::Continuous => f.write_str("continuous"),
        }
    }
}

/// A single tagged feature value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// Numeric value.
    Continuous(f64),
    /// Category label.
    Categorical(String),
}

impl Value {
    /// The column type this value belongs to.
    pub fn column_type(&self) -> ColumnType {
        match self {
            Value::Continuous(_) => ColumnType::Continuous,
            Value::Categorical(_) => ColumnType::Categorical,
        }
    }

    /// Numeric payload, if continuous.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Continuous(x) => Some(*x),
            Value::Categorical(_) => None,
        }
    }

    /// Label payload, if categorical.
    pub fn as_category(&self) -> Option<&str> {
        match self {
            Value::Categorical(label) => Some(label),
            Value::Continuous(_) => None,
        }
    }

    /// Equality that treats two NaNs as the same value.
    pub fn same_as(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Continuous(x), Value::Continuous(y)) => x == y || (x.is_nan() && y.is_nan()),
            (Value::Categorical(a), Value::Categorical(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Continuous(x) => write!(f, "{}", x),
            Value::Categorical(label) => f.write_str(label),
        }
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Continuous(x)
    }
}

impl From<i32> for Value {
    fn from(x: i32) -> Self {
        Value::Continuous(f64::from(x))
    }
}

impl From<&str> for Value {
    fn from(label: &str) -> Self {
        Value::Categorical(label.to_string())
    }
}

impl From<String> for Value {
    fn from(label: String) -> Self {
        Value::Categorical(label)
    }
}

/// An ordered mapping from column identifier to value.
///
/// Insertion order is the column order seen by every transformer.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    entries: Vec<(ColumnId, Value)>,
}

impl Sample {
    /// Create an empty sample.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a sample keyed by position (`0..n`).
    pub fn from_values<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self {
            entries: values
                .into_iter()
                .enumerate()
                .map(|(i, v)| (ColumnId::Index(i), v.into()))
                .collect(),
        }
    }

    /// Build a sample from entries whose keys are already unique.
    pub(crate) fn from_entries(entries: Vec<(ColumnId, Value)>) -> Self {
        debug_assert!(
            entries.len() == entries.iter().map(|(k, _)| k).collect::<HashSet<_>>().len(),
            "duplicate column ids"
        );
        Self { entries }
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Value stored under `id`.
    pub fn get(&self, id: &ColumnId) -> Option<&Value> {
        self.entries.iter().find(|(k, _)| k == id).map(|(_, v)| v)
    }

    pub fn contains(&self, id: &ColumnId) -> bool {
        self.get(id).is_some()
    }

    /// Insert a value, replacing in place when the column already exists.
    pub fn push(&mut self, id: impl Into<ColumnId>, value: impl Into<Value>) {
        let id = id.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == id) {
            Some(slot) => slot.1 = value,
            None => self.entries.push((id, value)),
        }
    }

    /// Builder form of [`Sample::push`].
    pub fn with(mut self, id: impl Into<ColumnId>, value: impl Into<Value>) -> Self {
        self.push(id, value);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ColumnId, &Value)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &ColumnId> {
        self.entries.iter().map(|(k, _)| k)
    }

    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.entries.iter().map(|(_, v)| v)
    }
}

impl<K, V> FromIterator<(K, V)> for Sample
where
    K: Into<ColumnId>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut entries: Vec<(ColumnId, Value)> = Vec::new();
        let mut slots: HashMap<ColumnId, usize> = HashMap::new();
        for (k, v) in iter {
            let (k, v) = (k.into(), v.into());
            match slots.get(&k) {
                Some(&slot) => entries[slot].1 = v,
                None => {
                    slots.insert(k.clone(), entries.len());
                    entries.push((k, v));
                }
            }
        }
        Self { entries }
    }
}

/// Errors raised by dataset construction and column access.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DatasetError {
    /// A sample does not carry a declared column.
    #[error("sample {sample} is missing column {column}")]
    MissingColumn { sample: usize, column: ColumnId },

    /// A value's tag disagrees with the declared column type.
    #[error("column {column} expects {expected} values, got {got} at sample {sample}")]
    TypeMismatch {
        sample: usize,
        column: ColumnId,
        expected: ColumnType,
        got: ColumnType,
    },

    /// A sample has a different number of columns than the first one.
    #[error("sample {sample} has {got} columns, expected {expected}")]
    FeatureMismatch {
        sample: usize,
        expected: usize,
        got: usize,
    },
}

/// Read access to a typed, ordered collection of samples.
///
/// Implementors only supply [`Dataset::types`] and [`Dataset::samples`]; column
/// access is derived from them.
pub trait Dataset {
    /// Declared column types in column order.
    fn types(&self) -> &[(ColumnId, ColumnType)];

    /// Samples in dataset order.
    fn samples(&self) -> &[Sample];

    fn len(&self) -> usize {
        self.samples().len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of declared columns.
    fn n_columns(&self) -> usize {
        self.types().len()
    }

    /// All values of a column in sample order.
    ///
    /// # Errors
    /// Returns [`DatasetError::MissingColumn`] if any sample lacks the column.
    fn column(&self, id: &ColumnId) -> Result<Vec<&Value>, DatasetError> {
        self.samples()
            .iter()
            .enumerate()
            .map(|(i, sample)| {
                sample.get(id).ok_or_else(|| DatasetError::MissingColumn {
                    sample: i,
                    column: id.clone(),
                })
            })
            .collect()
    }

    /// Numeric values of a continuous column in sample order.
    ///
    /// # Errors
    /// Fails if a sample lacks the column or holds a categorical value in it.
    fn continuous_column(&self, id: &ColumnId) -> Result<Vec<f64>, DatasetError> {
        self.column(id)?
            .into_iter()
            .enumerate()
            .map(|(i, value)| {
                value.as_f64().ok_or_else(|| DatasetError::TypeMismatch {
                    sample: i,
                    column: id.clone(),
                    expected: ColumnType::Continuous,
                    got: value.column_type(),
                })
            })
            .collect()
    }
}

/// Pack a batch of all-continuous samples into a dense `(n_samples, n_features)` matrix.
///
/// # Errors
/// Fails on ragged samples or categorical values.
#[cfg(feature = "ndarray")]
pub fn to_array2(samples: &[Sample]) -> Result<ndarray::Array2<f64>, DatasetError> {
    let cols = samples.first().map_or(0, Sample::len);
    let mut array = ndarray::Array2::zeros((samples.len(), cols));

    for (i, sample) in samples.iter().enumerate() {
        if sample.len() != cols {
            return Err(DatasetError::FeatureMismatch {
                sample: i,
                expected: cols,
                got: sample.len(),
            });
        }
        for (j, (column, value)) in sample.iter().enumerate() {
            array[[i, j]] = value.as_f64().ok_or_else(|| DatasetError::TypeMismatch {
                sample: i,
                column: column.clone(),
                expected: ColumnType::Continuous,
                got: value.column_type(),
            })?;
        }
    }

    Ok(array)
}
