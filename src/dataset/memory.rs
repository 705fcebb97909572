use crate::dataset::{ColumnId, ColumnType, Dataset, DatasetError, Sample};

/// A dataset held entirely in memory.
///
/// Every sample is checked against the declared column types at construction,
/// so transformers can rely on each typed column being present and well tagged.
#[derive(Clone, Debug, Default)]
pub struct InMemoryDataset {
    types: Vec<(ColumnId, ColumnType)>,
    samples: Vec<Sample>,
}

impl InMemoryDataset {
    /// Build a dataset from explicit column types.
    ///
    /// # Errors
    /// Fails if a sample lacks a declared column or a value's tag disagrees
    /// with its column type.
    pub fn new(
        types: Vec<(ColumnId, ColumnType)>,
        samples: Vec<Sample>,
    ) -> Result<Self, DatasetError> {
        for (i, sample) in samples.iter().enumerate() {
            for (column, expected) in &types {
                let value = sample.get(column).ok_or_else(|| DatasetError::MissingColumn {
                    sample: i,
                    column: column.clone(),
                })?;
                if value.column_type() != *expected {
                    return Err(DatasetError::TypeMismatch {
                        sample: i,
                        column: column.clone(),
                        expected: *expected,
                        got: value.column_type(),
                    });
                }
            }
        }
        Ok(Self { types, samples })
    }

    /// Build a dataset whose column types follow the value tags of the first sample.
    pub fn from_samples(samples: Vec<Sample>) -> Result<Self, DatasetError> {
        let types = samples
            .first()
            .map(|first| {
                first
                    .iter()
                    .map(|(column, value)| (column.clone(), value.column_type()))
                    .collect()
            })
            .unwrap_or_default();
        Self::new(types, samples)
    }

    /// Consume the dataset and return its samples.
    pub fn into_samples(self) -> Vec<Sample> {
        self.samples
    }
}

impl Dataset for InMemoryDataset {
    fn types(&self) -> &[(ColumnId, ColumnType)] {
        &self.types
    }

    fn samples(&self) -> &[Sample] {
        &self.samples
    }
}
