//! Encoded categorical dataset.

use ndarray::{Array2, ArrayView1, ArrayView2};

use super::record::Record;
use super::schema::{AttributeMeta, Schema};
use crate::error::ModelError;

/// Training records encoded against a [`Schema`].
///
/// Values are stored as dense per-attribute codes in a `[n_records, n_attributes]`
/// matrix whose columns follow schema order. Row order is the input order,
/// which the cluster assignment depends on.
#[derive(Debug, Clone)]
pub struct Dataset {
    schema: Schema,
    codes: Array2<u32>,
}

impl Dataset {
    /// Create a builder for a dataset whose label attribute is `label`.
    pub fn builder(label: impl Into<String>) -> DatasetBuilder {
        DatasetBuilder::new(label)
    }

    /// Build a dataset from a slice of records.
    ///
    /// # Errors
    ///
    /// See [`DatasetBuilder::build`].
    pub fn from_records(records: &[Record], label: &str) -> Result<Self, ModelError> {
        DatasetBuilder::new(label)
            .add_records(records.iter().cloned())
            .build()
    }

    /// The schema established by the records.
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Number of records.
    pub fn n_records(&self) -> usize {
        self.codes.nrows()
    }

    /// Number of attributes, including the label.
    pub fn n_attributes(&self) -> usize {
        self.codes.ncols()
    }

    /// Value codes with shape `[n_records, n_attributes]`.
    pub fn codes(&self) -> ArrayView2<'_, u32> {
        self.codes.view()
    }

    /// Value codes of one record, in schema order.
    pub fn row(&self, index: usize) -> ArrayView1<'_, u32> {
        self.codes.row(index)
    }
}

/// Builder for [`Dataset`].
///
/// The first record fixes the attribute order; every later record must carry
/// exactly the same attribute set (in any order).
///
/// # Example
///
/// ```
/// use latent_bayes::{Dataset, Record};
///
/// let ds = Dataset::builder("class")
///     .add_record(Record::new().with("color", "red").with("class", "edible"))
///     .add_record(Record::new().with("class", "poisonous").with("color", "blue"))
///     .build()
///     .unwrap();
///
/// assert_eq!(ds.n_records(), 2);
/// assert_eq!(ds.schema().label_name(), "class");
/// ```
#[derive(Debug, Clone)]
pub struct DatasetBuilder {
    label: String,
    records: Vec<Record>,
}

impl DatasetBuilder {
    /// Create a new empty builder.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            records: Vec::new(),
        }
    }

    /// Append one record.
    pub fn add_record(mut self, record: Record) -> Self {
        self.records.push(record);
        self
    }

    /// Append records in iteration order.
    pub fn add_records(mut self, records: impl IntoIterator<Item = Record>) -> Self {
        self.records.extend(records);
        self
    }

    /// Build the dataset.
    ///
    /// # Errors
    ///
    /// - [`ModelError::EmptyTrainingSet`] if no records were added
    /// - [`ModelError::SchemaMismatch`] if the label attribute is missing from
    ///   the first record, or a later record's attribute set differs from it
    pub fn build(self) -> Result<Dataset, ModelError> {
        let first = self.records.first().ok_or(ModelError::EmptyTrainingSet)?;

        let attributes: Vec<AttributeMeta> = first.attributes().map(AttributeMeta::new).collect();
        let mut schema = Schema::new(attributes, &self.label).ok_or_else(|| {
            ModelError::schema_mismatch(format!(
                "label attribute '{}' not found in first record",
                self.label
            ))
        })?;

        let n_attributes = schema.n_attributes();
        let mut codes = Array2::<u32>::zeros((self.records.len(), n_attributes));

        for (i, record) in self.records.iter().enumerate() {
            if record.len() != n_attributes {
                return Err(ModelError::schema_mismatch(format!(
                    "record {i} has {} attributes, expected {n_attributes}",
                    record.len()
                )));
            }
            for (name, value) in record.iter() {
                let col = schema.attribute_index(name).ok_or_else(|| {
                    ModelError::schema_mismatch(format!(
                        "record {i} has unexpected attribute '{name}'"
                    ))
                })?;
                codes[[i, col]] = schema.attribute_mut(col).intern(value);
            }
        }

        Ok(Dataset { schema, codes })
    }
}
