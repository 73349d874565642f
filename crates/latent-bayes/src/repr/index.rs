//! Attribute-value enumeration.

use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::data::Schema;
use crate::error::ModelError;

/// Enumeration of every (attribute, value) pair seen in the training set.
///
/// Defines the row space of [`FrequencyTable`](super::FrequencyTable) and
/// [`ConditionalTable`](super::ConditionalTable). Rows are grouped by
/// attribute in schema order; within an attribute, values keep their
/// first-appearance order. Row of `(attr, code)` is `offsets[attr] + code`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeValueIndex {
    schema: Schema,
    /// `offsets[a]..offsets[a + 1]` are the rows of attribute `a`.
    offsets: Vec<usize>,
}

impl AttributeValueIndex {
    /// Build the index from a fitted schema.
    pub fn from_schema(schema: &Schema) -> Self {
        let mut offsets = Vec::with_capacity(schema.n_attributes() + 1);
        let mut next = 0;
        offsets.push(next);
        for meta in schema.iter() {
            next += meta.n_values();
            offsets.push(next);
        }
        Self {
            schema: schema.clone(),
            offsets,
        }
    }

    /// The schema the index was built from.
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Total number of (attribute, value) pairs.
    #[inline]
    pub fn n_rows(&self) -> usize {
        self.offsets[self.offsets.len() - 1]
    }

    /// Number of attributes, including the label.
    #[inline]
    pub fn n_attributes(&self) -> usize {
        self.offsets.len() - 1
    }

    /// Rows belonging to attribute `attr`.
    #[inline]
    pub fn attribute_rows(&self, attr: usize) -> Range<usize> {
        self.offsets[attr]..self.offsets[attr + 1]
    }

    /// Rows belonging to the label attribute, one per label value.
    #[inline]
    pub fn label_rows(&self) -> Range<usize> {
        self.attribute_rows(self.schema.label_index())
    }

    /// Row of an encoded `(attribute, value code)` pair.
    #[inline]
    pub fn row(&self, attr: usize, code: u32) -> usize {
        debug_assert!((code as usize) < self.offsets[attr + 1] - self.offsets[attr]);
        self.offsets[attr] + code as usize
    }

    /// Resolve a named `(attribute, value)` pair to its row.
    ///
    /// # Errors
    ///
    /// [`ModelError::UnknownCategory`] if the attribute or the value was never
    /// observed during fitting.
    pub fn lookup(&self, attribute: &str, value: &str) -> Result<usize, ModelError> {
        let attr = self
            .schema
            .attribute_index(attribute)
            .ok_or_else(|| ModelError::unknown_category(attribute, value))?;
        let code = self
            .schema
            .get(attr)
            .and_then(|meta| meta.code(value))
            .ok_or_else(|| ModelError::unknown_category(attribute, value))?;
        Ok(self.row(attr, code))
    }

    /// Named pair stored at `row`.
    pub fn pair(&self, row: usize) -> Option<(&str, &str)> {
        let attr = self.offsets.partition_point(|&start| start <= row).checked_sub(1)?;
        let meta = self.schema.get(attr)?;
        let value = meta.value((row - self.offsets[attr]) as u32)?;
        Some((meta.name(), value))
    }

    /// Iterate all named pairs in row order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.schema.iter().flat_map(|meta| {
            meta.values()
                .iter()
                .map(move |value| (meta.name(), value.as_str()))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Dataset, Record};

    fn index() -> AttributeValueIndex {
        let records = vec![
            Record::new().with("color", "red").with("class", "edible"),
            Record::new().with("color", "blue").with("class", "poisonous"),
            Record::new().with("color", "white").with("class", "edible"),
        ];
        let ds = Dataset::from_records(&records, "class").unwrap();
        AttributeValueIndex::from_schema(ds.schema())
    }

    #[test]
    fn row_layout() {
        let idx = index();
        assert_eq!(idx.n_rows(), 5);
        assert_eq!(idx.n_attributes(), 2);
        assert_eq!(idx.attribute_rows(0), 0..3);
        assert_eq!(idx.label_rows(), 3..5);
        assert_eq!(idx.lookup("color", "white").unwrap(), 2);
        assert_eq!(idx.lookup("class", "poisonous").unwrap(), 4);
    }

    #[test]
    fn pair_inverts_lookup() {
        let idx = index();
        for (row, (attr, value)) in idx.iter().enumerate() {
            assert_eq!(idx.lookup(attr, value).unwrap(), row);
            assert_eq!(idx.pair(row), Some((attr, value)));
        }
        assert_eq!(idx.pair(idx.n_rows()), None);
    }

    #[test]
    fn unknown_value_and_attribute() {
        let idx = index();
        assert_eq!(
            idx.lookup("color", "green"),
            Err(ModelError::unknown_category("color", "green"))
        );
        assert!(matches!(
            idx.lookup("odor", "none"),
            Err(ModelError::UnknownCategory { .. })
        ));
    }
}
