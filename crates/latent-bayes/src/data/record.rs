//! Categorical records.

use serde::{Deserialize, Serialize};

/// An ordered mapping from attribute name to categorical value.
///
/// Used both for training rows (which carry the label attribute) and for
/// observations passed to prediction (which do not). Inserting an attribute
/// that is already present replaces its value in place, so a record never
/// holds the same attribute twice.
///
/// # Example
///
/// ```
/// use latent_bayes::Record;
///
/// let record = Record::new()
///     .with("color", "red")
///     .with("size", "large")
///     .with("class", "edible");
///
/// assert_eq!(record.len(), 3);
/// assert_eq!(record.get("size"), Some("large"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    fields: Vec<(String, String)>,
}

impl Record {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, attribute: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(attribute, value);
        self
    }

    /// Set `attribute` to `value`, returning the previous value if any.
    ///
    /// Existing attributes keep their position.
    pub fn insert(
        &mut self,
        attribute: impl Into<String>,
        value: impl Into<String>,
    ) -> Option<String> {
        let attribute = attribute.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(name, _)| *name == attribute) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.fields.push((attribute, value));
                None
            }
        }
    }

    /// Look up the value of an attribute.
    pub fn get(&self, attribute: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(name, _)| name == attribute)
            .map(|(_, value)| value.as_str())
    }

    /// Whether the record has a value for `attribute`.
    pub fn contains(&self, attribute: &str) -> bool {
        self.get(attribute).is_some()
    }

    /// Remove an attribute, returning its value.
    pub fn remove(&mut self, attribute: &str) -> Option<String> {
        let pos = self.fields.iter().position(|(name, _)| name == attribute)?;
        Some(self.fields.remove(pos).1)
    }

    /// Copy of this record with `attribute` removed.
    pub fn without(&self, attribute: &str) -> Self {
        Self {
            fields: self
                .fields
                .iter()
                .filter(|(name, _)| name != attribute)
                .cloned()
                .collect(),
        }
    }

    /// Number of attributes.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the record has no attributes.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate `(attribute, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Iterate attribute names in insertion order.
    pub fn attributes(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Record::new();
        for (attribute, value) in iter {
            record.insert(attribute, value);
        }
        record
    }
}
