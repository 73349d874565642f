//! Attribute schema definitions.
//!
//! This module defines the schema types that describe dataset structure:
//! the ordered attribute list, the designated label attribute, and the
//! distinct values observed for every attribute.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Metadata for a single categorical attribute.
///
/// Values are stored in order of first appearance and addressed by a dense
/// `u32` code.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeMeta {
    /// Attribute name.
    name: String,
    /// Distinct values, indexed by code.
    values: Vec<String>,
    /// Value → code mapping.
    codes: HashMap<String, u32>,
}

impl AttributeMeta {
    /// Create metadata for an attribute with no values yet.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            values: Vec::new(),
            codes: HashMap::new(),
        }
    }

    /// Attribute name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Distinct values in first-appearance order.
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Number of distinct values.
    pub fn n_values(&self) -> usize {
        self.values.len()
    }

    /// Code of `value`, if it has been seen.
    pub fn code(&self, value: &str) -> Option<u32> {
        self.codes.get(value).copied()
    }

    /// Value for a code.
    pub fn value(&self, code: u32) -> Option<&str> {
        self.values.get(code as usize).map(String::as_str)
    }

    /// Return the code for `value`, registering it if new.
    pub(crate) fn intern(&mut self, value: &str) -> u32 {
        if let Some(code) = self.codes.get(value) {
            return *code;
        }
        let code = self.values.len() as u32;
        self.values.push(value.to_string());
        self.codes.insert(value.to_string(), code);
        code
    }
}

/// Schema describing the training data.
///
/// Holds per-attribute metadata in the column order established by the first
/// training record, the position of the label attribute, and a name → index
/// mapping.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    /// Per-attribute metadata.
    attributes: Vec<AttributeMeta>,
    /// Position of the label attribute in `attributes`.
    label: usize,
    /// Attribute name → index mapping.
    name_index: HashMap<String, usize>,
}

impl Schema {
    /// Create a schema from attribute metadata and the label attribute name.
    ///
    /// Returns `None` if `label` is not one of the attributes.
    pub fn new(attributes: Vec<AttributeMeta>, label: &str) -> Option<Self> {
        let name_index: HashMap<String, usize> = attributes
            .iter()
            .enumerate()
            .map(|(i, meta)| (meta.name.clone(), i))
            .collect();
        let label = *name_index.get(label)?;
        Some(Self {
            attributes,
            label,
            name_index,
        })
    }

    /// Number of attributes, including the label.
    pub fn n_attributes(&self) -> usize {
        self.attributes.len()
    }

    /// Get metadata for an attribute by index.
    pub fn get(&self, index: usize) -> Option<&AttributeMeta> {
        self.attributes.get(index)
    }

    /// Get attribute index by name.
    pub fn attribute_index(&self, name: &str) -> Option<usize> {
        self.name_index.get(name).copied()
    }

    /// Index of the label attribute.
    pub fn label_index(&self) -> usize {
        self.label
    }

    /// Metadata of the label attribute.
    pub fn label(&self) -> &AttributeMeta {
        &self.attributes[self.label]
    }

    /// Name of the label attribute.
    pub fn label_name(&self) -> &str {
        self.attributes[self.label].name()
    }

    /// Whether `name` is the label attribute.
    pub fn is_label(&self, name: &str) -> bool {
        self.label_name() == name
    }

    /// Get an iterator over attribute metadata.
    pub fn iter(&self) -> impl Iterator<Item = &AttributeMeta> {
        self.attributes.iter()
    }

    /// Names of the observable (non-label) attributes, in schema order.
    pub fn observable_names(&self) -> impl Iterator<Item = &str> {
        self.attributes
            .iter()
            .enumerate()
            .filter(move |(i, _)| *i != self.label)
            .map(|(_, meta)| meta.name())
    }

    pub(crate) fn attribute_mut(&mut self, index: usize) -> &mut AttributeMeta {
        &mut self.attributes[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schema() -> Schema {
        Schema::new(
            vec![
                AttributeMeta::new("color"),
                AttributeMeta::new("size"),
                AttributeMeta::new("class"),
            ],
            "class",
        )
        .unwrap()
    }

    #[test]
    fn intern_preserves_first_appearance() {
        let mut meta = AttributeMeta::new("color");
        assert_eq!(meta.intern("red"), 0);
        assert_eq!(meta.intern("blue"), 1);
        assert_eq!(meta.intern("red"), 0);
        assert_eq!(meta.values(), &["red".to_string(), "blue".to_string()]);
        assert_eq!(meta.code("blue"), Some(1));
        assert_eq!(meta.value(1), Some("blue"));
        assert_eq!(meta.code("green"), None);
    }

    #[test]
    fn label_lookup() {
        let s = schema();
        assert_eq!(s.n_attributes(), 3);
        assert_eq!(s.label_index(), 2);
        assert_eq!(s.label_name(), "class");
        assert!(s.is_label("class"));
        assert_eq!(s.attribute_index("size"), Some(1));
        assert_eq!(s.attribute_index("weight"), None);
    }

    #[test]
    fn observable_names_skip_label() {
        let s = schema();
        let names: Vec<_> = s.observable_names().collect();
        assert_eq!(names, vec!["color", "size"]);
    }

    #[test]
    fn missing_label_is_rejected() {
        let s = Schema::new(vec![AttributeMeta::new("color")], "class");
        assert!(s.is_none());
    }
}
