//! Parsed frontmatter values.

use indexmap::IndexMap;

/// A single frontmatter field value.
///
/// Fields are either a scalar string or a flat list of strings. The scanner
/// never produces nested structures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// A plain string value.
    Scalar(String),
    /// A list of string items.
    List(Vec<String>),
}

impl FieldValue {
    /// The scalar value, if this is a scalar field.
    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            FieldValue::Scalar(value) => Some(value),
            FieldValue::List(_) => None,
        }
    }

    /// The list items, if this is a list field.
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            FieldValue::List(items) => Some(items),
            FieldValue::Scalar(_) => None,
        }
    }
}

/// An ordered map of frontmatter fields.
///
/// Fields keep their first-assignment order. Reassigning an existing field
/// replaces its value in place: last write wins, position stays.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldMap(IndexMap<String, FieldValue>);

impl FieldMap {
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    /// Insert a field, replacing any existing value under the same name.
    pub fn insert(&mut self, key: String, value: FieldValue) {
        self.0.insert(key, value);
    }

    /// Look up a field by name.
    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.0.get(key)
    }

    /// The scalar value of a field, if present and scalar.
    pub fn scalar(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(FieldValue::as_scalar)
    }

    /// The list items of a field, if present and a list.
    pub fn list(&self, key: &str) -> Option<&[String]> {
        self.get(key).and_then(FieldValue::as_list)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate fields in first-assignment order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.0.iter().map(|(key, value)| (key.as_str(), value))
    }
}
