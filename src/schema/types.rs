//! Schema type definitions
//!
//! A schema maps each required attribute name to an optional expected
//! type. `None` means any value is acceptable and presence is sufficient.

use indexmap::IndexMap;

use crate::value::ValueType;

/// A required-attribute declaration attached to a struct type.
#[derive(Debug, Clone, PartialEq)]
pub struct RequiredAttribute {
    /// Attribute name
    pub name: String,
    /// Expected type, if constrained
    pub required_type: Option<ValueType>,
}

impl RequiredAttribute {
    /// Require presence only
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            required_type: None,
        }
    }

    /// Require presence and a value that is an instance of `ty`
    pub fn typed(name: impl Into<String>, ty: ValueType) -> Self {
        Self {
            name: name.into(),
            required_type: Some(ty),
        }
    }
}

/// Aggregated required attributes for a struct type.
///
/// Iteration follows insertion order, which is the order validation
/// visits requirements in.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Schema {
    attributes: IndexMap<String, Option<ValueType>>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `name` unless it is already present. Returns true if the
    /// entry was added.
    pub fn insert_if_absent(&mut self, name: &str, required_type: Option<ValueType>) -> bool {
        if self.attributes.contains_key(name) {
            return false;
        }
        self.attributes.insert(name.to_string(), required_type);
        true
    }

    /// Returns the declared constraint for `name`: `None` if `name` is not
    /// required, `Some(None)` if it is required without a type.
    pub fn get(&self, name: &str) -> Option<Option<&ValueType>> {
        self.attributes.get(name).map(Option::as_ref)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Iterates `(name, expected_type)` pairs in validation order
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&ValueType>)> {
        self.attributes.iter().map(|(k, v)| (k.as_str(), v.as_ref()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.attributes.keys().map(String::as_str)
    }
}

impl<'a> FromIterator<&'a RequiredAttribute> for Schema {
    fn from_iter<I: IntoIterator<Item = &'a RequiredAttribute>>(iter: I) -> Self {
        let mut schema = Schema::new();
        for attr in iter {
            schema.insert_if_absent(&attr.name, attr.required_type.clone());
        }
        schema
    }
}
