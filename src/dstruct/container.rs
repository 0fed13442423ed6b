//! The struct container
//!
//! Construction semantics:
//! - The input mapping is loaded first, then named entries on top
//!   (entries win on key collision)
//! - An absent mapping is treated as empty
//! - Fields beyond the schema are kept; the schema says what is required,
//!   not what is allowed
//! - Unless the type defers it, construction ends with a schema check
//!
//! Validation semantics:
//! - Requirements are visited in schema order
//! - The first unmet requirement fails the check
//! - A requirement with no expected type is met by presence alone,
//!   including a null value

use indexmap::IndexMap;
use std::ops::Index;
use std::sync::Arc;

use super::errors::{StructError, StructResult};
use super::struct_type::StructType;
use crate::observability;
use crate::schema::accepted_types;
use crate::value::{Value, ValueType};

/// Field name to value, in insertion order
pub type Fields = IndexMap<String, Value>;

/// A dynamic attribute container bound to a [`StructType`].
///
/// Mutable after construction; callers sharing an instance must serialise
/// writes themselves.
#[derive(Debug, Clone)]
pub struct DStruct {
    struct_type: Arc<StructType>,
    fields: Fields,
    has_loaded: bool,
    has_validated: bool,
}

impl DStruct {
    /// Creates a container of `struct_type` from an optional mapping plus
    /// named entries.
    ///
    /// # Errors
    ///
    /// When the type validates on construction, returns the first
    /// `RequiredAttributeMissing` or `RequiredAttributeInvalid` found.
    pub fn new(
        struct_type: &Arc<StructType>,
        input: Option<Fields>,
        entries: Fields,
    ) -> StructResult<Self> {
        let mut this = Self::loaded(struct_type, input, entries);

        if struct_type.validate_on_construction() {
            this.check_schema()?;
        } else {
            observability::schema_check_deferred(struct_type.name());
        }

        Ok(this)
    }

    /// Creates a container from named entries only
    pub fn with_entries(struct_type: &Arc<StructType>, entries: Fields) -> StructResult<Self> {
        Self::new(struct_type, None, entries)
    }

    /// Creates a container from a mapping only
    pub fn from_map(struct_type: &Arc<StructType>, input: Fields) -> StructResult<Self> {
        Self::new(struct_type, Some(input), Fields::new())
    }

    /// Creates a container of the root type, which requires nothing, so
    /// the schema check it runs always passes.
    pub fn plain(input: Option<Fields>, entries: Fields) -> Self {
        let mut this = Self::loaded(&StructType::base(), input, entries);
        let passed = this.check_schema().is_ok();
        debug_assert!(passed, "root type declares no required attributes");
        this
    }

    /// Creates a container from a JSON document. `null` counts as an
    /// absent mapping.
    ///
    /// # Errors
    ///
    /// Returns `InputNotAMapping` for any other non-object document, and
    /// validation errors as for [`DStruct::new`].
    pub fn from_json(
        struct_type: &Arc<StructType>,
        document: serde_json::Value,
    ) -> StructResult<Self> {
        let input = match document {
            serde_json::Value::Null => None,
            serde_json::Value::Object(map) => Some(
                map.into_iter()
                    .map(|(k, v)| (k, Value::from(v)))
                    .collect::<Fields>(),
            ),
            other => {
                return Err(StructError::InputNotAMapping {
                    struct_name: struct_type.name().to_string(),
                    found: Value::from(other).value_type().to_string(),
                })
            }
        };
        Self::new(struct_type, input, Fields::new())
    }

    fn loaded(struct_type: &Arc<StructType>, input: Option<Fields>, entries: Fields) -> Self {
        let mut this = Self {
            struct_type: Arc::clone(struct_type),
            fields: Fields::new(),
            has_loaded: false,
            has_validated: false,
        };
        this.load(input, entries);
        this.has_loaded = true;

        observability::struct_loaded(struct_type.name(), this.fields.len());
        this
    }

    /// Merges `input` then `entries` onto this container. Existing fields
    /// with the same names are overwritten.
    pub fn load(&mut self, input: Option<Fields>, entries: Fields) {
        self.fields.extend(input.unwrap_or_default());
        self.fields.extend(entries);
    }

    /// Checks this container against its own type's schema.
    pub fn check_schema(&mut self) -> StructResult<()> {
        let struct_type = Arc::clone(&self.struct_type);
        self.check_schema_against(&struct_type)
    }

    /// Checks this container against the schema and compatibility policy
    /// of `struct_type`, which need not be the container's own type.
    ///
    /// Marks the container validated on success. Repeating the call with
    /// unchanged fields gives the same result.
    pub fn check_schema_against(&mut self, struct_type: &StructType) -> StructResult<()> {
        let violation = struct_type
            .required_attributes()
            .iter()
            .find_map(|(name, expected)| self.check_requirement(struct_type, name, expected));

        match violation {
            Some(err) => {
                observability::schema_check_failed(
                    struct_type.name(),
                    err.code(),
                    err.attribute(),
                );
                Err(err)
            }
            None => {
                self.has_validated = true;
                observability::schema_check_passed(struct_type.name());
                Ok(())
            }
        }
    }

    /// Every unmet requirement of this container's own type, in schema
    /// order. Empty when the container is valid.
    pub fn violations(&self) -> Vec<StructError> {
        self.violations_against(&self.struct_type)
    }

    /// Every unmet requirement of `struct_type`, in schema order.
    pub fn violations_against(&self, struct_type: &StructType) -> Vec<StructError> {
        struct_type
            .required_attributes()
            .iter()
            .filter_map(|(name, expected)| self.check_requirement(struct_type, name, expected))
            .collect()
    }

    fn check_requirement(
        &self,
        struct_type: &StructType,
        name: &str,
        expected: Option<&ValueType>,
    ) -> Option<StructError> {
        let value = match self.fields.get(name) {
            Some(value) => value,
            None => {
                return Some(StructError::RequiredAttributeMissing {
                    struct_name: self.struct_type.name().to_string(),
                    attribute: name.to_string(),
                })
            }
        };

        // Untyped: presence is enough
        let expected = expected?;
        let accepted = accepted_types(struct_type.compatibility(), expected);
        if accepted.iter().any(|ty| value.is_instance_of(ty)) {
            return None;
        }

        Some(StructError::RequiredAttributeInvalid {
            struct_name: self.struct_type.name().to_string(),
            attribute: name.to_string(),
            expected: expected.clone(),
            value: value.clone(),
            actual_type: value.value_type(),
        })
    }

    /// Named-field access
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Keyed lookup that reports an absent key as an error
    pub fn try_get(&self, name: &str) -> StructResult<&Value> {
        self.fields
            .get(name)
            .ok_or_else(|| StructError::AttributeNotFound {
                struct_name: self.struct_type.name().to_string(),
                attribute: name.to_string(),
            })
    }

    /// Sets a field, returning the previous value if there was one
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.fields.insert(name.into(), value.into())
    }

    /// Removes a field, keeping the order of the rest
    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.fields.shift_remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub fn fields(&self) -> &Fields {
        &self.fields
    }

    pub fn into_fields(self) -> Fields {
        self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn struct_type(&self) -> &Arc<StructType> {
        &self.struct_type
    }

    /// True once inputs have been merged onto the container
    pub fn has_loaded(&self) -> bool {
        self.has_loaded
    }

    /// True once a schema check has passed
    pub fn has_validated(&self) -> bool {
        self.has_validated
    }
}

impl PartialEq for DStruct {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.struct_type, &other.struct_type) && self.fields == other.fields
    }
}

/// Keyed lookup.
///
/// # Panics
///
/// Panics if the container has no field called `key`. Use
/// [`DStruct::get`] or [`DStruct::try_get`] for a fallible lookup.
impl Index<&str> for DStruct {
    type Output = Value;

    fn index(&self, key: &str) -> &Value {
        match self.fields.get(key) {
            Some(value) => value,
            None => panic!(
                "{} has no attribute called `{}`",
                self.struct_type.name(),
                key
            ),
        }
    }
}

/// Builds a [`Fields`] map from `"name" => value` pairs.
///
/// ```ignore
/// let entries = fields! { "latitude" => 1.1, "longitude" => 1.1 };
/// ```
#[macro_export]
macro_rules! fields {
    () => {
        $crate::dstruct::Fields::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut fields = $crate::dstruct::Fields::new();
        $(
            fields.insert(::std::string::String::from($key), $crate::value::Value::from($value));
        )+
        fields
    }};
}
