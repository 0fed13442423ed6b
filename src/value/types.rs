//! Runtime type definitions
//!
//! Supported types:
//! - null: absence of a value
//! - bool: Boolean
//! - int: 64-bit signed integer
//! - float: 64-bit floating point
//! - str: UTF-8 text
//! - bytes: legacy byte-string text
//! - list / map: untyped collections
//! - object: instance of a user-declared [`Class`]
//! - struct: nested container of a given [`StructType`]

use std::fmt;
use std::sync::Arc;

use crate::dstruct::StructType;

/// A user-declared object type.
///
/// Classes form a multiple-inheritance graph. Identity is by allocation:
/// two classes declared separately are different types even when they
/// share a name.
pub struct Class {
    name: String,
    parents: Vec<Arc<Class>>,
}

impl Class {
    /// Declare a root class
    pub fn new(name: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            name: name.into(),
            parents: Vec::new(),
        })
    }

    /// Declare a class deriving from `parents`, in declaration order
    pub fn extending(name: impl Into<String>, parents: &[&Arc<Class>]) -> Arc<Self> {
        Arc::new(Self {
            name: name.into(),
            parents: parents.iter().map(|p| Arc::clone(p)).collect(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parents(&self) -> &[Arc<Class>] {
        &self.parents
    }

    /// Returns true if `self` is `other` or derives from it anywhere in
    /// the parent graph.
    pub fn is_subclass_of(&self, other: &Class) -> bool {
        std::ptr::eq(self, other) || self.parents.iter().any(|p| p.is_subclass_of(other))
    }
}

impl PartialEq for Class {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other)
    }
}

impl fmt::Debug for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Class")
            .field("name", &self.name)
            .field(
                "parents",
                &self.parents.iter().map(|p| p.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

/// The runtime type of a [`Value`](super::Value).
#[derive(Debug, Clone)]
pub enum ValueType {
    /// The type of `Value::Null`
    Null,
    /// Boolean
    Bool,
    /// 64-bit signed integer
    Int,
    /// 64-bit floating point
    Float,
    /// Modern text representation
    Str,
    /// Legacy byte-string text representation
    Bytes,
    /// Untyped list
    List,
    /// Untyped string-keyed map
    Map,
    /// Instance of a user-declared class (or any subclass)
    Object(Arc<Class>),
    /// Nested container of a struct type (or any subtype)
    Struct(Arc<StructType>),
}

impl ValueType {
    /// Returns the type name for error messages
    pub fn type_name(&self) -> &str {
        match self {
            ValueType::Null => "null",
            ValueType::Bool => "bool",
            ValueType::Int => "int",
            ValueType::Float => "float",
            ValueType::Str => "str",
            ValueType::Bytes => "bytes",
            ValueType::List => "list",
            ValueType::Map => "map",
            ValueType::Object(class) => class.name(),
            ValueType::Struct(ty) => ty.name(),
        }
    }

    /// Returns true if a value of runtime type `self` is an instance of
    /// `expected`.
    ///
    /// Primitive types match exactly. Object and struct types match the
    /// expected type itself or anything deriving from it.
    pub fn satisfies(&self, expected: &ValueType) -> bool {
        match (self, expected) {
            (ValueType::Object(actual), ValueType::Object(wanted)) => actual.is_subclass_of(wanted),
            (ValueType::Struct(actual), ValueType::Struct(wanted)) => actual.is_subtype_of(wanted),
            (ValueType::Object(_), _) | (ValueType::Struct(_), _) => false,
            (actual, wanted) => std::mem::discriminant(actual) == std::mem::discriminant(wanted),
        }
    }
}

impl PartialEq for ValueType {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (ValueType::Object(a), ValueType::Object(b)) => Arc::ptr_eq(a, b),
            (ValueType::Struct(a), ValueType::Struct(b)) => Arc::ptr_eq(a, b),
            (ValueType::Object(_), _) | (ValueType::Struct(_), _) => false,
            (a, b) => std::mem::discriminant(a) == std::mem::discriminant(b),
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.type_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subclass_walks_parents() {
        let base = Class::new("BaseLabel");
        let label = Class::extending("Label", &[&base]);
        let fancy = Class::extending("FancyLabel", &[&label]);

        assert!(fancy.is_subclass_of(&base));
        assert!(fancy.is_subclass_of(&label));
        assert!(label.is_subclass_of(&label));
        assert!(!base.is_subclass_of(&label));
    }

    #[test]
    fn test_multiple_inheritance() {
        let named = Class::new("Named");
        let located = Class::new("Located");
        let place = Class::extending("Place", &[&named, &located]);

        assert!(place.is_subclass_of(&named));
        assert!(place.is_subclass_of(&located));
        assert!(!named.is_subclass_of(&located));
    }

    #[test]
    fn test_class_identity_not_name() {
        let a = Class::new("Label");
        let b = Class::new("Label");
        assert!(!a.is_subclass_of(&b));
        assert_ne!(ValueType::Object(a), ValueType::Object(b));
    }

    #[test]
    fn test_primitive_satisfies_exactly() {
        assert!(ValueType::Int.satisfies(&ValueType::Int));
        assert!(!ValueType::Int.satisfies(&ValueType::Float));
        assert!(!ValueType::Bool.satisfies(&ValueType::Int));
        assert!(!ValueType::Str.satisfies(&ValueType::Bytes));
        assert!(ValueType::Null.satisfies(&ValueType::Null));
    }

    #[test]
    fn test_object_does_not_satisfy_primitive() {
        let label = Class::new("Label");
        assert!(!ValueType::Object(label.clone()).satisfies(&ValueType::Map));
        assert!(!ValueType::Map.satisfies(&ValueType::Object(label)));
    }

    #[test]
    fn test_type_names() {
        assert_eq!(ValueType::Str.type_name(), "str");
        assert_eq!(ValueType::Bytes.type_name(), "bytes");
        assert_eq!(ValueType::Float.to_string(), "float");
        assert_eq!(ValueType::Object(Class::new("BaseLabel")).type_name(), "BaseLabel");
    }
}
