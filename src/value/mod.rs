//! Runtime values held by struct containers
//!
//! Containers are open-ended: any field name may carry any value. Values
//! are a tagged union and carry enough type information to answer the
//! "is an instance of" question asked by schema validation.

mod convert;
mod types;

pub use types::{Class, ValueType};

use indexmap::IndexMap;
use std::fmt;
use std::sync::Arc;

use crate::dstruct::DStruct;

/// An instance of a user-declared [`Class`] with its own attribute map.
#[derive(Debug, Clone, PartialEq)]
pub struct Object {
    class: Arc<Class>,
    attributes: IndexMap<String, Value>,
}

impl Object {
    pub fn new(class: &Arc<Class>) -> Self {
        Self {
            class: Arc::clone(class),
            attributes: IndexMap::new(),
        }
    }

    /// Builder-style attribute assignment
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn class(&self) -> &Arc<Class> {
        &self.class
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.attributes.get(name)
    }
}

/// A runtime value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    /// Modern text
    Str(String),
    /// Legacy byte-string text
    Bytes(Vec<u8>),
    List(Vec<Value>),
    Map(IndexMap<String, Value>),
    Object(Object),
    Struct(Box<DStruct>),
}

impl Value {
    /// Returns the runtime type of this value
    pub fn value_type(&self) -> ValueType {
        match self {
            Value::Null => ValueType::Null,
            Value::Bool(_) => ValueType::Bool,
            Value::Int(_) => ValueType::Int,
            Value::Float(_) => ValueType::Float,
            Value::Str(_) => ValueType::Str,
            Value::Bytes(_) => ValueType::Bytes,
            Value::List(_) => ValueType::List,
            Value::Map(_) => ValueType::Map,
            Value::Object(obj) => ValueType::Object(Arc::clone(obj.class())),
            Value::Struct(s) => ValueType::Struct(Arc::clone(s.struct_type())),
        }
    }

    /// Returns true if this value is an instance of `expected`, including
    /// instances of derived classes and struct subtypes.
    pub fn is_instance_of(&self, expected: &ValueType) -> bool {
        self.value_type().satisfies(expected)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }

    pub fn as_struct(&self) -> Option<&DStruct> {
        match self {
            Value::Struct(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(x) => write!(f, "{:?}", x),
            Value::Str(s) => write!(f, "{:?}", s),
            Value::Bytes(b) => write!(f, "b\"{}\"", b.escape_ascii()),
            Value::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            Value::Map(map) => {
                write!(f, "{{")?;
                for (i, (k, v)) in map.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{:?}: {}", k, v)?;
                }
                write!(f, "}}")
            }
            Value::Object(obj) => write!(f, "<{}>", obj.class().name()),
            Value::Struct(s) => write!(f, "<{}>", s.struct_type().name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_types() {
        assert_eq!(Value::Null.value_type(), ValueType::Null);
        assert_eq!(Value::Int(3).value_type(), ValueType::Int);
        assert_eq!(Value::Float(3.0).value_type(), ValueType::Float);
        assert_eq!(Value::Str("a".into()).value_type(), ValueType::Str);
        assert_eq!(Value::Bytes(b"a".to_vec()).value_type(), ValueType::Bytes);
    }

    #[test]
    fn test_object_is_instance_of_base() {
        let base = Class::new("BaseLabel");
        let label = Class::extending("Label", &[&base]);

        let v = Value::Object(Object::new(&label).with("name", "hi"));
        assert!(v.is_instance_of(&ValueType::Object(base.clone())));
        assert!(v.is_instance_of(&ValueType::Object(label)));

        let plain = Value::Object(Object::new(&base));
        assert!(!plain.is_instance_of(&ValueType::Int));
    }

    #[test]
    fn test_int_is_not_float() {
        assert!(!Value::Int(3).is_instance_of(&ValueType::Float));
        assert!(!Value::Float(9.4).is_instance_of(&ValueType::Int));
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::Int(991).to_string(), "991");
        assert_eq!(Value::Float(3.0).to_string(), "3.0");
        assert_eq!(Value::Str("sup".into()).to_string(), "\"sup\"");
        assert_eq!(Value::Bytes(b"sup".to_vec()).to_string(), "b\"sup\"");
        assert_eq!(
            Value::List(vec![Value::Int(1), Value::Null]).to_string(),
            "[1, null]"
        );

        let label = Class::new("Label");
        assert_eq!(Value::Object(Object::new(&label)).to_string(), "<Label>");
    }

    #[test]
    fn test_object_attributes() {
        let label = Class::new("Label");
        let obj = Object::new(&label).with("name", "Brown Owl Coffee");
        assert_eq!(obj.get("name").and_then(Value::as_str), Some("Brown Owl Coffee"));
        assert!(obj.get("missing").is_none());
    }
}
