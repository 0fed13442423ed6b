//! # Struct Errors
//!
//! Error types for struct construction, lookup, and validation.
//!
//! Error codes:
//! - DSTRUCT_REQUIRED_ATTRIBUTE_MISSING
//! - DSTRUCT_REQUIRED_ATTRIBUTE_INVALID
//! - DSTRUCT_ATTRIBUTE_NOT_FOUND
//! - DSTRUCT_INPUT_NOT_A_MAPPING

use thiserror::Error;

use crate::value::{Value, ValueType};

/// Result type for struct operations
pub type StructResult<T> = Result<T, StructError>;

/// Struct errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StructError {
    // ==================
    // Validation Errors
    // ==================
    /// A required attribute has no value on the container
    #[error("You need an attribute called `{attribute}` when making a {struct_name}")]
    RequiredAttributeMissing {
        struct_name: String,
        attribute: String,
    },

    /// A required attribute holds a value of an unacceptable type
    #[error(
        "The value of the attribute `{attribute}` must be an instance of {expected}. \
         Instead, got: {value}, which is a {actual_type}"
    )]
    RequiredAttributeInvalid {
        struct_name: String,
        attribute: String,
        expected: ValueType,
        value: Value,
        actual_type: ValueType,
    },

    // ==================
    // Access Errors
    // ==================
    /// Keyed lookup of an attribute the container does not hold
    #[error("{struct_name} has no attribute called `{attribute}`")]
    AttributeNotFound {
        struct_name: String,
        attribute: String,
    },

    /// Construction input was not a key-value mapping
    #[error("Cannot load a {struct_name} from a {found}: expected a mapping")]
    InputNotAMapping { struct_name: String, found: String },
}

impl StructError {
    /// Returns the stable error code
    pub fn code(&self) -> &'static str {
        match self {
            StructError::RequiredAttributeMissing { .. } => "DSTRUCT_REQUIRED_ATTRIBUTE_MISSING",
            StructError::RequiredAttributeInvalid { .. } => "DSTRUCT_REQUIRED_ATTRIBUTE_INVALID",
            StructError::AttributeNotFound { .. } => "DSTRUCT_ATTRIBUTE_NOT_FOUND",
            StructError::InputNotAMapping { .. } => "DSTRUCT_INPUT_NOT_A_MAPPING",
        }
    }

    /// Returns the attribute this error is about, if any
    pub fn attribute(&self) -> Option<&str> {
        match self {
            StructError::RequiredAttributeMissing { attribute, .. }
            | StructError::RequiredAttributeInvalid { attribute, .. }
            | StructError::AttributeNotFound { attribute, .. } => Some(attribute),
            StructError::InputNotAMapping { .. } => None,
        }
    }

    /// Returns the name of the struct type involved
    pub fn struct_name(&self) -> &str {
        match self {
            StructError::RequiredAttributeMissing { struct_name, .. }
            | StructError::RequiredAttributeInvalid { struct_name, .. }
            | StructError::AttributeNotFound { struct_name, .. }
            | StructError::InputNotAMapping { struct_name, .. } => struct_name,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, StructError::RequiredAttributeMissing { .. })
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self, StructError::RequiredAttributeInvalid { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_message() {
        let err = StructError::RequiredAttributeMissing {
            struct_name: "CartesianCoordinate".into(),
            attribute: "y".into(),
        };
        assert_eq!(
            err.to_string(),
            "You need an attribute called `y` when making a CartesianCoordinate"
        );
        assert_eq!(err.code(), "DSTRUCT_REQUIRED_ATTRIBUTE_MISSING");
        assert_eq!(err.attribute(), Some("y"));
        assert!(err.is_missing());
        assert!(!err.is_invalid());
    }

    #[test]
    fn test_invalid_message_includes_value_and_types() {
        let err = StructError::RequiredAttributeInvalid {
            struct_name: "MapLocation".into(),
            attribute: "longitude".into(),
            expected: ValueType::Float,
            value: Value::Int(3),
            actual_type: ValueType::Int,
        };
        let display = err.to_string();
        assert!(display.contains("`longitude`"));
        assert!(display.contains("instance of float"));
        assert!(display.contains("got: 3, which is a int"));
        assert_eq!(err.code(), "DSTRUCT_REQUIRED_ATTRIBUTE_INVALID");
        assert_eq!(err.struct_name(), "MapLocation");
    }

    #[test]
    fn test_input_not_a_mapping_has_no_attribute() {
        let err = StructError::InputNotAMapping {
            struct_name: "DStruct".into(),
            found: "list".into(),
        };
        assert_eq!(err.attribute(), None);
        assert!(err.to_string().contains("expected a mapping"));
    }
}
