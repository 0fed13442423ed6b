//! Struct type configuration
//!
//! Options are recognised per struct type. A type that leaves an option
//! unset inherits it from the nearest ancestor that sets it.

use serde::Deserialize;

/// Construction behaviour for a struct type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StructConfig {
    /// Whether construction ends with an automatic schema check.
    pub validate_on_construction: bool,
}

impl Default for StructConfig {
    fn default() -> Self {
        Self {
            validate_on_construction: true,
        }
    }
}

impl StructConfig {
    /// Validate as the last step of construction.
    pub fn eager() -> Self {
        Self::default()
    }

    /// Leave validation to an explicit later call.
    pub fn deferred() -> Self {
        Self {
            validate_on_construction: false,
        }
    }
}
