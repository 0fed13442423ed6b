//! Observability events for dstruct
//!
//! Events are explicit and typed.

use std::fmt;

/// Observable events in the struct lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Construction
    /// Inputs merged onto a container
    StructLoaded,
    /// Construction finished without an automatic schema check
    SchemaCheckDeferred,

    // Validation
    /// Every requirement satisfied
    SchemaCheckPassed,
    /// A requirement was not met
    SchemaCheckFailed,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::StructLoaded => "STRUCT_LOADED",
            Event::SchemaCheckDeferred => "SCHEMA_CHECK_DEFERRED",
            Event::SchemaCheckPassed => "SCHEMA_CHECK_PASSED",
            Event::SchemaCheckFailed => "SCHEMA_CHECK_FAILED",
        }
    }

    /// Returns true if this event reports a rejected container
    pub fn is_failure(&self) -> bool {
        matches!(self, Event::SchemaCheckFailed)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_names() {
        assert_eq!(Event::StructLoaded.as_str(), "STRUCT_LOADED");
        assert_eq!(Event::SchemaCheckFailed.to_string(), "SCHEMA_CHECK_FAILED");
    }

    #[test]
    fn test_only_failed_check_is_failure() {
        assert!(Event::SchemaCheckFailed.is_failure());
        assert!(!Event::SchemaCheckPassed.is_failure());
        assert!(!Event::SchemaCheckDeferred.is_failure());
        assert!(!Event::StructLoaded.is_failure());
    }
}
