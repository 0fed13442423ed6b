//! Observability for dstruct
//!
//! Lifecycle events are emitted through `tracing` under the `dstruct`
//! target, one function per [`Event`], with the event name and its
//! details recorded as structured fields. The library never installs a
//! subscriber; applications choose where events go.
//!
//! # Principles
//!
//! 1. Observability is read-only
//! 2. No side effects on construction or validation
//! 3. Failures log at DEBUG (the error is returned to the caller), all
//!    other events at TRACE
//!
//! # Usage
//!
//! ```ignore
//! use dstruct::observability;
//!
//! observability::schema_check_passed("MapLocation");
//! ```

mod events;

pub use events::Event;

const TARGET: &str = "dstruct";

/// A container of `struct_type` finished loading `fields` entries
pub fn struct_loaded(struct_type: &str, fields: usize) {
    tracing::trace!(
        target: TARGET,
        event = Event::StructLoaded.as_str(),
        struct_type,
        fields
    );
}

/// Construction skipped the automatic schema check
pub fn schema_check_deferred(struct_type: &str) {
    tracing::trace!(
        target: TARGET,
        event = Event::SchemaCheckDeferred.as_str(),
        struct_type
    );
}

pub fn schema_check_passed(struct_type: &str) {
    tracing::trace!(
        target: TARGET,
        event = Event::SchemaCheckPassed.as_str(),
        struct_type
    );
}

/// A schema check stopped at its first violation
pub fn schema_check_failed(struct_type: &str, code: &str, attribute: Option<&str>) {
    tracing::debug!(
        target: TARGET,
        event = Event::SchemaCheckFailed.as_str(),
        struct_type,
        code,
        attribute
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_events_without_subscriber() {
        // This just verifies no panic without a subscriber
        struct_loaded("Point", 2);
        schema_check_deferred("Point");
        schema_check_passed("Point");
        schema_check_failed("Point", "REQUIRED_ATTRIBUTE_MISSING", Some("x"));
        schema_check_failed("Point", "REQUIRED_ATTRIBUTE_MISSING", None);
    }
}
