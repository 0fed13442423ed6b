//! Type compatibility policies
//!
//! A policy names the extra types that count as acceptable substitutes for
//! an expected type. Matching is still "is an instance of", so subclasses
//! of an extra type are accepted too.

use crate::value::ValueType;

/// Pluggable "which other types are acceptable" predicate.
///
/// Struct types may supply their own implementation. Closures of the form
/// `Fn(&ValueType) -> Vec<ValueType>` implement this trait.
pub trait TypeCompatibility: Send + Sync {
    /// Returns additional types accepted in place of `expected`, in order.
    fn extra_allowed_types(&self, expected: &ValueType) -> Vec<ValueType>;
}

/// Treats modern text and legacy byte strings as interchangeable. Every
/// other type gets no extras.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultCompatibility;

impl TypeCompatibility for DefaultCompatibility {
    fn extra_allowed_types(&self, expected: &ValueType) -> Vec<ValueType> {
        match expected {
            ValueType::Str => vec![ValueType::Bytes],
            ValueType::Bytes => vec![ValueType::Str],
            _ => Vec::new(),
        }
    }
}

impl<F> TypeCompatibility for F
where
    F: Fn(&ValueType) -> Vec<ValueType> + Send + Sync,
{
    fn extra_allowed_types(&self, expected: &ValueType) -> Vec<ValueType> {
        self(expected)
    }
}

/// Returns `{expected} ∪ policy.extra_allowed_types(expected)`, expected first.
pub fn accepted_types(policy: &dyn TypeCompatibility, expected: &ValueType) -> Vec<ValueType> {
    let mut accepted = vec![expected.clone()];
    accepted.extend(policy.extra_allowed_types(expected));
    accepted
}
