//! Required-attribute schemas for struct types
//!
//! Schemas are declared per struct type and aggregated across the type's
//! ancestry. They describe what a container must hold, never what it may
//! not hold.
//!
//! # Design Principles
//!
//! - Declarations live on the type, never on the instance
//! - Marker-style and literal-style declarations are equivalent
//! - Deterministic aggregation order
//! - No coercion, only "is an instance of" checks

mod collector;
mod compat;
mod types;

pub use collector::collect_required_attributes;
pub use compat::{accepted_types, DefaultCompatibility, TypeCompatibility};
pub use types::{RequiredAttribute, Schema};
