//! dstruct - Dynamic attribute structs with declarative required-attribute schemas
//!
//! A struct type declares which attributes its instances must carry and,
//! optionally, what type each must be. Declarations are inherited through
//! the type's ancestry and checked when a container is built.

pub mod dstruct;
pub mod observability;
pub mod schema;
pub mod util;
pub mod value;

pub use dstruct::{DStruct, Fields, StructConfig, StructError, StructResult, StructType};
pub use schema::{DefaultCompatibility, RequiredAttribute, Schema, TypeCompatibility};
pub use value::{Class, Object, Value, ValueType};
