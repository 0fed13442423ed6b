//! Struct containers and struct types
//!
//! A struct is a dynamic attribute container populated from a mapping
//! and/or named entries. Its type may declare required attributes, with
//! optional type constraints, that are checked at construction time or
//! later on request.
//!
//! # Usage
//!
//! ```ignore
//! use dstruct::{fields, DStruct, StructType, ValueType};
//!
//! let point = StructType::builder("CartesianCoordinate")
//!     .require_present("x")
//!     .require_present("y")
//!     .build();
//!
//! let origin = DStruct::with_entries(&point, fields! {"x" => 0, "y" => 0})?;
//! assert!(DStruct::with_entries(&point, fields! {"x" => 3}).is_err());
//! ```

mod config;
mod container;
mod errors;
mod struct_type;

pub use config::StructConfig;
pub use container::{DStruct, Fields};
pub use errors::{StructError, StructResult};
pub use struct_type::{StructType, StructTypeBuilder, BASE_TYPE_NAME};
