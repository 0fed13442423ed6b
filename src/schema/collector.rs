//! Schema collection across a struct type's ancestry
//!
//! Collection semantics:
//! - Ancestors are visited in [`StructType::ancestors`] order: the type
//!   itself first, every type before its own ancestors, parents in
//!   declaration order
//! - A base shared by several inheritance paths is visited once, after
//!   every type that derives from it
//! - The first declaration of a name that is visited wins, so the
//!   most-derived declaration decides the expected type
//! - A type with no declarations anywhere yields an empty schema

use super::types::Schema;
use crate::dstruct::StructType;

/// Collects every required attribute declared on `struct_type` or any of
/// its ancestors.
pub fn collect_required_attributes(struct_type: &StructType) -> Schema {
    let mut schema = Schema::new();

    for ancestor in struct_type.ancestors() {
        for attr in ancestor.declared_attributes() {
            schema.insert_if_absent(&attr.name, attr.required_type.clone());
        }
    }

    schema
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::ValueType;

    #[test]
    fn test_root_type_has_empty_schema() {
        let schema = collect_required_attributes(&StructType::base());
        assert!(schema.is_empty());
    }

    #[test]
    fn test_own_declarations_in_order() {
        let ty = StructType::builder("MapLocation")
            .require("latitude", ValueType::Float)
            .require("longitude", ValueType::Float)
            .require_present("label")
            .build();

        let schema = collect_required_attributes(&ty);
        let entries: Vec<_> = schema.iter().collect();
        assert_eq!(
            entries,
            vec![
                ("latitude", Some(&ValueType::Float)),
                ("longitude", Some(&ValueType::Float)),
                ("label", None),
            ]
        );
    }

    #[test]
    fn test_inherits_parent_declarations() {
        let point = StructType::builder("Point")
            .require_present("x")
            .require_present("y")
            .build();
        let point3 = StructType::builder("Point3")
            .extends(&point)
            .require_present("z")
            .build();

        let names: Vec<_> = collect_required_attributes(&point3)
            .names()
            .map(str::to_string)
            .collect();
        assert_eq!(names, vec!["z", "x", "y"]);
    }

    #[test]
    fn test_most_derived_declaration_wins() {
        let base = StructType::builder("Measurement")
            .require("value", ValueType::Float)
            .build();
        let counter = StructType::builder("Counter")
            .extends(&base)
            .require("value", ValueType::Int)
            .build();

        let schema = collect_required_attributes(&counter);
        assert_eq!(schema.get("value"), Some(Some(&ValueType::Int)));
        assert_eq!(schema.len(), 1);

        // The parent's own view is unaffected
        let schema = collect_required_attributes(&base);
        assert_eq!(schema.get("value"), Some(Some(&ValueType::Float)));
    }

    #[test]
    fn test_diamond_prefers_derived_declaration_over_shared_base() {
        let shared = StructType::builder("Shared")
            .require_present("id")
            .build();
        let left = StructType::builder("Left")
            .extends(&shared)
            .require_present("left")
            .build();
        let right = StructType::builder("Right")
            .extends(&shared)
            .require("id", ValueType::Int)
            .build();
        let both = StructType::builder("Both")
            .extends(&left)
            .extends(&right)
            .build();

        let names: Vec<_> = both.ancestors().iter().map(|t| t.name().to_string()).collect();
        assert_eq!(names, vec!["Both", "Left", "Right", "Shared", "DStruct"]);

        // Right derives from Shared, so its typed id shadows Shared's
        let schema = collect_required_attributes(&both);
        assert_eq!(schema.get("id"), Some(Some(&ValueType::Int)));
        let order: Vec<_> = schema.names().collect();
        assert_eq!(order, vec!["left", "id"]);
    }
}
