//! Struct type descriptors
//!
//! A [`StructType`] is the type-level half of a struct: its name, its
//! parents, the required attributes it declares itself, and the options
//! and compatibility policy it supplies. Instances of a type are
//! [`DStruct`](super::DStruct) containers.

use std::fmt;
use std::sync::{Arc, OnceLock};

use super::config::StructConfig;
use crate::schema::{
    collect_required_attributes, DefaultCompatibility, RequiredAttribute, Schema,
    TypeCompatibility,
};
use crate::util::dedupe_keep_last_by_key;
use crate::value::ValueType;

/// Name of the root struct type every other type derives from
pub const BASE_TYPE_NAME: &str = "DStruct";

static DEFAULT_COMPATIBILITY: DefaultCompatibility = DefaultCompatibility;

/// A struct type: declarations, options and ancestry.
///
/// Identity is by allocation. Types are immutable once built and shared
/// through `Arc`.
pub struct StructType {
    name: String,
    parents: Vec<Arc<StructType>>,
    declared: Vec<RequiredAttribute>,
    compatibility: Option<Arc<dyn TypeCompatibility>>,
    config: Option<StructConfig>,
    schema: OnceLock<Schema>,
    resolved_config: OnceLock<StructConfig>,
    resolved_compatibility: OnceLock<Option<Arc<dyn TypeCompatibility>>>,
}

impl StructType {
    /// Start declaring a new struct type
    pub fn builder(name: impl Into<String>) -> StructTypeBuilder {
        StructTypeBuilder::new(name)
    }

    /// The root struct type. It declares nothing and sets no options, so
    /// it validates on construction by default.
    pub fn base() -> Arc<StructType> {
        static BASE: OnceLock<Arc<StructType>> = OnceLock::new();
        Arc::clone(BASE.get_or_init(|| {
            Arc::new(StructType {
                name: BASE_TYPE_NAME.to_string(),
                parents: Vec::new(),
                declared: Vec::new(),
                compatibility: None,
                config: None,
                schema: OnceLock::new(),
                resolved_config: OnceLock::new(),
                resolved_compatibility: OnceLock::new(),
            })
        }))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Direct parents in declaration order
    pub fn parents(&self) -> &[Arc<StructType>] {
        &self.parents
    }

    /// Required attributes declared on this type itself, not inherited
    pub fn declared_attributes(&self) -> &[RequiredAttribute] {
        &self.declared
    }

    /// This type followed by every ancestor. Every type comes before all of
    /// its own ancestors, and parents keep their declaration order.
    ///
    /// The walk is depth-first; a type reachable along several paths keeps
    /// only its last position, so a shared base lands after every type
    /// deriving from it.
    pub fn ancestors(&self) -> Vec<&StructType> {
        let mut walked = Vec::new();
        self.walk(&mut walked);
        dedupe_keep_last_by_key(walked, |ty| *ty as *const StructType)
    }

    fn walk<'a>(&'a self, out: &mut Vec<&'a StructType>) {
        out.push(self);
        for parent in &self.parents {
            parent.walk(out);
        }
    }

    /// Returns true if `self` is `other` or derives from it
    pub fn is_subtype_of(&self, other: &StructType) -> bool {
        std::ptr::eq(self, other) || self.parents.iter().any(|p| p.is_subtype_of(other))
    }

    /// Every required attribute declared on this type or its ancestors.
    ///
    /// Computed on first use and cached for the life of the type.
    pub fn required_attributes(&self) -> &Schema {
        self.schema.get_or_init(|| collect_required_attributes(self))
    }

    /// The compatibility policy in effect: this type's own, else the first
    /// one found in [`ancestors`](Self::ancestors) order, else
    /// [`DefaultCompatibility`]. Resolved once per type.
    pub fn compatibility(&self) -> &dyn TypeCompatibility {
        self.resolved_compatibility
            .get_or_init(|| {
                self.ancestors()
                    .into_iter()
                    .find_map(|ty| ty.compatibility.clone())
            })
            .as_deref()
            .unwrap_or(&DEFAULT_COMPATIBILITY)
    }

    /// Additional types accepted in place of `expected` for this type
    pub fn extra_allowed_types(&self, expected: &ValueType) -> Vec<ValueType> {
        self.compatibility().extra_allowed_types(expected)
    }

    /// The configuration in effect: the first one set in
    /// [`ancestors`](Self::ancestors) order, else the default. Resolved once
    /// per type.
    pub fn config(&self) -> StructConfig {
        *self.resolved_config.get_or_init(|| {
            self.ancestors()
                .into_iter()
                .find_map(|ty| ty.config)
                .unwrap_or_default()
        })
    }

    pub fn validate_on_construction(&self) -> bool {
        self.config().validate_on_construction
    }
}

impl PartialEq for StructType {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other)
    }
}

impl fmt::Debug for StructType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StructType")
            .field("name", &self.name)
            .field(
                "parents",
                &self.parents.iter().map(|p| p.name()).collect::<Vec<_>>(),
            )
            .field("declared", &self.declared)
            .field("has_compatibility", &self.compatibility.is_some())
            .field("config", &self.config)
            .finish()
    }
}

impl fmt::Display for StructType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Builder for [`StructType`].
///
/// ```ignore
/// let location = StructType::builder("MapLocation")
///     .require("latitude", ValueType::Float)
///     .require("longitude", ValueType::Float)
///     .require("label", ValueType::Object(base_label))
///     .build();
/// ```
pub struct StructTypeBuilder {
    name: String,
    parents: Vec<Arc<StructType>>,
    declared: Vec<RequiredAttribute>,
    compatibility: Option<Arc<dyn TypeCompatibility>>,
    config: Option<StructConfig>,
}

impl StructTypeBuilder {
    fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parents: Vec::new(),
            declared: Vec::new(),
            compatibility: None,
            config: None,
        }
    }

    /// Add a parent type. Call repeatedly for multiple inheritance; order
    /// of calls is declaration order. Without any parent the type derives
    /// from [`StructType::base`].
    pub fn extends(mut self, parent: &Arc<StructType>) -> Self {
        self.parents.push(Arc::clone(parent));
        self
    }

    /// Declare `name` required and constrained to `ty`
    pub fn require(self, name: impl Into<String>, ty: ValueType) -> Self {
        self.required_attribute(RequiredAttribute::typed(name, ty))
    }

    /// Declare `name` required with no type constraint
    pub fn require_present(self, name: impl Into<String>) -> Self {
        self.required_attribute(RequiredAttribute::new(name))
    }

    /// Declare a required attribute. Redeclaring a name on the same type
    /// replaces the earlier declaration in place.
    pub fn required_attribute(mut self, attr: RequiredAttribute) -> Self {
        match self.declared.iter_mut().find(|d| d.name == attr.name) {
            Some(existing) => *existing = attr,
            None => self.declared.push(attr),
        }
        self
    }

    /// Declare this type's requirements as a literal `name -> type` map.
    /// Equivalent to one `required_attribute` call per entry, in order.
    pub fn required_attributes<I, K>(self, literal: I) -> Self
    where
        I: IntoIterator<Item = (K, Option<ValueType>)>,
        K: Into<String>,
    {
        literal.into_iter().fold(self, |builder, (name, ty)| {
            builder.required_attribute(RequiredAttribute {
                name: name.into(),
                required_type: ty,
            })
        })
    }

    /// Supply this type's compatibility policy. Subtypes inherit it unless
    /// they supply their own.
    pub fn compatibility(mut self, policy: impl TypeCompatibility + 'static) -> Self {
        self.compatibility = Some(Arc::new(policy));
        self
    }

    pub fn config(mut self, config: StructConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn validate_on_construction(self, enabled: bool) -> Self {
        self.config(StructConfig {
            validate_on_construction: enabled,
        })
    }

    pub fn build(self) -> Arc<StructType> {
        let parents = if self.parents.is_empty() {
            vec![StructType::base()]
        } else {
            self.parents
        };

        Arc::new(StructType {
            name: self.name,
            parents,
            declared: self.declared,
            compatibility: self.compatibility,
            config: self.config,
            schema: OnceLock::new(),
            resolved_config: OnceLock::new(),
            resolved_compatibility: OnceLock::new(),
        })
    }
}
