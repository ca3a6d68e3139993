//! Type and field descriptors: the contract between the declaration
//! vocabulary and the resolver core.
//!
//! A domain type enters the mapping layer by supplying a [`TypeDescriptor`]
//! through the [`GraphEntity`] trait. The descriptor carries everything the
//! resolver is allowed to ask about a type: its simple name, its class-level
//! entity markers, and its declared fields. How the descriptor is produced
//! (hand-written, derive macro, codegen) is outside this crate.

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};

use crate::entity::EntityType;

/// A domain type that can describe itself to the mapping layer.
///
/// Implemented by (or generated for) every type that participates in
/// object-to-graph mapping.
pub trait GraphEntity: Sized {
    /// The type's declared descriptor. Must be deterministic: every call
    /// returns an equivalent declaration.
    fn descriptor() -> TypeDescriptor<Self>;
}

/// The declared semantic type of a field.
///
/// Only [`FieldType::String`] qualifies as an identity type; the underlying
/// graph database assigns and matches identifiers as strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    String,
    Bool,
    Int,
    Long,
    Double,
    Date,
    /// Any other declared type, named for diagnostics.
    Other(&'static str),
}

impl FieldType {
    /// True if values of this type are acceptable as graph identifiers.
    pub fn is_string_like(&self) -> bool {
        matches!(self, FieldType::String)
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldType::String => write!(f, "string"),
            FieldType::Bool => write!(f, "bool"),
            FieldType::Int => write!(f, "int"),
            FieldType::Long => write!(f, "long"),
            FieldType::Double => write!(f, "double"),
            FieldType::Date => write!(f, "date"),
            FieldType::Other(name) => write!(f, "{}", name),
        }
    }
}

/// Maps a Rust value type to its declared [`FieldType`].
///
/// Lets field declarations be driven by the field's actual Rust type
/// instead of a hand-picked tag.
pub trait GraphProperty {
    const FIELD_TYPE: FieldType;
}

impl GraphProperty for String {
    const FIELD_TYPE: FieldType = FieldType::String;
}

impl GraphProperty for bool {
    const FIELD_TYPE: FieldType = FieldType::Bool;
}

impl GraphProperty for i32 {
    const FIELD_TYPE: FieldType = FieldType::Int;
}

impl GraphProperty for i64 {
    const FIELD_TYPE: FieldType = FieldType::Long;
}

impl GraphProperty for f64 {
    const FIELD_TYPE: FieldType = FieldType::Double;
}

impl GraphProperty for DateTime<Utc> {
    const FIELD_TYPE: FieldType = FieldType::Date;
}

impl GraphProperty for NaiveDate {
    const FIELD_TYPE: FieldType = FieldType::Date;
}

impl<V: GraphProperty> GraphProperty for Option<V> {
    const FIELD_TYPE: FieldType = V::FIELD_TYPE;
}

/// A class-level entity marker: the vertex/edge/graph designation plus its
/// optional label attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityMarker {
    kind: EntityType,
    label: Option<String>,
}

impl EntityMarker {
    /// Declares the type as a vertex.
    pub fn vertex() -> Self {
        Self {
            kind: EntityType::Vertex,
            label: None,
        }
    }

    /// Declares the type as an edge.
    pub fn edge() -> Self {
        Self {
            kind: EntityType::Edge,
            label: None,
        }
    }

    /// Declares the type as a whole-graph entity.
    pub fn graph() -> Self {
        Self {
            kind: EntityType::Graph,
            label: None,
        }
    }

    /// Sets the marker's label attribute.
    ///
    /// When absent on a vertex or edge marker, the label defaults to the
    /// descriptor's type name during resolution. Graph entities never carry
    /// a label regardless of this attribute.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// The entity designation this marker declares.
    pub fn kind(&self) -> EntityType {
        self.kind
    }

    /// The declared label attribute, if any.
    pub fn label_attr(&self) -> Option<&str> {
        self.label.as_deref()
    }
}

/// Get/set capability over one field of instances of `T`.
///
/// Constructed once by the declaration vocabulary and closed over the field
/// it accesses; the resolver never inspects instances any other way.
pub struct FieldAccessor<T> {
    get: Arc<dyn Fn(&T) -> Option<String> + Send + Sync>,
    set: Arc<dyn Fn(&mut T, String) + Send + Sync>,
}

impl<T> FieldAccessor<T> {
    /// Creates an accessor from get/set closures.
    pub fn new<G, S>(get: G, set: S) -> Self
    where
        G: Fn(&T) -> Option<String> + Send + Sync + 'static,
        S: Fn(&mut T, String) + Send + Sync + 'static,
    {
        Self {
            get: Arc::new(get),
            set: Arc::new(set),
        }
    }

    /// Reads the field's current value from an instance.
    pub fn get(&self, instance: &T) -> Option<String> {
        (self.get)(instance)
    }

    /// Writes a value to the field on an instance.
    pub fn set(&self, instance: &mut T, value: String) {
        (self.set)(instance, value)
    }
}

// Manual impls: the closures are shared, `T` itself need not be Clone.
impl<T> Clone for FieldAccessor<T> {
    fn clone(&self) -> Self {
        Self {
            get: Arc::clone(&self.get),
            set: Arc::clone(&self.set),
        }
    }
}

impl<T> fmt::Debug for FieldAccessor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldAccessor").finish_non_exhaustive()
    }
}

/// One declared field of a domain type.
#[derive(Debug, Clone)]
pub struct FieldDescriptor<T> {
    name: String,
    field_type: FieldType,
    id_marker: bool,
    accessor: Option<FieldAccessor<T>>,
}

impl<T> FieldDescriptor<T> {
    /// Declares a field whose Rust value type determines its [`FieldType`].
    pub fn new<V: GraphProperty>(name: impl Into<String>) -> Self {
        Self::with_type(name, V::FIELD_TYPE)
    }

    /// Declares a field with an explicit [`FieldType`], for value types
    /// outside the [`GraphProperty`] impls.
    pub fn with_type(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            field_type,
            id_marker: false,
            accessor: None,
        }
    }

    /// Marks this field as the type's identity field.
    pub fn id(mut self) -> Self {
        self.id_marker = true;
        self
    }

    /// Attaches the get/set capability for this field.
    pub fn accessor<G, S>(mut self, get: G, set: S) -> Self
    where
        G: Fn(&T) -> Option<String> + Send + Sync + 'static,
        S: Fn(&mut T, String) + Send + Sync + 'static,
    {
        self.accessor = Some(FieldAccessor::new(get, set));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn field_type(&self) -> FieldType {
        self.field_type
    }

    /// True if the field carries the identity marker.
    pub fn is_id(&self) -> bool {
        self.id_marker
    }

    /// A shared handle to the field's accessor, if one was declared.
    pub fn accessor_handle(&self) -> Option<FieldAccessor<T>> {
        self.accessor.clone()
    }
}

/// Everything the declaration vocabulary states about a domain type.
#[derive(Debug, Clone)]
pub struct TypeDescriptor<T> {
    type_name: &'static str,
    markers: Vec<EntityMarker>,
    fields: Vec<FieldDescriptor<T>>,
}

impl<T> TypeDescriptor<T> {
    /// Starts a descriptor for a type with the given simple name.
    pub fn new(type_name: &'static str) -> Self {
        Self {
            type_name,
            markers: Vec::new(),
            fields: Vec::new(),
        }
    }

    /// Adds a class-level entity marker.
    pub fn marker(mut self, marker: EntityMarker) -> Self {
        self.markers.push(marker);
        self
    }

    /// Adds a field declaration.
    pub fn field(mut self, field: FieldDescriptor<T>) -> Self {
        self.fields.push(field);
        self
    }

    /// The type's simple name, used in diagnostics and as the default label.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn markers(&self) -> &[EntityMarker] {
        &self.markers
    }

    pub fn fields(&self) -> &[FieldDescriptor<T>] {
        &self.fields
    }
}
