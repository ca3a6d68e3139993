//! The entity information façade: resolved, immutable mapping metadata for
//! one domain type.

use std::fmt;

use tracing::debug;

use crate::descriptor::{FieldType, GraphEntity};
use crate::entity::{classify, EntityType};
use crate::error::MappingError;
use crate::identity::{resolve_id, IdField};
use crate::label::resolve_label;
use crate::source::Source;

/// Resolved mapping metadata for a domain type `T`.
///
/// Construction runs the whole resolution pipeline and fails fast on the
/// first declaration violation; a failed construction never produces a
/// reachable instance. Once built, the metadata is immutable and all
/// accessors are pure reads, so values can be shared freely across threads
/// for the lifetime of the process.
pub struct EntityInformation<T: GraphEntity> {
    type_name: &'static str,
    entity_type: EntityType,
    label: Option<String>,
    id_field: IdField<T>,
    source: Source,
}

impl<T: GraphEntity> EntityInformation<T> {
    /// Resolves the metadata for `T` from its declared descriptor.
    ///
    /// Classification, identity resolution, label derivation, and source
    /// construction run in order; any failure short-circuits and names the
    /// offending type.
    pub fn new() -> Result<Self, MappingError> {
        let descriptor = T::descriptor();
        let marker = classify(&descriptor)?;
        let id_field = resolve_id(&descriptor)?;
        let label = resolve_label(&descriptor, marker);
        let source = Source::build(&descriptor, marker);

        debug!(
            entity = descriptor.type_name(),
            entity_type = ?marker.kind(),
            label = label.as_deref(),
            id_field = id_field.name(),
            "resolved entity metadata"
        );

        Ok(Self {
            type_name: descriptor.type_name(),
            entity_type: marker.kind(),
            label,
            id_field,
            source,
        })
    }

    /// The domain type's simple name, as declared.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// The graph element this type maps to.
    pub fn entity_type(&self) -> EntityType {
        self.entity_type
    }

    /// The resolved schema label. `Some` exactly for vertex and edge types.
    pub fn entity_label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// The identity capability for instances of `T`.
    pub fn id_field(&self) -> &IdField<T> {
        &self.id_field
    }

    /// Reads the current identifier off an instance.
    pub fn id(&self, instance: &T) -> Option<String> {
        self.id_field.get(instance)
    }

    /// The identity field's semantic type. Always string-like.
    pub fn id_type(&self) -> FieldType {
        self.id_field.field_type()
    }

    /// The source shape the conversion layer populates for this type.
    /// Its variant always matches [`entity_type`](Self::entity_type).
    pub fn source(&self) -> &Source {
        &self.source
    }
}

// Manual impl: metadata is printable whether or not `T` is.
impl<T: GraphEntity> fmt::Debug for EntityInformation<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntityInformation")
            .field("type_name", &self.type_name)
            .field("entity_type", &self.entity_type)
            .field("label", &self.label)
            .field("id_field", &self.id_field)
            .finish()
    }
}
