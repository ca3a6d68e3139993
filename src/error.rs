//! Mapping errors raised during entity metadata resolution.

use thiserror::Error;

use crate::descriptor::FieldType;

/// Configuration-time errors for the object-to-graph mapping layer.
///
/// All variants are raised while resolving a domain type's metadata, never
/// afterwards. A type that fails resolution is not usable until its
/// declaration is fixed; callers (typically repository wiring at startup)
/// must surface these unmodified.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MappingError {
    // Entity type classification errors
    #[error("unexpected entity type for `{type_name}`: no vertex, edge, or graph marker declared")]
    MissingEntityMarker { type_name: &'static str },

    #[error("unexpected entity type for `{type_name}`: {count} conflicting entity markers declared")]
    ConflictingEntityMarkers { type_name: &'static str, count: usize },

    // Identity field errors
    #[error("invalid identity field for `{type_name}`: no field carries the id marker")]
    MissingIdField { type_name: &'static str },

    #[error("invalid identity field for `{type_name}`: {count} fields carry the id marker")]
    MultipleIdFields { type_name: &'static str, count: usize },

    #[error("invalid identity field `{field}` for `{type_name}`: {found} is not string-like (graph identifiers are strings)")]
    UnsupportedIdType {
        type_name: &'static str,
        field: String,
        found: FieldType,
    },

    #[error("invalid identity field `{field}` for `{type_name}`: declaration supplies no accessor")]
    InaccessibleIdField {
        type_name: &'static str,
        field: String,
    },
}

impl MappingError {
    /// True for the classification error kind (no or conflicting markers).
    pub fn is_unexpected_entity_type(&self) -> bool {
        matches!(
            self,
            MappingError::MissingEntityMarker { .. } | MappingError::ConflictingEntityMarkers { .. }
        )
    }

    /// True for the identity field error kind (missing, duplicated,
    /// non-string, or inaccessible id declaration).
    pub fn is_invalid_id_field(&self) -> bool {
        matches!(
            self,
            MappingError::MissingIdField { .. }
                | MappingError::MultipleIdFields { .. }
                | MappingError::UnsupportedIdType { .. }
                | MappingError::InaccessibleIdField { .. }
        )
    }

    /// The domain type the error was raised for.
    pub fn type_name(&self) -> &'static str {
        match self {
            MappingError::MissingEntityMarker { type_name }
            | MappingError::ConflictingEntityMarkers { type_name, .. }
            | MappingError::MissingIdField { type_name }
            | MappingError::MultipleIdFields { type_name, .. }
            | MappingError::UnsupportedIdType { type_name, .. }
            | MappingError::InaccessibleIdField { type_name, .. } => type_name,
        }
    }
}
