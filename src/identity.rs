//! Identity field resolution.
//!
//! Every mapped type must declare exactly one string-typed identity field.
//! The database assigns identifiers on first persistence, so the resolved
//! capability can both read and write the field.

use std::fmt;

use crate::descriptor::{FieldAccessor, FieldType, TypeDescriptor};
use crate::error::MappingError;

/// The resolved identity capability for instances of `T`.
///
/// Produced once per domain type; reading and writing through it is the only
/// way the mapping layer touches an instance's identifier.
pub struct IdField<T> {
    name: String,
    field_type: FieldType,
    accessor: FieldAccessor<T>,
}

impl<T> IdField<T> {
    /// The declared name of the identity field.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The identity field's semantic type. Always string-like.
    pub fn field_type(&self) -> FieldType {
        self.field_type
    }

    /// Reads the current identifier off an instance. `None` until the
    /// database has assigned one (or the caller has set one).
    pub fn get(&self, instance: &T) -> Option<String> {
        self.accessor.get(instance)
    }

    /// Writes a database-assigned identifier onto an instance.
    pub fn set(&self, instance: &mut T, id: String) {
        self.accessor.set(instance, id)
    }
}

// Manual impls: the capability is shareable whether or not `T` is.
impl<T> Clone for IdField<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            field_type: self.field_type,
            accessor: self.accessor.clone(),
        }
    }
}

impl<T> fmt::Debug for IdField<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IdField")
            .field("name", &self.name)
            .field("field_type", &self.field_type)
            .finish_non_exhaustive()
    }
}

/// Selects and validates the single identity field of a domain type.
///
/// Deterministic and pure: the same descriptor always yields the same
/// capability or the same failure. No precedence rule exists for multiple
/// id markers; ambiguity is always rejected.
pub(crate) fn resolve_id<T>(descriptor: &TypeDescriptor<T>) -> Result<IdField<T>, MappingError> {
    let type_name = descriptor.type_name();
    let id_fields: Vec<_> = descriptor.fields().iter().filter(|f| f.is_id()).collect();

    let field = match id_fields.as_slice() {
        [field] => *field,
        [] => return Err(MappingError::MissingIdField { type_name }),
        fields => {
            return Err(MappingError::MultipleIdFields {
                type_name,
                count: fields.len(),
            })
        }
    };

    if !field.field_type().is_string_like() {
        return Err(MappingError::UnsupportedIdType {
            type_name,
            field: field.name().to_string(),
            found: field.field_type(),
        });
    }

    let accessor = field
        .accessor_handle()
        .ok_or_else(|| MappingError::InaccessibleIdField {
            type_name,
            field: field.name().to_string(),
        })?;

    Ok(IdField {
        name: field.name().to_string(),
        field_type: field.field_type(),
        accessor,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::{EntityMarker, FieldDescriptor};
    use chrono::{DateTime, Utc};

    struct Sample {
        id: Option<String>,
        name: String,
    }

    fn id_field() -> FieldDescriptor<Sample> {
        FieldDescriptor::new::<Option<String>>("id")
            .id()
            .accessor(|s: &Sample| s.id.clone(), |s, v| s.id = Some(v))
    }

    fn base() -> TypeDescriptor<Sample> {
        TypeDescriptor::new("Sample").marker(EntityMarker::vertex())
    }

    #[test]
    fn test_resolve_single_string_id() {
        let descriptor = base()
            .field(id_field())
            .field(FieldDescriptor::new::<String>("name"));

        let id = resolve_id(&descriptor).unwrap();
        assert_eq!(id.name(), "id");
        assert_eq!(id.field_type(), FieldType::String);

        let mut sample = Sample {
            id: None,
            name: "n".to_string(),
        };
        id.set(&mut sample, "s-1".to_string());
        assert_eq!(id.get(&sample), Some("s-1".to_string()));
    }

    #[test]
    fn test_no_id_field_fails() {
        let descriptor = base().field(FieldDescriptor::new::<String>("name"));
        let err = resolve_id(&descriptor).unwrap_err();
        assert_eq!(err, MappingError::MissingIdField { type_name: "Sample" });
    }

    #[test]
    fn test_multiple_id_fields_fail() {
        let descriptor = base()
            .field(id_field())
            .field(
                FieldDescriptor::new::<String>("name")
                    .id()
                    .accessor(|s: &Sample| Some(s.name.clone()), |s, v| s.name = v),
            );
        let err = resolve_id(&descriptor).unwrap_err();
        assert_eq!(
            err,
            MappingError::MultipleIdFields {
                type_name: "Sample",
                count: 2,
            }
        );
    }

    #[test]
    fn test_non_string_id_fails() {
        let descriptor = base().field(FieldDescriptor::new::<DateTime<Utc>>("stamp").id());
        let err = resolve_id(&descriptor).unwrap_err();
        assert_eq!(
            err,
            MappingError::UnsupportedIdType {
                type_name: "Sample",
                field: "stamp".to_string(),
                found: FieldType::Date,
            }
        );
    }

    #[test]
    fn test_string_id_without_accessor_fails() {
        let descriptor = base().field(FieldDescriptor::new::<String>("id").id());
        let err = resolve_id(&descriptor).unwrap_err();
        assert_eq!(
            err,
            MappingError::InaccessibleIdField {
                type_name: "Sample",
                field: "id".to_string(),
            }
        );
    }
}
