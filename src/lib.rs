//! gremlin-ogm - Entity metadata resolution for object-to-graph mapping
//!
//! Turns unconstrained domain types into a constrained, type-safe graph
//! schema: each mapped type classifies as a vertex, edge, or whole-graph
//! entity, carries exactly one string-typed identity field, and resolves
//! to an immutable metadata bundle the repository and conversion layers
//! read from. Declaration violations fail fast at resolution time with an
//! error naming the offending type.

pub mod cache;
pub mod descriptor;
pub mod entity;
pub mod error;
pub mod identity;
pub mod information;
pub mod source;

mod label;

pub use cache::{entity_information, EntityInformationCache};
pub use descriptor::{
    EntityMarker, FieldAccessor, FieldDescriptor, FieldType, GraphEntity, GraphProperty,
    TypeDescriptor,
};
pub use entity::EntityType;
pub use error::MappingError;
pub use identity::IdField;
pub use information::EntityInformation;
pub use source::{EdgeSource, GraphSource, Source, VertexSource};
