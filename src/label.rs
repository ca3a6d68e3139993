//! Label derivation for vertex and edge types.

use crate::descriptor::{EntityMarker, TypeDescriptor};
use crate::entity::EntityType;

/// The label for a vertex or edge marker: the declared label attribute,
/// or the type's simple name when none was declared. This is the single
/// place the default-label policy lives.
pub(crate) fn element_label<T>(descriptor: &TypeDescriptor<T>, marker: &EntityMarker) -> String {
    marker
        .label_attr()
        .unwrap_or(descriptor.type_name())
        .to_string()
}

/// Derives the schema label for a classified domain type.
///
/// Vertices and edges always have a label (declared or defaulted).
/// Whole-graph entities never do: labels only exist on vertices and edges
/// in the graph model.
pub(crate) fn resolve_label<T>(
    descriptor: &TypeDescriptor<T>,
    marker: &EntityMarker,
) -> Option<String> {
    match marker.kind() {
        EntityType::Graph => None,
        EntityType::Vertex | EntityType::Edge => Some(element_label(descriptor, marker)),
    }
}
