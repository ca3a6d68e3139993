//! Entity classification: which graph element a domain type represents.

use serde::{Deserialize, Serialize};

use crate::descriptor::{EntityMarker, TypeDescriptor};
use crate::error::MappingError;

/// The graph element a domain type maps to.
///
/// Exactly one per type, derived from its class-level markers. There is no
/// default: a type that does not classify is a configuration error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityType {
    Vertex,
    Edge,
    Graph,
}

/// Classifies a domain type from its class-level markers.
///
/// Returns the single declared marker so the caller can also read its label
/// attribute. Zero markers and conflicting markers both fail: classification
/// must be total and unambiguous.
pub(crate) fn classify<'d, T>(
    descriptor: &'d TypeDescriptor<T>,
) -> Result<&'d EntityMarker, MappingError> {
    match descriptor.markers() {
        [marker] => Ok(marker),
        [] => Err(MappingError::MissingEntityMarker {
            type_name: descriptor.type_name(),
        }),
        markers => Err(MappingError::ConflictingEntityMarkers {
            type_name: descriptor.type_name(),
            count: markers.len(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::EntityMarker;

    struct Unmarked;

    #[test]
    fn test_classify_single_marker() {
        let descriptor = TypeDescriptor::<Unmarked>::new("Network").marker(EntityMarker::graph());
        let marker = classify(&descriptor).unwrap();
        assert_eq!(marker.kind(), EntityType::Graph);
    }

    #[test]
    fn test_classify_no_marker_fails() {
        let descriptor = TypeDescriptor::<Unmarked>::new("Plain");
        let err = classify(&descriptor).unwrap_err();
        assert_eq!(err, MappingError::MissingEntityMarker { type_name: "Plain" });
    }

    #[test]
    fn test_classify_conflicting_markers_fail() {
        let descriptor = TypeDescriptor::<Unmarked>::new("Confused")
            .marker(EntityMarker::vertex())
            .marker(EntityMarker::edge());
        let err = classify(&descriptor).unwrap_err();
        assert_eq!(
            err,
            MappingError::ConflictingEntityMarkers {
                type_name: "Confused",
                count: 2,
            }
        );
    }
}
