//! Graph source shapes: the intermediate representation handed to the
//! conversion layer.
//!
//! A source is built once during metadata resolution, stamped with the
//! resolved entity type and label, and later populated/read by the
//! conversion layer when instances move to and from the database. Property
//! bags are JSON maps, the conversion currency of the wire format.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::descriptor::{EntityMarker, TypeDescriptor};
use crate::entity::EntityType;
use crate::label::element_label;

/// The entity-type-tagged source shape.
///
/// The variant always matches the entity type the domain type classified
/// to; vertex and edge shapes carry a label structurally, graph shapes
/// structurally cannot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Source {
    Vertex(VertexSource),
    Edge(EdgeSource),
    Graph(GraphSource),
}

impl Source {
    /// Builds the source shape for a classified domain type.
    pub(crate) fn build<T>(descriptor: &TypeDescriptor<T>, marker: &EntityMarker) -> Source {
        match marker.kind() {
            EntityType::Vertex => Source::Vertex(VertexSource::new(element_label(descriptor, marker))),
            EntityType::Edge => Source::Edge(EdgeSource::new(element_label(descriptor, marker))),
            EntityType::Graph => Source::Graph(GraphSource::new()),
        }
    }

    /// The entity type this source is shaped for.
    pub fn entity_type(&self) -> EntityType {
        match self {
            Source::Vertex(_) => EntityType::Vertex,
            Source::Edge(_) => EntityType::Edge,
            Source::Graph(_) => EntityType::Graph,
        }
    }

    /// The stamped label. Present for vertex and edge shapes, never for
    /// graph shapes.
    pub fn label(&self) -> Option<&str> {
        match self {
            Source::Vertex(v) => Some(&v.label),
            Source::Edge(e) => Some(&e.label),
            Source::Graph(_) => None,
        }
    }
}

/// A vertex-shaped source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VertexSource {
    /// Element identifier; `None` until the database assigns one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Vertex label.
    pub label: String,
    /// Non-identity properties, populated by the conversion layer.
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub properties: Map<String, Value>,
}

impl VertexSource {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            id: None,
            label: label.into(),
            properties: Map::new(),
        }
    }
}

/// An edge-shaped source connecting two vertices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeSource {
    /// Element identifier; `None` until the database assigns one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Edge label.
    pub label: String,
    /// Identifier of the outgoing vertex, once known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    /// Identifier of the incoming vertex, once known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    /// Non-identity properties, populated by the conversion layer.
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub properties: Map<String, Value>,
}

impl EdgeSource {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            id: None,
            label: label.into(),
            from: None,
            to: None,
            properties: Map::new(),
        }
    }
}

/// A whole-graph source: a collection of vertex and edge sources.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphSource {
    /// Identifier of the graph entity itself; `None` until assigned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub vertices: Vec<VertexSource>,
    pub edges: Vec<EdgeSource>,
}

impl GraphSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a vertex source to the graph.
    pub fn add_vertex(&mut self, vertex: VertexSource) {
        self.vertices.push(vertex);
    }

    /// Adds an edge source to the graph.
    pub fn add_edge(&mut self, edge: EdgeSource) {
        self.edges.push(edge);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct Sample;

    #[test]
    fn test_build_vertex_source() {
        let descriptor = TypeDescriptor::<Sample>::new("Person");
        let marker = EntityMarker::vertex().label("person");
        let source = Source::build(&descriptor, &marker);

        assert_eq!(source.entity_type(), EntityType::Vertex);
        assert_eq!(source.label(), Some("person"));
    }

    #[test]
    fn test_build_edge_source_with_default_label() {
        let descriptor = TypeDescriptor::<Sample>::new("Relationship");
        let marker = EntityMarker::edge();
        let source = Source::build(&descriptor, &marker);

        assert_eq!(source.entity_type(), EntityType::Edge);
        assert_eq!(source.label(), Some("Relationship"));
    }

    #[test]
    fn test_build_graph_source_is_unlabelled() {
        let descriptor = TypeDescriptor::<Sample>::new("Network");
        let marker = EntityMarker::graph();
        let source = Source::build(&descriptor, &marker);

        assert_eq!(source.entity_type(), EntityType::Graph);
        assert_eq!(source.label(), None);
    }

    #[test]
    fn test_vertex_source_json_shape() {
        let mut vertex = VertexSource::new("person");
        vertex.id = Some("p-1".to_string());
        vertex
            .properties
            .insert("name".to_string(), json!("mary"));

        let value = serde_json::to_value(Source::Vertex(vertex)).unwrap();
        assert_eq!(
            value,
            json!({
                "kind": "vertex",
                "id": "p-1",
                "label": "person",
                "properties": { "name": "mary" },
            })
        );
    }

    #[test]
    fn test_graph_source_collects_elements() {
        let mut graph = GraphSource::new();
        graph.add_vertex(VertexSource::new("person"));
        graph.add_edge(EdgeSource::new("knows"));

        assert_eq!(graph.vertices.len(), 1);
        assert_eq!(graph.edges.len(), 1);

        let value = serde_json::to_value(Source::Graph(graph)).unwrap();
        assert_eq!(value["kind"], json!("graph"));
        assert_eq!(value["vertices"][0]["label"], json!("person"));
    }
}
