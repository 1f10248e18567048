//! Data structures for the manifest relationship graph

use serde::Serialize;
use serde_json::Value;

/// Identity of an object within one registry
pub type ObjectId = usize;

/// One parsed manifest document, as handed to the graph builder
#[derive(Debug, Clone, PartialEq)]
pub struct ManifestDocument {
    pub kind: String,
    pub name: String,
    pub document: Value,
}

impl ManifestDocument {
    pub fn new(kind: impl Into<String>, name: impl Into<String>, document: Value) -> Self {
        Self {
            kind: kind.into(),
            name: name.into(),
            document,
        }
    }
}

/// A node in the graph
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Object {
    pub id: ObjectId,
    pub kind: String,
    pub name: String,
    /// Raw document the object was parsed from (the owner's template for synthesized Pods)
    pub document: Value,
    pub relations: Relations,
}

/// Edges touching an object, both inbound and outbound
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Relations {
    pub control_rels: Vec<ControlRelation>,
    pub label_rels: Vec<LabelRelation>,
}

/// An edge between two objects
///
/// `source` is the side that initiated the relationship (controller or selector owner).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Relation {
    pub source: ObjectId,
    pub target: ObjectId,
}

impl Relation {
    pub fn new(source: ObjectId, target: ObjectId) -> Self {
        Self { source, target }
    }

    /// Whether `id` is either end of this edge
    pub fn touches(&self, id: ObjectId) -> bool {
        self.source == id || self.target == id
    }
}

/// A controller and one of the Pods it generates
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ControlRelation {
    #[serde(flatten)]
    pub relation: Relation,
    /// Replica count declared by the controller
    pub replicas: usize,
    /// Pod template the child was synthesized from
    pub template: Value,
}

/// An object with `spec.selector` and a Pod whose labels satisfy it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LabelRelation {
    #[serde(flatten)]
    pub relation: Relation,
}

impl LabelRelation {
    pub fn new(source: ObjectId, target: ObjectId) -> Self {
        Self {
            relation: Relation::new(source, target),
        }
    }
}
