//! Manifest relationship graph
//!
//! Builds a graph over the objects of a rendered manifest bundle. Two kinds of
//! edges are derived:
//! - control relations between Pod controllers and the Pods they would create
//! - label relations between objects with `spec.selector` and the Pods it selects
//!
//! The builder is a pure transformation over already-parsed documents: no I/O,
//! no cluster access.

pub mod control;
pub mod document;
pub mod error;
pub mod label;
pub mod models;
pub mod registry;
pub mod selector;

pub use control::synthesize_control_relations;
pub use error::{GraphError, GraphResult, SelectorError};
pub use label::synthesize_label_relations;
pub use models::{
    ControlRelation, LabelRelation, ManifestDocument, Object, ObjectId, Relation, Relations,
};
pub use registry::ObjectRegistry;
pub use selector::{MatchExpression, MatchLabel, Selector, SelectorOperator};

/// Build the relationship graph for a bundle of documents
///
/// Documents are registered in order, then controllers are expanded into Pods
/// before selectors are matched, so label relations can target generated Pods.
pub fn build_graph(
    documents: impl IntoIterator<Item = ManifestDocument>,
) -> GraphResult<ObjectRegistry> {
    let mut registry = ObjectRegistry::from_documents(documents);
    tracing::debug!("Building graph over {} objects", registry.len());

    let pods = synthesize_control_relations(&mut registry)?;
    let labels = synthesize_label_relations(&mut registry);

    tracing::debug!(
        "Graph built: {} objects ({} synthesized pods), {} label relations",
        registry.len(),
        pods,
        labels
    );
    Ok(registry)
}
