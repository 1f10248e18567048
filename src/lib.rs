//! Manifest Grapher Library
//!
//! Derives ownership and label-selector relationships between the objects of a
//! rendered Kubernetes manifest bundle. The graph core ([`graph`]) is a pure
//! transformation over parsed documents; loading ([`manifest`]), rendering
//! ([`render`]) and configuration ([`config`]) support the command-line tool.

pub mod config;
pub mod graph;
pub mod manifest;
pub mod models;
pub mod render;

// Re-export commonly used types for convenience
pub use graph::{
    ControlRelation, GraphError, LabelRelation, ManifestDocument, Object, ObjectId,
    ObjectRegistry, Relation, Selector, build_graph,
};
pub use models::{ControllerKind, POD_KIND};
