//! Kubernetes kind model layer
//!
//! Typed names for the manifest kinds the graph builder gives meaning to.

pub mod workload_kind;

pub use workload_kind::{ControllerKind, POD_KIND};
