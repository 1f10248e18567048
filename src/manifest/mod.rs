//! Manifest bundle loading
//!
//! Turns rendered YAML (`helm template`, `kubectl get -o yaml`, plain manifest
//! files) into the parsed documents the graph builder consumes.

pub mod loader;

pub use loader::{LoaderError, load_bundle, load_files};
