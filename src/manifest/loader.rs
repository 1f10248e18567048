//! Multi-document YAML loader

use crate::graph::{ManifestDocument, document};
use serde::Deserialize;
use serde_json::Value;
use std::io::Read;
use std::path::Path;

/// Kind of the wrapper document `kubectl get -o yaml` emits for several objects
const LIST_KIND: &str = "List";

/// Path argument meaning "read standard input"
const STDIN_PATH: &str = "-";

/// Bundle loading errors
#[derive(Debug, thiserror::Error)]
pub enum LoaderError {
    #[error("Invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Document {index} is not a mapping")]
    NotAMapping { index: usize },

    #[error("Document {index} has no kind")]
    MissingKind { index: usize },

    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Parse a multi-document YAML bundle
///
/// Blank documents between `---` separators are skipped and `List` documents
/// are flattened into their items. `metadata.name` defaults to an empty string.
pub fn load_bundle(text: &str) -> Result<Vec<ManifestDocument>, LoaderError> {
    let mut documents = Vec::new();

    for (index, deserializer) in serde_yaml::Deserializer::from_str(text).enumerate() {
        let value = Value::deserialize(deserializer)?;
        if value.is_null() {
            tracing::debug!("Skipping empty document {}", index);
            continue;
        }

        if document::get_str(&value, &["kind"]) == Some(LIST_KIND) {
            let items = document::get_sequence(&value, &["items"])
                .cloned()
                .unwrap_or_default();
            tracing::debug!("Flattening List document {} with {} items", index, items.len());
            for item in items {
                documents.push(to_manifest_document(index, item)?);
            }
            continue;
        }

        documents.push(to_manifest_document(index, value)?);
    }

    Ok(documents)
}

/// Load and concatenate bundles from files, in argument order
///
/// `-` reads standard input.
pub fn load_files<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<ManifestDocument>, LoaderError> {
    let mut documents = Vec::new();
    for path in paths {
        let text = read_source(path.as_ref())?;
        let loaded = load_bundle(&text)?;
        tracing::debug!(
            "Loaded {} documents from {}",
            loaded.len(),
            path.as_ref().display()
        );
        documents.extend(loaded);
    }
    Ok(documents)
}

fn read_source(path: &Path) -> Result<String, LoaderError> {
    let io_error = |source: std::io::Error| LoaderError::Io {
        path: path.display().to_string(),
        source,
    };

    if path == Path::new(STDIN_PATH) {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .map_err(io_error)?;
        return Ok(text);
    }

    std::fs::read_to_string(path).map_err(io_error)
}

fn to_manifest_document(index: usize, value: Value) -> Result<ManifestDocument, LoaderError> {
    if !value.is_object() {
        return Err(LoaderError::NotAMapping { index });
    }

    let kind = document::get_str(&value, &["kind"])
        .ok_or(LoaderError::MissingKind { index })?
        .to_string();
    let name = document::get_str(&value, &["metadata", "name"])
        .unwrap_or_default()
        .to_string();

    Ok(ManifestDocument::new(kind, name, value))
}
