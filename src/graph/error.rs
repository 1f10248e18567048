//! Graph construction errors

use super::models::ObjectId;

/// Fatal errors that abort graph construction
///
/// Construction is a pure function of its input, so none of these are retryable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    #[error(
        "{kind} '{name}' (object {id}) declares replicas but spec.template is missing or not a mapping"
    )]
    MalformedTemplate {
        id: ObjectId,
        kind: String,
        name: String,
    },
}

/// Result type for graph construction
pub type GraphResult<T> = Result<T, GraphError>;

/// A selector entry that could not be turned into a term
///
/// Never fatal: the entry contributes no terms and the rest of the graph is built.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectorError {
    #[error("selector entry is not a mapping")]
    NotAMapping,

    #[error("selector entry is missing required field '{0}'")]
    MissingField(&'static str),

    #[error("unknown selector operator '{0}'")]
    InvalidOperator(String),

    #[error("selector value for '{0}' is not a scalar")]
    NonScalarValue(String),
}
