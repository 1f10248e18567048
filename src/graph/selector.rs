//! Label selector parsing and matching
//!
//! Supports the three selector layouts found in manifests:
//! - `spec.selector.matchLabels` (equality terms)
//! - `spec.selector.matchExpressions` (set-based terms)
//! - a bare `spec.selector` map (legacy equality syntax used by Services and
//!   ReplicationControllers)
//!
//! Only equality terms decide a match. Set-based terms are parsed and kept on
//! the [`Selector`] but do not filter candidates.

use super::document;
use super::error::SelectorError;
use super::models::{Object, ObjectId};
use super::registry::ObjectRegistry;
use crate::models::POD_KIND;
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

/// Equality term: label `key` must equal `value`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchLabel {
    pub key: String,
    pub value: String,
}

/// Set-based term from `matchExpressions`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchExpression {
    pub key: String,
    pub operator: SelectorOperator,
    pub values: Vec<String>,
}

/// Operators allowed in a `matchExpressions` entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectorOperator {
    In,
    NotIn,
    Exists,
    DoesNotExist,
}

impl SelectorOperator {
    pub fn as_str(&self) -> &'static str {
        match self {
            SelectorOperator::In => "In",
            SelectorOperator::NotIn => "NotIn",
            SelectorOperator::Exists => "Exists",
            SelectorOperator::DoesNotExist => "DoesNotExist",
        }
    }

    /// Whether the operator is meaningless without a `values` list
    pub fn requires_values(&self) -> bool {
        matches!(self, SelectorOperator::In | SelectorOperator::NotIn)
    }
}

impl fmt::Display for SelectorOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SelectorOperator {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "In" => Ok(SelectorOperator::In),
            "NotIn" => Ok(SelectorOperator::NotIn),
            "Exists" => Ok(SelectorOperator::Exists),
            "DoesNotExist" => Ok(SelectorOperator::DoesNotExist),
            _ => Err(SelectorError::InvalidOperator(s.to_string())),
        }
    }
}

/// Resolved terms of one object's `spec.selector`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selector {
    pub match_labels: Vec<MatchLabel>,
    pub match_expressions: Vec<MatchExpression>,
}

impl Selector {
    /// Resolve the selector of a resource document
    ///
    /// Returns `None` when the document has no `spec.selector`. Malformed entries
    /// are logged and dropped; they never fail the caller.
    pub fn from_document(doc: &Value) -> Option<Self> {
        let selector = present(document::get(doc, &["spec", "selector"]))?;
        let mut resolved = Selector::default();

        let Some(fields) = selector.as_object() else {
            tracing::warn!("spec.selector is not a mapping, ignoring it");
            return Some(resolved);
        };

        let match_labels = present(fields.get("matchLabels"));
        let match_expressions = present(fields.get("matchExpressions"));

        if let Some(labels) = match_labels {
            match labels.as_object() {
                Some(labels) => resolved.match_labels = equality_terms(labels),
                None => tracing::warn!("spec.selector.matchLabels is not a mapping, ignoring it"),
            }
        }

        if let Some(expressions) = match_expressions {
            match expressions.as_array() {
                Some(entries) => {
                    for entry in entries {
                        match parse_match_expression(entry) {
                            Ok(expr) => resolved.match_expressions.push(expr),
                            Err(e) => tracing::warn!("Skipping matchExpressions entry: {}", e),
                        }
                    }
                }
                None => {
                    tracing::warn!("spec.selector.matchExpressions is not a sequence, ignoring it")
                }
            }
        }

        if match_labels.is_none() && match_expressions.is_none() {
            resolved.match_labels = equality_terms(fields);
        }

        Some(resolved)
    }

    /// Whether no term of either kind was resolved
    pub fn is_empty(&self) -> bool {
        self.match_labels.is_empty() && self.match_expressions.is_empty()
    }

    /// Whether `object` is a Pod whose labels satisfy every equality term
    ///
    /// A selector without equality terms matches nothing.
    pub fn matches(&self, object: &Object) -> bool {
        if object.kind != POD_KIND || self.match_labels.is_empty() {
            return false;
        }

        let Some(labels) = document::get_mapping(&object.document, &["metadata", "labels"]) else {
            return false;
        };

        // TODO: apply match_expressions as additional AND-ed filters once
        // set-based matching is confirmed against cluster behaviour.
        self.match_labels.iter().all(|term| {
            labels
                .get(&term.key)
                .and_then(document::scalar_to_string)
                .is_some_and(|value| value == term.value)
        })
    }

    /// Ids of every object in the registry this selector matches, in registry order
    pub fn find_matches(&self, registry: &ObjectRegistry) -> Vec<ObjectId> {
        registry
            .iter()
            .filter(|candidate| self.matches(candidate))
            .map(|candidate| candidate.id)
            .collect()
    }
}

/// Parse one `matchExpressions` entry
pub fn parse_match_expression(entry: &Value) -> Result<MatchExpression, SelectorError> {
    let fields = entry.as_object().ok_or(SelectorError::NotAMapping)?;

    let key = fields
        .get("key")
        .and_then(Value::as_str)
        .ok_or(SelectorError::MissingField("key"))?;
    let operator: SelectorOperator = fields
        .get("operator")
        .and_then(Value::as_str)
        .ok_or(SelectorError::MissingField("operator"))?
        .parse()?;

    let values = match present(fields.get("values")).and_then(Value::as_array) {
        Some(values) => values
            .iter()
            .map(|v| {
                document::scalar_to_string(v)
                    .ok_or_else(|| SelectorError::NonScalarValue(key.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?,
        None if operator.requires_values() => return Err(SelectorError::MissingField("values")),
        None => Vec::new(),
    };

    Ok(MatchExpression {
        key: key.to_string(),
        operator,
        values,
    })
}

/// Turn a label map into equality terms, dropping non-scalar values
fn equality_terms(labels: &Map<String, Value>) -> Vec<MatchLabel> {
    labels
        .iter()
        .filter_map(|(key, value)| match document::scalar_to_string(value) {
            Some(value) => Some(MatchLabel {
                key: key.clone(),
                value,
            }),
            None => {
                tracing::warn!("Skipping selector term: {}", SelectorError::NonScalarValue(key.clone()));
                None
            }
        })
        .collect()
}

/// Treat explicit YAML nulls like missing keys
fn present(value: Option<&Value>) -> Option<&Value> {
    value.filter(|v| !v.is_null())
}
