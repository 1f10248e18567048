//! Graph output rendering
//!
//! Text for terminals, JSON/YAML for downstream tools. Raw documents are large,
//! so structured output leaves them out unless asked.

use crate::graph::{LabelRelation, Object, ObjectId, ObjectRegistry};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt::{self, Write};
use std::str::FromStr;

/// Output format for a rendered graph
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Yaml,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Yaml => "yaml",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "yaml" => Ok(OutputFormat::Yaml),
            _ => Err(format!("Unknown output format: {}", s)),
        }
    }
}

/// Rendering errors
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Failed to serialize graph as JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to serialize graph as YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Edge and object counts of a built graph
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphSummary {
    pub objects: usize,
    pub control_relations: usize,
    pub label_relations: usize,
}

/// Count objects and distinct edges
///
/// Every edge is stored on both of its ends, so per-object entries are halved.
pub fn summarize(registry: &ObjectRegistry) -> GraphSummary {
    let (control, label) = registry.iter().fold((0, 0), |(c, l), object| {
        (
            c + object.relations.control_rels.len(),
            l + object.relations.label_rels.len(),
        )
    });

    GraphSummary {
        objects: registry.len(),
        control_relations: control / 2,
        label_relations: label / 2,
    }
}

/// Render a graph in the requested format
pub fn render(
    registry: &ObjectRegistry,
    format: OutputFormat,
    include_documents: bool,
) -> Result<String, RenderError> {
    match format {
        OutputFormat::Text => Ok(render_text(registry)),
        OutputFormat::Json => {
            let views = object_views(registry, include_documents);
            let mut json = serde_json::to_string_pretty(&views)?;
            json.push('\n');
            Ok(json)
        }
        OutputFormat::Yaml => Ok(serde_yaml::to_string(&object_views(
            registry,
            include_documents,
        ))?),
    }
}

/// Human-readable listing, one block per object in registry order
pub fn render_text(registry: &ObjectRegistry) -> String {
    let mut out = String::new();

    for object in registry {
        let _ = writeln!(out, "[{}] {}/{}", object.id, object.kind, object.name);
        for rel in &object.relations.control_rels {
            let _ = writeln!(
                out,
                "    control {} -> {} (replicas {})",
                describe(registry, rel.relation.source),
                describe(registry, rel.relation.target),
                rel.replicas
            );
        }
        for rel in &object.relations.label_rels {
            let _ = writeln!(
                out,
                "    label   {} -> {}",
                describe(registry, rel.relation.source),
                describe(registry, rel.relation.target)
            );
        }
    }

    let summary = summarize(registry);
    let _ = writeln!(
        out,
        "{} objects, {} control relations, {} label relations",
        summary.objects, summary.control_relations, summary.label_relations
    );
    out
}

fn describe(registry: &ObjectRegistry, id: ObjectId) -> String {
    match registry.get(id) {
        Some(object) => format!("{}:{}", id, object.name),
        None => id.to_string(),
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ObjectView<'a> {
    id: ObjectId,
    kind: &'a str,
    name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    document: Option<&'a Value>,
    relations: RelationsView<'a>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RelationsView<'a> {
    control_rels: Vec<ControlRelationView<'a>>,
    label_rels: &'a [LabelRelation],
}

#[derive(Serialize)]
struct ControlRelationView<'a> {
    source: ObjectId,
    target: ObjectId,
    replicas: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    template: Option<&'a Value>,
}

fn object_views(registry: &ObjectRegistry, include_documents: bool) -> Vec<ObjectView<'_>> {
    registry
        .iter()
        .map(|object| object_view(object, include_documents))
        .collect()
}

fn object_view(object: &Object, include_documents: bool) -> ObjectView<'_> {
    ObjectView {
        id: object.id,
        kind: &object.kind,
        name: &object.name,
        document: include_documents.then_some(&object.document),
        relations: RelationsView {
            control_rels: object
                .relations
                .control_rels
                .iter()
                .map(|rel| ControlRelationView {
                    source: rel.relation.source,
                    target: rel.relation.target,
                    replicas: rel.replicas,
                    template: include_documents.then_some(&rel.template),
                })
                .collect(),
            label_rels: &object.relations.label_rels,
        },
    }
}
