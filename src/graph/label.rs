//! Selector → Pod relationship synthesis

use super::models::ObjectId;
use super::registry::ObjectRegistry;
use super::selector::Selector;

/// Link every object carrying `spec.selector` to the Pods it selects
///
/// Runs over a snapshot of the registry and never adds objects. Each match is
/// recorded on both ends. Pods selected by several sources get one entry per
/// source; nothing is deduplicated.
///
/// Returns the number of relations created.
pub fn synthesize_label_relations(registry: &mut ObjectRegistry) -> usize {
    let snapshot: &ObjectRegistry = registry;
    let edges: Vec<(ObjectId, ObjectId)> = snapshot
        .iter()
        .filter_map(|object| {
            let selector = Selector::from_document(&object.document)?;
            tracing::debug!(
                "{} '{}' (object {}) selector: {} equality terms, {} set-based terms",
                object.kind,
                object.name,
                object.id,
                selector.match_labels.len(),
                selector.match_expressions.len()
            );
            let targets = selector.find_matches(snapshot);
            Some(targets.into_iter().map(move |target| (object.id, target)))
        })
        .flatten()
        .collect();

    for &(source, target) in &edges {
        registry.add_label_edge(source, target);
    }

    tracing::debug!("Created {} label relations", edges.len());
    edges.len()
}
