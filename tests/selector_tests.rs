//! Selector resolution tests
//!
//! Covers the three selector layouts found in real manifests and the rule that
//! only equality terms decide a match.

use manifest_grapher::graph::{MatchLabel, Selector, SelectorOperator};
use manifest_grapher::{ManifestDocument, ObjectRegistry, build_graph};
use serde_json::json;

fn labelled_pods(registry: &mut ObjectRegistry) {
    registry.insert(
        "Pod",
        "web-prod",
        json!({ "metadata": { "labels": { "app": "web", "env": "prod" } } }),
    );
    registry.insert(
        "Pod",
        "web-dev",
        json!({ "metadata": { "labels": { "app": "web", "env": "dev" } } }),
    );
    registry.insert(
        "Pod",
        "db",
        json!({ "metadata": { "labels": { "app": "db", "env": "prod" } } }),
    );
}

#[test]
fn test_legacy_service_selector() {
    let mut registry = ObjectRegistry::new();
    labelled_pods(&mut registry);

    let selector =
        Selector::from_document(&json!({ "spec": { "selector": { "app": "web" } } })).unwrap();

    assert_eq!(selector.find_matches(&registry), vec![0, 1]);
}

#[test]
fn test_match_labels_narrow_with_every_term() {
    let mut registry = ObjectRegistry::new();
    labelled_pods(&mut registry);

    let selector = Selector::from_document(&json!({
        "spec": { "selector": { "matchLabels": { "app": "web", "env": "prod" } } }
    }))
    .unwrap();

    assert_eq!(selector.find_matches(&registry), vec![0]);
}

#[test]
fn test_match_expressions_do_not_filter() {
    let mut registry = ObjectRegistry::new();
    labelled_pods(&mut registry);

    // NotIn [dev] would exclude web-dev if set-based terms were applied
    let selector = Selector::from_document(&json!({
        "spec": { "selector": {
            "matchLabels": { "app": "web" },
            "matchExpressions": [{ "key": "env", "operator": "NotIn", "values": ["dev"] }]
        } }
    }))
    .unwrap();

    assert_eq!(selector.match_expressions.len(), 1);
    assert_eq!(selector.match_expressions[0].operator, SelectorOperator::NotIn);
    assert_eq!(selector.find_matches(&registry), vec![0, 1]);
}

#[test]
fn test_expressions_only_selector_matches_nothing() {
    let mut registry = ObjectRegistry::new();
    labelled_pods(&mut registry);

    let selector = Selector::from_document(&json!({
        "spec": { "selector": { "matchExpressions": [
            { "key": "app", "operator": "Exists" }
        ] } }
    }))
    .unwrap();

    assert!(selector.match_labels.is_empty());
    assert!(!selector.is_empty());
    assert!(selector.find_matches(&registry).is_empty());
}

#[test]
fn test_matchlabels_key_disables_legacy_shape() {
    // With matchLabels present, sibling keys are not read as legacy labels
    let selector = Selector::from_document(&json!({
        "spec": { "selector": { "matchLabels": { "app": "web" }, "tier": "front" } }
    }))
    .unwrap();

    assert_eq!(
        selector.match_labels,
        vec![MatchLabel {
            key: "app".to_string(),
            value: "web".to_string(),
        }]
    );
}

#[test]
fn test_scalar_selector_is_ignored() {
    let selector = Selector::from_document(&json!({ "spec": { "selector": "app=web" } })).unwrap();
    assert!(selector.is_empty());
}

#[test]
fn test_bad_selector_does_not_block_other_relations() {
    let graph = build_graph(vec![
        ManifestDocument::new(
            "PodDisruptionBudget",
            "broken",
            json!({ "spec": { "selector": { "matchExpressions": [{ "operator": "In" }] } } }),
        ),
        ManifestDocument::new(
            "Service",
            "svc",
            json!({ "spec": { "selector": { "app": "web" } } }),
        ),
        ManifestDocument::new(
            "Pod",
            "web",
            json!({ "metadata": { "labels": { "app": "web" } } }),
        ),
    ])
    .unwrap();

    assert!(graph.get(0).unwrap().relations.label_rels.is_empty());
    assert_eq!(graph.get(2).unwrap().relations.label_rels.len(), 1);
}
