//! Controller → Pod relationship synthesis
//!
//! Rendered bundles rarely contain Pods: they are generated by controllers at
//! runtime. This pass creates one Pod per declared replica from the controller's
//! template and links it back to the controller.

use super::document;
use super::error::{GraphError, GraphResult};
use super::models::{ControlRelation, Object, ObjectId, Relation, Relations};
use super::registry::ObjectRegistry;
use crate::models::{ControllerKind, POD_KIND};
use serde_json::Value;

/// A controller that will receive children
struct PlannedController {
    owner: ObjectId,
    name: String,
    replicas: usize,
    template: Value,
}

/// Synthesize Pods for every controller in the registry
///
/// Only objects present when the pass starts are scanned; generated Pods are
/// appended after the scan, so they are never processed as controllers. If any
/// controller has a malformed template the registry is left unchanged.
///
/// Returns the number of Pods created.
pub fn synthesize_control_relations(registry: &mut ObjectRegistry) -> GraphResult<usize> {
    let plan = plan_controllers(registry)?;

    let mut children = Vec::new();
    for controller in plan {
        for replica in 0..controller.replicas {
            let child = registry.allocate_id();
            let relation = ControlRelation {
                relation: Relation::new(controller.owner, child),
                replicas: controller.replicas,
                template: controller.template.clone(),
            };
            registry.attach_control_relation(controller.owner, relation.clone());

            children.push(Object {
                id: child,
                kind: POD_KIND.to_string(),
                // Tentative name: the real suffix is assigned by the cluster
                name: format!("{}-{}", controller.name, replica),
                document: controller.template.clone(),
                relations: Relations {
                    control_rels: vec![relation],
                    ..Default::default()
                },
            });
        }
    }

    let created = children.len();
    for child in children {
        registry.push(child);
    }
    tracing::debug!("Synthesized {} pods from controllers", created);
    Ok(created)
}

/// Collect controllers with a positive replica count, validating their templates
fn plan_controllers(registry: &ObjectRegistry) -> GraphResult<Vec<PlannedController>> {
    let mut plan = Vec::new();

    for object in registry.iter() {
        let Some(kind) = ControllerKind::parse_optional(&object.kind) else {
            continue;
        };

        let replicas = match document::get_i64(&object.document, &["spec", "replicas"]) {
            Some(n) if n > 0 => match usize::try_from(n) {
                Ok(n) => n,
                Err(_) => continue,
            },
            other => {
                tracing::debug!(
                    "Skipping {} '{}' (object {}): replicas {:?}",
                    kind,
                    object.name,
                    object.id,
                    other
                );
                continue;
            }
        };

        let template = match document::get(&object.document, &["spec", "template"]) {
            Some(template) if template.is_object() => template.clone(),
            _ => {
                return Err(GraphError::MalformedTemplate {
                    id: object.id,
                    kind: object.kind.clone(),
                    name: object.name.clone(),
                });
            }
        };

        plan.push(PlannedController {
            owner: object.id,
            name: object.name.clone(),
            replicas,
            template,
        });
    }

    Ok(plan)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn controller(kind: &str, replicas: Value) -> Value {
        json!({
            "kind": kind,
            "spec": {
                "replicas": replicas,
                "template": { "metadata": { "labels": { "app": "web" } } }
            }
        })
    }

    #[test]
    fn test_fan_out_per_replica() {
        let mut registry = ObjectRegistry::new();
        let owner = registry.insert("Deployment", "web", controller("Deployment", json!(3)));

        let created = synthesize_control_relations(&mut registry).unwrap();

        assert_eq!(created, 3);
        assert_eq!(registry.len(), 4);
        let names: Vec<_> = registry.iter().skip(1).map(|o| o.name.as_str()).collect();
        assert_eq!(names, vec!["web-0", "web-1", "web-2"]);

        let owner_rels = &registry.get(owner).unwrap().relations.control_rels;
        assert_eq!(owner_rels.len(), 3);
        for (child, rel) in registry.iter().skip(1).zip(owner_rels) {
            assert_eq!(child.kind, "Pod");
            assert_eq!(child.relations.control_rels, vec![rel.clone()]);
            assert_eq!(rel.relation, Relation::new(owner, child.id));
            assert_eq!(rel.replicas, 3);
            assert_eq!(child.document, json!({ "metadata": { "labels": { "app": "web" } } }));
        }
    }

    #[test]
    fn test_every_controller_kind_is_recognized() {
        let mut registry = ObjectRegistry::new();
        for kind in ControllerKind::all() {
            registry.insert(kind.as_str(), "c", controller(kind.as_str(), json!(1)));
        }

        assert_eq!(synthesize_control_relations(&mut registry).unwrap(), 5);
    }

    #[test]
    fn test_zero_negative_and_missing_replicas_are_skipped() {
        let mut registry = ObjectRegistry::new();
        registry.insert("Deployment", "zero", controller("Deployment", json!(0)));
        registry.insert("StatefulSet", "neg", controller("StatefulSet", json!(-2)));
        registry.insert("Job", "none", json!({ "spec": { "template": {} } }));
        registry.insert("ReplicaSet", "text", controller("ReplicaSet", json!("2")));

        assert_eq!(synthesize_control_relations(&mut registry).unwrap(), 0);
        assert_eq!(registry.len(), 4);
        assert!(registry.iter().all(|o| o.relations.control_rels.is_empty()));
    }

    #[test]
    fn test_non_controller_kinds_are_ignored() {
        let mut registry = ObjectRegistry::new();
        registry.insert("CronJob", "nightly", controller("CronJob", json!(2)));
        registry.insert("Service", "svc", controller("Service", json!(2)));

        assert_eq!(synthesize_control_relations(&mut registry).unwrap(), 0);
    }

    #[test]
    fn test_malformed_template_is_fatal_and_leaves_registry_untouched() {
        let mut registry = ObjectRegistry::new();
        registry.insert("Deployment", "ok", controller("Deployment", json!(1)));
        registry.insert(
            "DaemonSet",
            "broken",
            json!({ "spec": { "replicas": 2, "template": "oops" } }),
        );

        let err = synthesize_control_relations(&mut registry).unwrap_err();

        assert_eq!(
            err,
            GraphError::MalformedTemplate {
                id: 1,
                kind: "DaemonSet".to_string(),
                name: "broken".to_string(),
            }
        );
        assert_eq!(registry.len(), 2);
        assert!(registry.get(0).unwrap().relations.control_rels.is_empty());
    }

    #[test]
    fn test_synthesized_ids_continue_after_existing() {
        let mut registry = ObjectRegistry::new();
        registry.insert("Deployment", "a", controller("Deployment", json!(1)));
        registry.insert("Service", "svc", json!({}));
        registry.insert("Deployment", "b", controller("Deployment", json!(2)));

        synthesize_control_relations(&mut registry).unwrap();

        let ids: Vec<_> = registry.iter().map(|o| (o.id, o.name.as_str())).collect();
        assert_eq!(
            ids,
            vec![(0, "a"), (1, "svc"), (2, "b"), (3, "a-0"), (4, "b-0"), (5, "b-1")]
        );
    }
}
