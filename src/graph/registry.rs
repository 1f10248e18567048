//! Ordered object store with identity assignment
//!
//! Objects keep insertion order. Ids come from a monotonic counter owned by the
//! registry, so synthesized objects continue after the highest id handed out so
//! far and ids are never reused.

use super::models::{ControlRelation, LabelRelation, ManifestDocument, Object, ObjectId, Relations};
use serde_json::Value;
use std::collections::HashMap;

/// The mutable object set a graph is built over
#[derive(Debug, Clone, Default)]
pub struct ObjectRegistry {
    objects: Vec<Object>,
    /// Map from object id to index in `objects`
    index: HashMap<ObjectId, usize>,
    next_id: ObjectId,
}

impl ObjectRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register parsed documents in order
    pub fn from_documents(documents: impl IntoIterator<Item = ManifestDocument>) -> Self {
        let mut registry = Self::new();
        for doc in documents {
            registry.insert(doc.kind, doc.name, doc.document);
        }
        registry
    }

    /// Register an object and return its id
    pub fn insert(
        &mut self,
        kind: impl Into<String>,
        name: impl Into<String>,
        document: Value,
    ) -> ObjectId {
        let id = self.allocate_id();
        self.push(Object {
            id,
            kind: kind.into(),
            name: name.into(),
            document,
            relations: Relations::default(),
        });
        id
    }

    /// Reserve the next id without inserting anything yet
    ///
    /// Used by synthesis passes that build objects in a side buffer before
    /// appending them with [`ObjectRegistry::push`].
    pub(crate) fn allocate_id(&mut self) -> ObjectId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Append an object whose id was obtained from [`ObjectRegistry::allocate_id`]
    pub(crate) fn push(&mut self, object: Object) {
        debug_assert!(
            !self.index.contains_key(&object.id),
            "object id {} registered twice",
            object.id
        );
        self.index.insert(object.id, self.objects.len());
        self.objects.push(object);
    }

    pub fn get(&self, id: ObjectId) -> Option<&Object> {
        self.index.get(&id).map(|&idx| &self.objects[idx])
    }

    pub(crate) fn get_mut(&mut self, id: ObjectId) -> Option<&mut Object> {
        self.index.get(&id).map(|&idx| &mut self.objects[idx])
    }

    /// Objects in insertion order
    pub fn objects(&self) -> &[Object] {
        &self.objects
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Object> {
        self.objects.iter()
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Find an object by kind and name
    pub fn find(&self, kind: &str, name: &str) -> Option<&Object> {
        self.objects
            .iter()
            .find(|o| o.kind == kind && o.name == name)
    }

    /// Record a control relation on the controller side
    ///
    /// The child side is attached when the Pod is constructed. Returns false if
    /// the controller is not registered.
    pub(crate) fn attach_control_relation(
        &mut self,
        owner: ObjectId,
        relation: ControlRelation,
    ) -> bool {
        match self.get_mut(owner) {
            Some(object) => {
                object.relations.control_rels.push(relation);
                true
            }
            None => false,
        }
    }

    /// Record a label relation on both ends of the edge
    ///
    /// The target side is written first, then the source. When source and target
    /// are the same object it receives both entries. Returns false, leaving both
    /// lists untouched, if either end is not registered.
    pub fn add_label_edge(&mut self, source: ObjectId, target: ObjectId) -> bool {
        if !self.index.contains_key(&source) || !self.index.contains_key(&target) {
            return false;
        }
        let relation = LabelRelation::new(source, target);
        for id in [target, source] {
            if let Some(object) = self.get_mut(id) {
                object.relations.label_rels.push(relation);
            }
        }
        true
    }

    /// Consume the registry, yielding objects in insertion order
    pub fn into_objects(self) -> Vec<Object> {
        self.objects
    }
}

impl<'a> IntoIterator for &'a ObjectRegistry {
    type Item = &'a Object;
    type IntoIter = std::slice::Iter<'a, Object>;

    fn into_iter(self) -> Self::IntoIter {
        self.objects.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_insert_assigns_sequential_ids() {
        let mut registry = ObjectRegistry::new();
        let a = registry.insert("Service", "a", json!({}));
        let b = registry.insert("Pod", "b", json!({}));

        assert_eq!((a, b), (0, 1));
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.get(b).map(|o| o.name.as_str()), Some("b"));
        assert!(registry.get(7).is_none());
    }

    #[test]
    fn test_allocated_ids_are_never_reused() {
        let mut registry = ObjectRegistry::new();
        registry.insert("Service", "a", json!({}));
        let reserved = registry.allocate_id();
        let next = registry.insert("Pod", "b", json!({}));

        assert_eq!(reserved, 1);
        assert_eq!(next, 2);
    }

    #[test]
    fn test_add_label_edge_is_bidirectional() {
        let mut registry = ObjectRegistry::new();
        let svc = registry.insert("Service", "svc", json!({}));
        let pod = registry.insert("Pod", "pod", json!({}));

        assert!(registry.add_label_edge(svc, pod));

        let expected = LabelRelation::new(svc, pod);
        assert_eq!(registry.get(svc).unwrap().relations.label_rels, vec![expected]);
        assert_eq!(registry.get(pod).unwrap().relations.label_rels, vec![expected]);
    }

    #[test]
    fn test_add_label_edge_rejects_unknown_ids() {
        let mut registry = ObjectRegistry::new();
        let svc = registry.insert("Service", "svc", json!({}));

        assert!(!registry.add_label_edge(svc, 42));
        assert!(registry.get(svc).unwrap().relations.label_rels.is_empty());
    }

    #[test]
    fn test_find_by_kind_and_name() {
        let registry = ObjectRegistry::from_documents(vec![
            ManifestDocument::new("Service", "web", json!({})),
            ManifestDocument::new("Deployment", "web", json!({})),
        ]);

        assert_eq!(registry.find("Deployment", "web").map(|o| o.id), Some(1));
        assert!(registry.find("Pod", "web").is_none());
    }
}
