//! Integration tests for the storage engines.
//!
//! Exercises the full contract surface end to end: add/get round-trips,
//! scoped name collisions, hierarchy rejection, cross-namespace moves,
//! and deletion semantics.

use isshub_core::entity::types::{EntityId, NamespaceKind};
use isshub_core::entity::{Namespace, Repository};
use isshub_core::storage::error::{HierarchyViolation, StorageError};
use isshub_core::storage::memory::{NamespaceStorage, RepositoryStorage};
use isshub_core::storage::store::{NamespaceStore, RepositoryStore};

fn namespace(name: &str, kind: NamespaceKind) -> Namespace {
    Namespace::new(name, kind).unwrap()
}

#[test]
fn add_get_roundtrip_is_idempotent() {
    let storage = NamespaceStorage::new();
    let ns = storage
        .add(
            namespace("acme", NamespaceKind::Organization)
                .with_description("issue aggregation, inc."),
        )
        .unwrap();

    // Repeated gets without intervening mutation return identical content
    let first = storage.get(ns.id()).unwrap();
    let second = storage.get(ns.id()).unwrap();
    assert_eq!(first, ns);
    assert_eq!(first, second);
}

#[test]
fn sibling_names_collide_only_within_a_scope() {
    let storage = NamespaceStorage::new();

    // A: "acme" at top level
    let a = storage
        .add(namespace("acme", NamespaceKind::Organization))
        .unwrap();

    // B: "acme" under A - different scope, succeeds
    let b = namespace("acme", NamespaceKind::Team).with_parent(a.id());
    storage.add(b).unwrap();

    // C: "acme" at top level again - collides with A
    let c = namespace("acme", NamespaceKind::Group);
    let err = storage.add(c).unwrap_err();
    assert!(matches!(err, StorageError::NameCollision { .. }));
}

#[test]
fn update_closing_a_two_node_cycle_is_rejected() {
    let storage = NamespaceStorage::new();
    let b = storage
        .add(namespace("b", NamespaceKind::Organization))
        .unwrap();
    let a = storage
        .add(namespace("a", NamespaceKind::Team).with_parent(b.id()))
        .unwrap();

    // A has parent B; setting B's parent to A closes the loop
    let mut b_changed = storage.get(b.id()).unwrap();
    b_changed.set_parent(Some(a.id()));
    let err = storage.update(b.id(), b_changed).unwrap_err();
    assert!(matches!(
        err,
        StorageError::Hierarchy(HierarchyViolation::Cycle { .. })
    ));

    // B is still a top-level namespace
    assert!(storage.get(b.id()).unwrap().parent().is_none());
}

#[test]
fn deep_cycle_is_rejected() {
    let storage = NamespaceStorage::new();
    let root = storage
        .add(namespace("root", NamespaceKind::Organization))
        .unwrap();
    let mut parent = root.id();
    let mut deepest = root.id();
    for i in 0..5 {
        let ns = storage
            .add(namespace(&format!("level-{i}"), NamespaceKind::Group).with_parent(parent))
            .unwrap();
        parent = ns.id();
        deepest = ns.id();
    }

    let mut root_changed = storage.get(root.id()).unwrap();
    root_changed.set_parent(Some(deepest));
    assert!(matches!(
        storage.update(root.id(), root_changed).unwrap_err(),
        StorageError::Hierarchy(HierarchyViolation::Cycle { .. })
    ));
}

#[test]
fn repository_move_switches_container_listings() {
    let namespaces = NamespaceStorage::new();
    let repositories = RepositoryStorage::new();

    let a = namespaces
        .add(namespace("team-a", NamespaceKind::Team))
        .unwrap();
    let b = namespaces
        .add(namespace("team-b", NamespaceKind::Team))
        .unwrap();

    let r = repositories
        .add(Repository::new("widgets", a.id()).unwrap())
        .unwrap();
    assert_eq!(repositories.list_by_container(a.id()).len(), 1);

    // Move R from A to B as a single transactional replace
    let mut moved = repositories.get(r.id()).unwrap();
    moved.set_namespace(b.id());
    repositories.update(r.id(), moved.clone()).unwrap();

    assert!(repositories.list_by_container(a.id()).is_empty());
    assert_eq!(repositories.list_by_container(b.id()), vec![moved]);
}

#[test]
fn deletion_frees_the_name_for_reuse() {
    let storage = RepositoryStorage::new();
    let ns = EntityId::new();

    let r = storage.add(Repository::new("widgets", ns).unwrap()).unwrap();
    storage.delete(r.id()).unwrap();

    // A fresh entity can claim the same (scope, name)
    let again = storage.add(Repository::new("widgets", ns).unwrap()).unwrap();
    assert_ne!(again.id(), r.id());
}

#[test]
fn delete_of_never_added_identifier_fails() {
    let namespaces = NamespaceStorage::new();
    let repositories = RepositoryStorage::new();
    let id = EntityId::new();

    assert_eq!(
        namespaces.delete(id).unwrap_err(),
        StorageError::NotFound { id }
    );
    assert_eq!(
        repositories.delete(id).unwrap_err(),
        StorageError::NotFound { id }
    );
}

#[test]
fn rename_collision_excludes_the_entity_itself() {
    let storage = NamespaceStorage::new();
    let a = storage
        .add(namespace("acme", NamespaceKind::Organization))
        .unwrap();

    // Updating A without changing its name must not collide with itself
    let mut unchanged_name = storage.get(a.id()).unwrap();
    unchanged_name.set_description(Some("still acme".into()));
    assert!(storage.update(a.id(), unchanged_name).is_ok());
}

#[test]
fn reparenting_into_a_sibling_scope_checks_names_there() {
    let storage = NamespaceStorage::new();
    let left = storage
        .add(namespace("left", NamespaceKind::Organization))
        .unwrap();
    let right = storage
        .add(namespace("right", NamespaceKind::Organization))
        .unwrap();
    let child = storage
        .add(namespace("docs", NamespaceKind::Group).with_parent(left.id()))
        .unwrap();
    storage
        .add(namespace("docs", NamespaceKind::Group).with_parent(right.id()))
        .unwrap();

    // Moving left/docs under right collides with right/docs
    let mut moved = storage.get(child.id()).unwrap();
    moved.set_parent(Some(right.id()));
    assert!(matches!(
        storage.update(child.id(), moved).unwrap_err(),
        StorageError::NameCollision { .. }
    ));

    // Renaming while moving resolves the collision
    let mut moved_renamed = storage.get(child.id()).unwrap();
    moved_renamed.set_parent(Some(right.id()));
    moved_renamed.set_name("handbook").unwrap();
    assert!(storage.update(child.id(), moved_renamed).is_ok());
}

#[test]
fn namespace_delete_does_not_cascade() {
    let storage = NamespaceStorage::new();
    let parent = storage
        .add(namespace("acme", NamespaceKind::Organization))
        .unwrap();
    let child = storage
        .add(namespace("core", NamespaceKind::Team).with_parent(parent.id()))
        .unwrap();

    // Cascade policy belongs to a higher layer: deleting the parent
    // leaves the child stored, still keyed under the removed scope
    storage.delete(parent.id()).unwrap();
    assert!(storage.exists(child.id()));
    assert_eq!(
        storage.list_by_container(Some(parent.id())),
        vec![storage.get(child.id()).unwrap()]
    );
}

#[test]
fn stored_entities_are_copies_not_handles() {
    let storage = NamespaceStorage::new();
    let ns = storage
        .add(namespace("acme", NamespaceKind::Organization))
        .unwrap();

    // Mutating the returned copy does not touch the canonical record
    let mut copy = storage.get(ns.id()).unwrap();
    copy.set_name("mutated").unwrap();
    assert_eq!(storage.get(ns.id()).unwrap().name().as_str(), "acme");
}

#[test]
fn namespace_and_repository_stores_are_independent() {
    let repositories = RepositoryStorage::new();

    // A repository may reference a namespace id that no namespace store
    // has seen; cross-store integrity is the composing layer's job
    let unknown_ns = EntityId::new();
    assert!(repositories
        .add(Repository::new("widgets", unknown_ns).unwrap())
        .is_ok());
}
