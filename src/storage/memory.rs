//! storage::memory
//!
//! In-memory storage engines.
//!
//! # Architecture
//!
//! Each engine owns the canonical copy of its entities in a flat id-keyed
//! table, paired with the uniqueness index for its scope kind. Table and
//! index live inside one `RwLock`ed state so every mutation runs its
//! whole check-then-commit sequence against a consistent snapshot:
//!
//! - `get` / `list_by_container` / `exists` take the read lock and may
//!   run concurrently
//! - `add` / `update` / `delete` take the write lock for checks and
//!   effects together
//!
//! No operation blocks on I/O, so exclusive sections are short and
//! bounded.
//!
//! # Example
//!
//! ```
//! use isshub_core::entity::{Namespace, NamespaceKind};
//! use isshub_core::storage::memory::NamespaceStorage;
//! use isshub_core::storage::store::NamespaceStore;
//!
//! let storage = NamespaceStorage::new();
//! let org = Namespace::new("acme", NamespaceKind::Organization).unwrap();
//! let stored = storage.add(org).unwrap();
//! assert_eq!(storage.get(stored.id()).unwrap(), stored);
//! ```

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::debug;

use crate::entity::namespace::Namespace;
use crate::entity::repository::Repository;
use crate::entity::types::{EntityId, ValidationError};
use crate::storage::error::StorageError;
use crate::storage::hierarchy::{check_parent_link, ParentLinks};
use crate::storage::index::UniquenessIndex;
use crate::storage::store::{NamespaceStore, RepositoryStore};

/// Render a namespace container scope for error messages.
fn parent_scope_label(parent: Option<EntityId>) -> String {
    match parent {
        Some(id) => format!("namespace {id}"),
        None => "top-level".to_string(),
    }
}

/// Table and index for namespaces, guarded together.
#[derive(Debug, Default)]
struct NamespaceState {
    table: HashMap<EntityId, Namespace>,
    index: UniquenessIndex<Option<EntityId>>,
}

impl NamespaceState {
    /// Snapshot of parent links for the hierarchy validator.
    fn parent_links(&self) -> ParentLinks {
        self.table
            .iter()
            .map(|(id, ns)| (*id, ns.parent()))
            .collect()
    }
}

/// In-memory storage engine for [`Namespace`] entities.
///
/// Enforces identifier uniqueness, sibling-name uniqueness per parent
/// scope, and acyclicity of the containment hierarchy around every
/// mutation.
#[derive(Debug, Default)]
pub struct NamespaceStorage {
    state: RwLock<NamespaceState>,
}

impl NamespaceStorage {
    /// Create an empty engine.
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, NamespaceState> {
        // A poisoned lock only means a panic elsewhere; the state itself
        // is never left mid-mutation (checks precede all effects)
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, NamespaceState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Number of stored namespaces.
    pub fn len(&self) -> usize {
        self.read().table.len()
    }

    /// Whether nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.read().table.is_empty()
    }
}

impl NamespaceStore for NamespaceStorage {
    fn add(&self, namespace: Namespace) -> Result<Namespace, StorageError> {
        let mut state = self.write();

        if state.table.contains_key(&namespace.id()) {
            return Err(StorageError::AlreadyExists { id: namespace.id() });
        }
        if !state
            .index
            .check_available(&namespace.parent(), namespace.name(), None)
        {
            debug!(
                id = %namespace.id(),
                name = %namespace.name(),
                scope = %parent_scope_label(namespace.parent()),
                "namespace add rejected: name collision"
            );
            return Err(StorageError::NameCollision {
                scope: parent_scope_label(namespace.parent()),
                name: namespace.name().clone(),
            });
        }
        let links = state.parent_links();
        check_parent_link(&links, namespace.id(), namespace.parent())?;

        // Commit: index and table together, under the same write guard
        state
            .index
            .reserve(namespace.parent(), namespace.name().clone(), namespace.id());
        state.table.insert(namespace.id(), namespace.clone());
        debug!(id = %namespace.id(), name = %namespace.name(), "namespace added");
        Ok(namespace)
    }

    fn get(&self, id: EntityId) -> Result<Namespace, StorageError> {
        self.read()
            .table
            .get(&id)
            .cloned()
            .ok_or(StorageError::NotFound { id })
    }

    fn update(&self, id: EntityId, changed: Namespace) -> Result<Namespace, StorageError> {
        let mut state = self.write();

        let current = state
            .table
            .get(&id)
            .cloned()
            .ok_or(StorageError::NotFound { id })?;
        if changed.id() != id {
            return Err(ValidationError::new("id", "identifier is immutable").into());
        }
        if !state
            .index
            .check_available(&changed.parent(), changed.name(), Some(id))
        {
            debug!(
                id = %id,
                name = %changed.name(),
                scope = %parent_scope_label(changed.parent()),
                "namespace update rejected: name collision"
            );
            return Err(StorageError::NameCollision {
                scope: parent_scope_label(changed.parent()),
                name: changed.name().clone(),
            });
        }
        let links = state.parent_links();
        check_parent_link(&links, id, changed.parent())?;

        // Commit: release the old slot, swap the entity, reserve the new
        // slot, all under the same write guard
        state.index.release(&current.parent(), current.name());
        state
            .index
            .reserve(changed.parent(), changed.name().clone(), id);
        state.table.insert(id, changed.clone());
        debug!(id = %id, name = %changed.name(), "namespace updated");
        Ok(changed)
    }

    fn delete(&self, id: EntityId) -> Result<(), StorageError> {
        let mut state = self.write();

        let removed = state
            .table
            .remove(&id)
            .ok_or(StorageError::NotFound { id })?;
        state.index.release(&removed.parent(), removed.name());
        debug!(id = %id, name = %removed.name(), "namespace deleted");
        Ok(())
    }

    fn list_by_container(&self, parent: Option<EntityId>) -> Vec<Namespace> {
        self.read()
            .table
            .values()
            .filter(|ns| ns.parent() == parent)
            .cloned()
            .collect()
    }

    fn exists(&self, id: EntityId) -> bool {
        self.read().table.contains_key(&id)
    }
}

/// Table and index for repositories, guarded together.
#[derive(Debug, Default)]
struct RepositoryState {
    table: HashMap<EntityId, Repository>,
    index: UniquenessIndex<EntityId>,
}

/// In-memory storage engine for [`Repository`] entities.
///
/// Enforces identifier uniqueness and per-namespace name uniqueness.
/// The owning namespace is a weak id reference; whether it exists in a
/// [`NamespaceStorage`] is the composing layer's concern, so this engine
/// never takes a lock spanning both stores.
#[derive(Debug, Default)]
pub struct RepositoryStorage {
    state: RwLock<RepositoryState>,
}

impl RepositoryStorage {
    /// Create an empty engine.
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, RepositoryState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, RepositoryState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Number of stored repositories.
    pub fn len(&self) -> usize {
        self.read().table.len()
    }

    /// Whether nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.read().table.is_empty()
    }
}

impl RepositoryStore for RepositoryStorage {
    fn add(&self, repository: Repository) -> Result<Repository, StorageError> {
        let mut state = self.write();

        if state.table.contains_key(&repository.id()) {
            return Err(StorageError::AlreadyExists {
                id: repository.id(),
            });
        }
        if !state
            .index
            .check_available(&repository.namespace(), repository.name(), None)
        {
            debug!(
                id = %repository.id(),
                name = %repository.name(),
                namespace = %repository.namespace(),
                "repository add rejected: name collision"
            );
            return Err(StorageError::NameCollision {
                scope: format!("namespace {}", repository.namespace()),
                name: repository.name().clone(),
            });
        }

        state.index.reserve(
            repository.namespace(),
            repository.name().clone(),
            repository.id(),
        );
        state.table.insert(repository.id(), repository.clone());
        debug!(id = %repository.id(), name = %repository.name(), "repository added");
        Ok(repository)
    }

    fn get(&self, id: EntityId) -> Result<Repository, StorageError> {
        self.read()
            .table
            .get(&id)
            .cloned()
            .ok_or(StorageError::NotFound { id })
    }

    fn update(&self, id: EntityId, changed: Repository) -> Result<Repository, StorageError> {
        let mut state = self.write();

        let current = state
            .table
            .get(&id)
            .cloned()
            .ok_or(StorageError::NotFound { id })?;
        if changed.id() != id {
            return Err(ValidationError::new("id", "identifier is immutable").into());
        }
        if !state
            .index
            .check_available(&changed.namespace(), changed.name(), Some(id))
        {
            debug!(
                id = %id,
                name = %changed.name(),
                namespace = %changed.namespace(),
                "repository update rejected: name collision"
            );
            return Err(StorageError::NameCollision {
                scope: format!("namespace {}", changed.namespace()),
                name: changed.name().clone(),
            });
        }

        state.index.release(&current.namespace(), current.name());
        state
            .index
            .reserve(changed.namespace(), changed.name().clone(), id);
        state.table.insert(id, changed.clone());
        debug!(id = %id, name = %changed.name(), "repository updated");
        Ok(changed)
    }

    fn delete(&self, id: EntityId) -> Result<(), StorageError> {
        let mut state = self.write();

        let removed = state
            .table
            .remove(&id)
            .ok_or(StorageError::NotFound { id })?;
        state.index.release(&removed.namespace(), removed.name());
        debug!(id = %id, name = %removed.name(), "repository deleted");
        Ok(())
    }

    fn list_by_container(&self, namespace: EntityId) -> Vec<Repository> {
        self.read()
            .table
            .values()
            .filter(|repo| repo.namespace() == namespace)
            .cloned()
            .collect()
    }

    fn exists(&self, id: EntityId) -> bool {
        self.read().table.contains_key(&id)
    }
}
