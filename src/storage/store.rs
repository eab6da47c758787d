//! storage::store
//!
//! Storage contracts for the two entity types.
//!
//! # Design
//!
//! These traits are the backend-agnostic surface consumed by persistence
//! adapters and sync layers. An implementation may back them with an
//! in-memory table (see [`crate::storage::memory`]), a relational store,
//! or a document collection, as long as it honors the check-then-commit
//! contract documented on each operation:
//!
//! - Mutations are all-or-nothing; every check completes before any
//!   effect is applied
//! - `get` and `list_by_container` may run concurrently with each other;
//!   mutations are mutually exclusive with everything for their whole
//!   check-then-commit sequence
//! - Callers receive copies of stored entities, never handles that could
//!   bypass validation

use crate::entity::namespace::Namespace;
use crate::entity::repository::Repository;
use crate::entity::types::EntityId;
use crate::storage::error::StorageError;

/// Storage contract for [`Namespace`] entities.
pub trait NamespaceStore {
    /// Store a new namespace.
    ///
    /// # Errors
    ///
    /// - [`StorageError::AlreadyExists`] if the id is already stored
    /// - [`StorageError::NameCollision`] if a sibling in the same parent
    ///   scope already uses the name
    /// - [`StorageError::Hierarchy`] if the parent link is a
    ///   self-reference, closes a cycle, or points at a namespace that is
    ///   not stored
    fn add(&self, namespace: Namespace) -> Result<Namespace, StorageError>;

    /// Retrieve a namespace by id.
    ///
    /// # Errors
    ///
    /// - [`StorageError::NotFound`] if no namespace has the id
    fn get(&self, id: EntityId) -> Result<Namespace, StorageError>;

    /// Replace the stored namespace with `changed`, re-running every
    /// `add`-time check against the proposed state.
    ///
    /// A rename or a move across parents is expressed through this single
    /// transactional replace; the old name slot is released and the new
    /// one reserved atomically with the entity swap.
    ///
    /// # Errors
    ///
    /// - [`StorageError::NotFound`] if no namespace has `id`
    /// - [`StorageError::Validation`] if `changed` carries a different id
    ///   than the one addressed (identifiers are immutable)
    /// - [`StorageError::NameCollision`] / [`StorageError::Hierarchy`] as
    ///   for `add`, with the entity's own current slot excluded from the
    ///   collision check
    fn update(&self, id: EntityId, changed: Namespace) -> Result<Namespace, StorageError>;

    /// Remove a namespace and free its name slot.
    ///
    /// Does not cascade: children and contained repositories are a
    /// caller-level concern.
    ///
    /// # Errors
    ///
    /// - [`StorageError::NotFound`] if no namespace has the id
    fn delete(&self, id: EntityId) -> Result<(), StorageError>;

    /// All namespaces whose parent is `parent` (`None` for top level).
    ///
    /// An empty scope yields an empty vec, not an error.
    fn list_by_container(&self, parent: Option<EntityId>) -> Vec<Namespace>;

    /// Whether a namespace with the given id is stored.
    fn exists(&self, id: EntityId) -> bool;
}

/// Storage contract for [`Repository`] entities.
pub trait RepositoryStore {
    /// Store a new repository.
    ///
    /// The owning namespace is referenced by id only; whether it exists
    /// in a namespace store is the composing layer's concern.
    ///
    /// # Errors
    ///
    /// - [`StorageError::AlreadyExists`] if the id is already stored
    /// - [`StorageError::NameCollision`] if the namespace already holds a
    ///   repository with the name
    fn add(&self, repository: Repository) -> Result<Repository, StorageError>;

    /// Retrieve a repository by id.
    ///
    /// # Errors
    ///
    /// - [`StorageError::NotFound`] if no repository has the id
    fn get(&self, id: EntityId) -> Result<Repository, StorageError>;

    /// Replace the stored repository with `changed`, re-running every
    /// `add`-time check. Moves across namespaces go through here as a
    /// single transactional replace.
    ///
    /// # Errors
    ///
    /// - [`StorageError::NotFound`] if no repository has `id`
    /// - [`StorageError::Validation`] if `changed` carries a different id
    /// - [`StorageError::NameCollision`] if the target slot is occupied
    ///   by a different repository
    fn update(&self, id: EntityId, changed: Repository) -> Result<Repository, StorageError>;

    /// Remove a repository and free its name slot.
    ///
    /// # Errors
    ///
    /// - [`StorageError::NotFound`] if no repository has the id
    fn delete(&self, id: EntityId) -> Result<(), StorageError>;

    /// All repositories owned by `namespace`.
    ///
    /// An empty scope yields an empty vec, not an error.
    fn list_by_container(&self, namespace: EntityId) -> Vec<Repository>;

    /// Whether a repository with the given id is stored.
    fn exists(&self, id: EntityId) -> bool;
}
