//! storage::error
//!
//! Error taxonomy for storage operations.
//!
//! All variants are non-fatal and meant to be surfaced to the immediate
//! caller. The core never retries; a sync layer that hits a
//! [`StorageError::NameCollision`] resolves it and calls again.

use thiserror::Error;

use crate::entity::types::{EntityId, EntityName, ValidationError};

/// Errors from hierarchy admissibility checks.
///
/// `DanglingParent` is a referential-integrity failure, deliberately
/// distinct from the two cycle-shaped variants.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum HierarchyViolation {
    /// The proposed parent is the namespace itself.
    #[error("namespace {id} cannot be its own parent")]
    SelfReference {
        /// The namespace being re-parented.
        id: EntityId,
    },

    /// The proposed link closes a cycle through `via`.
    #[error("parenting namespace {id} under {via} would create a cycle")]
    Cycle {
        /// The namespace being re-parented.
        id: EntityId,
        /// The proposed parent through which the chain returns to `id`.
        via: EntityId,
    },

    /// The proposed parent is not present in storage.
    #[error("parent namespace {parent} does not exist")]
    DanglingParent {
        /// The missing parent id.
        parent: EntityId,
    },
}

/// Errors from storage engine operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StorageError {
    /// The entity failed its own model validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// `add` was called with an identifier already stored.
    #[error("an entity with identifier {id} already exists")]
    AlreadyExists {
        /// The duplicate identifier.
        id: EntityId,
    },

    /// No stored entity has the given identifier.
    #[error("no entity found with identifier {id}")]
    NotFound {
        /// The missing identifier.
        id: EntityId,
    },

    /// The target `(scope, name)` slot is occupied by a different entity.
    #[error("name `{name}` is already taken in scope {scope}")]
    NameCollision {
        /// Human-readable rendering of the container scope.
        scope: String,
        /// The colliding name.
        name: EntityName,
    },

    /// The proposed parent link was rejected by the hierarchy validator.
    #[error(transparent)]
    Hierarchy(#[from] HierarchyViolation),
}
