//! storage::index
//!
//! Per-scope name occupancy tracking.
//!
//! # Architecture
//!
//! Each storage engine keeps one `UniquenessIndex` mapping
//! `(container scope, name)` to the occupying entity's id. The scope type
//! is generic: `Option<EntityId>` for namespaces (the parent, `None` for
//! top level) and `EntityId` for repositories (the owning namespace).
//!
//! # Invariants
//!
//! - The index is mutated only inside a store's exclusive write section,
//!   together with the entity-table mutation it accompanies
//! - Between operations, index and table agree: every stored entity's
//!   current `(scope, name)` is reserved, and nothing else is

use std::collections::HashMap;
use std::hash::Hash;

use crate::entity::types::{EntityId, EntityName};

/// Occupied `(scope, name)` slots for one entity type.
#[derive(Debug, Clone)]
pub struct UniquenessIndex<S> {
    slots: HashMap<(S, EntityName), EntityId>,
}

impl<S> Default for UniquenessIndex<S> {
    fn default() -> Self {
        Self {
            slots: HashMap::new(),
        }
    }
}

impl<S: Eq + Hash + Clone> UniquenessIndex<S> {
    /// Create an empty index.
    pub fn new() -> Self {
        Self {
            slots: HashMap::new(),
        }
    }

    /// Whether `name` is free in `scope`.
    ///
    /// Pass the entity's own id as `excluding` when re-validating an
    /// update: an entity does not collide with itself.
    pub fn check_available(
        &self,
        scope: &S,
        name: &EntityName,
        excluding: Option<EntityId>,
    ) -> bool {
        match self.slots.get(&(scope.clone(), name.clone())) {
            None => true,
            Some(holder) => excluding == Some(*holder),
        }
    }

    /// Record that `id` occupies `(scope, name)`.
    ///
    /// Called only after a mutation is accepted. Re-reserving a slot the
    /// same id already holds is a no-op; a different id taking a held
    /// slot indicates a missed `check_available` in the caller.
    pub fn reserve(&mut self, scope: S, name: EntityName, id: EntityId) {
        let previous = self.slots.insert((scope, name), id);
        debug_assert!(
            previous.is_none() || previous == Some(id),
            "reserve on a slot held by a different entity"
        );
    }

    /// Free the `(scope, name)` slot on deletion or move.
    pub fn release(&mut self, scope: &S, name: &EntityName) {
        self.slots.remove(&(scope.clone(), name.clone()));
    }

    /// The id currently holding `(scope, name)`, if any.
    pub fn holder(&self, scope: &S, name: &EntityName) -> Option<EntityId> {
        self.slots.get(&(scope.clone(), name.clone())).copied()
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether no slot is occupied.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
