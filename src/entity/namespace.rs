//! entity::namespace
//!
//! The `Namespace` entity: a hierarchical container for repositories and
//! other namespaces.
//!
//! # Fields
//!
//! - `id` - immutable identifier, assigned at construction
//! - `name` - mandatory, unique among siblings (enforced by storage)
//! - `kind` - mandatory, one of [`NamespaceKind`]
//! - `parent` - optional weak reference to the containing namespace's id
//! - `description` - optional free text
//!
//! The parent link is a relation, not ownership: navigation always goes
//! back through storage lookups, so no live handle to a parent exists that
//! could bypass the storage engine.
//!
//! # Example
//!
//! ```
//! use isshub_core::entity::namespace::Namespace;
//! use isshub_core::entity::types::NamespaceKind;
//!
//! let org = Namespace::new("acme", NamespaceKind::Organization).unwrap();
//! let team = Namespace::new("platform", NamespaceKind::Team)
//!     .unwrap()
//!     .with_parent(org.id())
//!     .with_description("Platform engineering");
//!
//! assert_eq!(team.parent(), Some(org.id()));
//! assert!(org.parent().is_none());
//! ```

use serde::{Deserialize, Serialize};

use super::types::{EntityId, EntityName, NamespaceKind, ValidationError};

/// A namespace can contain namespaces and repositories.
///
/// Equality covers the full content, so two revisions of the same logical
/// namespace compare unequal when any field differs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Namespace {
    id: EntityId,
    name: EntityName,
    kind: NamespaceKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    parent: Option<EntityId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
}

impl Namespace {
    /// Create a top-level namespace with a fresh identifier.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if `name` is empty or whitespace-only.
    pub fn new(name: impl Into<String>, kind: NamespaceKind) -> Result<Self, ValidationError> {
        Ok(Self {
            id: EntityId::new(),
            name: EntityName::new(name)?,
            kind,
            parent: None,
            description: None,
        })
    }

    /// Create a namespace with a caller-supplied identifier.
    ///
    /// Used by sync layers that carry identifiers assigned elsewhere.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if `name` is empty or whitespace-only.
    pub fn with_id(
        id: EntityId,
        name: impl Into<String>,
        kind: NamespaceKind,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            id,
            name: EntityName::new(name)?,
            kind,
            parent: None,
            description: None,
        })
    }

    /// Attach this namespace to a parent.
    pub fn with_parent(mut self, parent: EntityId) -> Self {
        self.parent = Some(parent);
        self
    }

    /// Attach a description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// The immutable identifier.
    pub fn id(&self) -> EntityId {
        self.id
    }

    /// The namespace name.
    pub fn name(&self) -> &EntityName {
        &self.name
    }

    /// The namespace kind.
    pub fn kind(&self) -> NamespaceKind {
        self.kind
    }

    /// The parent namespace id, or `None` for a top-level namespace.
    pub fn parent(&self) -> Option<EntityId> {
        self.parent
    }

    /// The description, or `None` if absent.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Rename the namespace, revalidating the new name.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if the new name is empty.
    pub fn set_name(&mut self, name: impl Into<String>) -> Result<(), ValidationError> {
        self.name = EntityName::new(name)?;
        Ok(())
    }

    /// Change the kind.
    pub fn set_kind(&mut self, kind: NamespaceKind) {
        self.kind = kind;
    }

    /// Re-parent the namespace. `None` detaches it to top level.
    ///
    /// Cycle admissibility is checked by the storage engine at
    /// `add`/`update` time, not here; the entity alone cannot see the
    /// rest of the hierarchy.
    pub fn set_parent(&mut self, parent: Option<EntityId>) {
        self.parent = parent;
    }

    /// Replace the description. `None` clears it.
    pub fn set_description(&mut self, description: Option<String>) {
        self.description = description;
    }
}
