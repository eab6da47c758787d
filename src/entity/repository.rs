//! entity::repository
//!
//! The `Repository` entity: a leaf that holds code, issues, and code
//! requests, belonging to exactly one namespace.
//!
//! # Fields
//!
//! - `id` - immutable identifier, assigned at construction
//! - `name` - mandatory, unique within its namespace (enforced by storage)
//! - `namespace` - mandatory reference (by id) to the owning namespace
//!
//! # Example
//!
//! ```
//! use isshub_core::entity::namespace::Namespace;
//! use isshub_core::entity::repository::Repository;
//! use isshub_core::entity::types::NamespaceKind;
//!
//! let org = Namespace::new("acme", NamespaceKind::Organization).unwrap();
//! let repo = Repository::new("widgets", org.id()).unwrap();
//! assert_eq!(repo.namespace(), org.id());
//! ```

use serde::{Deserialize, Serialize};

use super::types::{EntityId, EntityName, ValidationError};

/// A repository holds code, issues, code requests...
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    id: EntityId,
    name: EntityName,
    namespace: EntityId,
}

impl Repository {
    /// Create a repository in the given namespace with a fresh identifier.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if `name` is empty or whitespace-only.
    pub fn new(name: impl Into<String>, namespace: EntityId) -> Result<Self, ValidationError> {
        Ok(Self {
            id: EntityId::new(),
            name: EntityName::new(name)?,
            namespace,
        })
    }

    /// Create a repository with a caller-supplied identifier.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if `name` is empty or whitespace-only.
    pub fn with_id(
        id: EntityId,
        name: impl Into<String>,
        namespace: EntityId,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            id,
            name: EntityName::new(name)?,
            namespace,
        })
    }

    /// The immutable identifier.
    pub fn id(&self) -> EntityId {
        self.id
    }

    /// The repository name.
    pub fn name(&self) -> &EntityName {
        &self.name
    }

    /// The id of the owning namespace.
    pub fn namespace(&self) -> EntityId {
        self.namespace
    }

    /// Rename the repository, revalidating the new name.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if the new name is empty.
    pub fn set_name(&mut self, name: impl Into<String>) -> Result<(), ValidationError> {
        self.name = EntityName::new(name)?;
        Ok(())
    }

    /// Move the repository to another namespace.
    ///
    /// Sibling-name uniqueness in the target namespace is checked by the
    /// storage engine at `update` time.
    pub fn set_namespace(&mut self, namespace: EntityId) {
        self.namespace = namespace;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_repository() {
        let ns = EntityId::new();
        let repo = Repository::new("widgets", ns).unwrap();
        assert_eq!(repo.name().as_str(), "widgets");
        assert_eq!(repo.namespace(), ns);
    }

    #[test]
    fn empty_name_rejected() {
        let err = Repository::new("", EntityId::new()).unwrap_err();
        assert_eq!(err.field, "name");
    }

    #[test]
    fn with_id_keeps_supplied_identifier() {
        let id = EntityId::new();
        let repo = Repository::with_id(id, "widgets", EntityId::new()).unwrap();
        assert_eq!(repo.id(), id);
    }

    #[test]
    fn set_namespace_moves() {
        let mut repo = Repository::new("widgets", EntityId::new()).unwrap();
        let target = EntityId::new();
        repo.set_namespace(target);
        assert_eq!(repo.namespace(), target);
    }

    #[test]
    fn serde_roundtrip() {
        let repo = Repository::new("widgets", EntityId::new()).unwrap();
        let json = serde_json::to_string(&repo).unwrap();
        let parsed: Repository = serde_json::from_str(&json).unwrap();
        assert_eq!(repo, parsed);
    }

    #[test]
    fn serde_rejects_missing_namespace() {
        let json = r#"{
            "id": "6c1810f0-a9a3-4b2a-9a3f-0cd87e5a4d1e",
            "name": "widgets"
        }"#;
        assert!(serde_json::from_str::<Repository>(json).is_err());
    }
}
