//! entity::types
//!
//! Strong types for core domain concepts.
//!
//! # Types
//!
//! - [`EntityId`] - Universally-unique entity identifier
//! - [`EntityName`] - Validated entity name
//! - [`NamespaceKind`] - Closed enumeration of namespace kinds
//!
//! # Validation
//!
//! These types enforce validity at construction time. Invalid values
//! cannot be represented, preventing entire classes of bugs.
//!
//! # Examples
//!
//! ```
//! use isshub_core::entity::types::{EntityName, NamespaceKind};
//!
//! // Valid constructions
//! let name = EntityName::new("isshub").unwrap();
//! let kind: NamespaceKind = "organization".parse().unwrap();
//!
//! // Invalid constructions fail at creation time
//! assert!(EntityName::new("").is_err());
//! assert!(EntityName::new("   ").is_err());
//! assert!("club".parse::<NamespaceKind>().is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Error raised when a field fails entity validation.
///
/// Names the offending field so callers can surface precise messages.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid value for field `{field}`: {reason}")]
pub struct ValidationError {
    /// The name of the field that failed validation.
    pub field: &'static str,
    /// Why the value was rejected.
    pub reason: String,
}

impl ValidationError {
    /// Create a validation error for the given field.
    pub fn new(field: &'static str, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }
}

/// A universally-unique entity identifier.
///
/// Assigned once at entity creation and never reassigned; the storage
/// engines use it as the canonical key. Wraps a v4 UUID.
///
/// # Example
///
/// ```
/// use isshub_core::entity::types::EntityId;
///
/// let id = EntityId::new();
/// let other = EntityId::new();
/// assert_ne!(id, other);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(Uuid);

impl EntityId {
    /// Generate a fresh random identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap an existing UUID (e.g. one supplied by a sync layer).
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Get the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl From<Uuid> for EntityId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A validated entity name.
///
/// Names must be non-empty after trimming surrounding whitespace.
/// Uniqueness within a container scope is enforced by the storage
/// engines, not here.
///
/// # Example
///
/// ```
/// use isshub_core::entity::types::EntityName;
///
/// let name = EntityName::new("my-project").unwrap();
/// assert_eq!(name.as_str(), "my-project");
///
/// assert!(EntityName::new("").is_err());
/// assert!(EntityName::new("  \t").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EntityName(String);

impl EntityName {
    /// Create a new validated name.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] on field `name` if the value is empty
    /// or contains only whitespace.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::new("name", "name cannot be empty"));
        }
        Ok(Self(name))
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for EntityName {
    type Error = ValidationError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<EntityName> for String {
    fn from(name: EntityName) -> Self {
        name.0
    }
}

impl AsRef<str> for EntityName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EntityName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// All the available kinds of namespace.
///
/// This enumeration is closed: values outside it are rejected at
/// construction time with a [`ValidationError`].
///
/// # Example
///
/// ```
/// use isshub_core::entity::types::NamespaceKind;
///
/// let kind: NamespaceKind = "team".parse().unwrap();
/// assert_eq!(kind, NamespaceKind::Team);
/// assert_eq!(kind.as_str(), "team");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NamespaceKind {
    /// A top-level organization.
    Organization,
    /// A team inside an organization.
    Team,
    /// A free-form grouping.
    Group,
}

impl NamespaceKind {
    /// Get the canonical lowercase label for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Organization => "organization",
            Self::Team => "team",
            Self::Group => "group",
        }
    }
}

impl std::str::FromStr for NamespaceKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "organization" => Ok(Self::Organization),
            "team" => Ok(Self::Team),
            "group" => Ok(Self::Group),
            other => Err(ValidationError::new(
                "kind",
                format!("unknown namespace kind: {other}"),
            )),
        }
    }
}

impl std::fmt::Display for NamespaceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
