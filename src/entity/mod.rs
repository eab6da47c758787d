//! entity
//!
//! The entity model: immutable-identity value definitions with
//! construction-time validation.
//!
//! # Modules
//!
//! - [`types`] - Strong types: EntityId, EntityName, NamespaceKind
//! - [`namespace`] - The Namespace entity
//! - [`repository`] - The Repository entity
//!
//! # Design Principles
//!
//! - Strong typing prevents invalid states at construction time
//! - Identifiers are assigned once and have no setters
//! - Parent/namespace links are weak id references, never live handles

pub mod namespace;
pub mod repository;
pub mod types;

// Re-export commonly used types
pub use namespace::Namespace;
pub use repository::Repository;
pub use types::{EntityId, EntityName, NamespaceKind, ValidationError};
