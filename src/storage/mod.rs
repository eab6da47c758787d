//! storage
//!
//! The namespace/repository storage subsystem.
//!
//! # Modules
//!
//! - [`error`] - Error taxonomy for storage operations
//! - [`hierarchy`] - Admissibility checks for namespace parent links
//! - [`index`] - Per-scope name occupancy tracking
//! - [`store`] - Backend-agnostic storage contracts
//! - [`memory`] - In-memory storage engines
//!
//! # Design Principles
//!
//! - Every mutation is a single scoped transaction: exclusive access,
//!   all checks against one consistent snapshot, all effects committed
//!   together
//! - The hierarchy is a flat id-keyed table plus a lookup-driven walk;
//!   no entity ever holds a live handle to another
//! - Errors are values surfaced to the caller; the core never retries

pub mod error;
pub mod hierarchy;
pub mod index;
pub mod memory;
pub mod store;

// Re-export commonly used types
pub use error::{HierarchyViolation, StorageError};
pub use hierarchy::{check_parent_link, ParentLinks};
pub use index::UniquenessIndex;
pub use memory::{NamespaceStorage, RepositoryStorage};
pub use store::{NamespaceStore, RepositoryStore};
