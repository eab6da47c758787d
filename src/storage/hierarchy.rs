//! storage::hierarchy
//!
//! Admissibility checks for namespace parent links.
//!
//! # Architecture
//!
//! The containment hierarchy is a set of parent pointers over a flat
//! id-keyed table; "contains" is a lookup-driven walk, not a pointer
//! traversal, so no reference cycle can exist at the representation level
//! even when the logical graph would. This module decides, for a proposed
//! `(child, new_parent)` link, whether committing it would make the
//! logical graph cyclic.
//!
//! # Invariants
//!
//! - The check is pure: it reads a snapshot of parent links and never
//!   mutates anything
//! - The walk is O(depth) and always terminates, even on a snapshot that
//!   already contains a cycle
//!
//! # Example
//!
//! ```
//! use std::collections::HashMap;
//! use isshub_core::entity::types::EntityId;
//! use isshub_core::storage::hierarchy::check_parent_link;
//!
//! let a = EntityId::new();
//! let b = EntityId::new();
//! let mut links = HashMap::new();
//! links.insert(a, None);
//! links.insert(b, Some(a));
//!
//! // b is already under a; pushing a under b would close a 2-cycle
//! assert!(check_parent_link(&links, a, Some(b)).is_err());
//! // detaching is always admissible
//! assert!(check_parent_link(&links, a, None).is_ok());
//! ```

use std::collections::{HashMap, HashSet};

use crate::entity::types::EntityId;
use crate::storage::error::HierarchyViolation;

/// Snapshot of parent links: every stored namespace id maps to its parent
/// id, or `None` for a top-level namespace.
pub type ParentLinks = HashMap<EntityId, Option<EntityId>>;

/// Decide whether setting `child`'s parent to `new_parent` is admissible.
///
/// The walk starts at `new_parent` and follows parent pointers; if it
/// reaches `child` before running off the top of the hierarchy, the link
/// would close a cycle.
///
/// # Errors
///
/// - [`HierarchyViolation::SelfReference`] if `new_parent` is `child`
/// - [`HierarchyViolation::DanglingParent`] if `new_parent` is not a key
///   in `links`
/// - [`HierarchyViolation::Cycle`] if `child` is an ancestor of
///   `new_parent`
pub fn check_parent_link(
    links: &ParentLinks,
    child: EntityId,
    new_parent: Option<EntityId>,
) -> Result<(), HierarchyViolation> {
    let parent = match new_parent {
        // Detaching to top level is the terminal case of the walk
        None => return Ok(()),
        Some(parent) => parent,
    };

    // The trivial one-step cycle, rejected before the walk
    if parent == child {
        return Err(HierarchyViolation::SelfReference { id: child });
    }

    if !links.contains_key(&parent) {
        return Err(HierarchyViolation::DanglingParent { parent });
    }

    // Walk the ancestor chain of the proposed parent. The visited set
    // guards termination if the snapshot is already corrupt.
    let mut visited = HashSet::new();
    let mut current = parent;
    loop {
        if current == child {
            return Err(HierarchyViolation::Cycle { id: child, via: parent });
        }
        if !visited.insert(current) {
            return Ok(());
        }
        match links.get(&current) {
            Some(Some(next)) => current = *next,
            // Top of the hierarchy, or a link whose target was removed
            // out from under us; either way the chain cannot reach child
            Some(None) | None => return Ok(()),
        }
    }
}
