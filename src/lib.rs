//! isshub-core - Domain storage for the isshub issue-tracking aggregator
//!
//! This crate is the persistence-agnostic domain core: validated entities
//! (namespaces and the repositories they contain) plus storage engines that
//! enforce the structural invariants of the containment hierarchy.
//!
//! # Architecture
//!
//! The codebase follows a strict layered architecture:
//!
//! - [`entity`] - Entity model: strong types and construction-time validation
//! - [`storage`] - Storage contracts, invariant checks, and in-memory engines
//!
//! Outward-facing concerns (web presentation, synchronization with remote
//! code-hosting platforms, authentication, durable persistence formats) are
//! external collaborators. They consume the storage contracts defined in
//! [`storage::store`] and never see the engines' internals.
//!
//! # Correctness Invariants
//!
//! The storage engines maintain the following invariants across every
//! sequence of successful mutations:
//!
//! 1. No namespace is ever its own ancestor (no self-loop, no cycle)
//! 2. Within one container scope, sibling names are unique
//! 3. The uniqueness index and the entity table always agree
//! 4. Mutations are all-or-nothing; no partially-stored state is observable

pub mod entity;
pub mod storage;
