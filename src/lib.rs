//! depchange - Version ordering and dependency-change modeling library
//!
//! This library provides the core pieces a multi-ecosystem dependency
//! updater needs between "a new version was resolved" and "a pull request
//! was opened":
//! - Ecosystem-aware version parsing with a uniform total-ordering contract
//! - A registry mapping ecosystem ids to their version scheme
//! - The DependencyChange snapshot aggregating one update cycle
//! - Deterministic, git-ref-legal branch naming derived from a change

pub mod branch;
pub mod domain;
pub mod error;
pub mod message;
pub mod version;
