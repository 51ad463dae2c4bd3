//! Core domain models for depchange
//!
//! This module contains the data entities flowing through the core:
//! - Ecosystem identifiers
//! - Dependency and Requirement records (read-only here)
//! - Job context for an update run
//! - Updated file contents and the change aggregate

mod change;
mod dependency;
pub mod ecosystem;
mod group;
mod job;
mod requirement;
mod updated_file;

pub use change::DependencyChange;
pub use dependency::Dependency;
pub use self::ecosystem as ecosystems;
pub use group::GroupRule;
pub use job::{CommitMessageOptions, Credential, Job, JobSource};
pub use requirement::{Requirement, RequirementMetadata, RequirementSource};
pub use updated_file::{FileOperation, UpdatedFile};
