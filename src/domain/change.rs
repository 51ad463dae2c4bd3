//! The dependency-change aggregate
//!
//! A DependencyChange bundles everything one update cycle produced: the
//! originating job, the updated dependencies, the rewritten files, and an
//! optional group rule. It is a frozen snapshot; every derived view is
//! computed from the owned data and the message is built at most once.

use super::{Dependency, GroupRule, Job, UpdatedFile};
use crate::message::{Message, MessageBuilder, MessageContext};
use serde_json::json;
use std::sync::OnceLock;

/// A single unit of dependency change, created once per update cycle
#[derive(Debug)]
pub struct DependencyChange {
    job: Job,
    dependencies: Vec<Dependency>,
    updated_files: Vec<UpdatedFile>,
    group: Option<GroupRule>,
    message: OnceLock<Message>,
}

impl DependencyChange {
    /// Creates a change; the data is owned and frozen from here on
    pub fn new(
        job: Job,
        dependencies: Vec<Dependency>,
        updated_files: Vec<UpdatedFile>,
        group: Option<GroupRule>,
    ) -> Self {
        Self {
            job,
            dependencies,
            updated_files,
            group,
            message: OnceLock::new(),
        }
    }

    /// Returns the originating job context
    pub fn job(&self) -> &Job {
        &self.job
    }

    /// Returns the updated dependencies in their given order
    pub fn dependencies(&self) -> &[Dependency] {
        &self.dependencies
    }

    /// Returns the rewritten files in their given order
    pub fn updated_files(&self) -> &[UpdatedFile] {
        &self.updated_files
    }

    /// Returns the group rule, if the change is part of a batched update
    pub fn group(&self) -> Option<&GroupRule> {
        self.group.as_ref()
    }

    /// Returns true iff a group rule was supplied
    pub fn is_grouped(&self) -> bool {
        self.group.is_some()
    }

    /// Joins the per-dependency `name ( from a to b )` fragments
    ///
    /// Dependency order is preserved; nothing is deduplicated.
    pub fn humanized_summary(&self) -> String {
        self.dependencies
            .iter()
            .map(Dependency::humanized)
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Returns the plain serializable records for the file writer
    pub fn serialized_files(&self) -> Vec<serde_json::Value> {
        self.updated_files
            .iter()
            .map(|file| {
                json!({
                    "path": file.path,
                    "content": file.content,
                    "operation": file.operation.as_str(),
                })
            })
            .collect()
    }

    /// Builds the change message, at most once per instance
    ///
    /// The builder receives the job source, dependencies, files,
    /// credentials, and commit-message options verbatim. Concurrent
    /// callers observe a single initialization.
    pub fn message(&self, builder: &dyn MessageBuilder) -> &Message {
        self.message.get_or_init(|| {
            builder.build(MessageContext {
                source: &self.job.source,
                dependencies: &self.dependencies,
                files: &self.updated_files,
                credentials: &self.job.credentials,
                commit_message_options: &self.job.commit_message_options,
            })
        })
    }
}
