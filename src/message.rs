//! Message-builder collaborator seam
//!
//! Rendering commit and pull-request text is a thick integration layer
//! that lives outside this core. The core only defines the seam: the
//! opaque Message a builder returns and the context it receives, passed
//! through from the change verbatim.

use crate::domain::{CommitMessageOptions, Credential, Dependency, JobSource, UpdatedFile};
use serde::{Deserialize, Serialize};

/// An opaque message produced by a message builder
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Commit message for the update commit
    pub commit_message: String,
    /// Pull-request title
    pub pr_name: String,
    /// Pull-request body
    pub pr_message: String,
}

/// Everything a message builder receives, borrowed from the change
#[derive(Debug, Clone, Copy)]
pub struct MessageContext<'a> {
    pub source: &'a JobSource,
    pub dependencies: &'a [Dependency],
    pub files: &'a [UpdatedFile],
    pub credentials: &'a [Credential],
    pub commit_message_options: &'a CommitMessageOptions,
}

/// Trait for the external message-building collaborator
///
/// Treated as a black box by this core.
pub trait MessageBuilder {
    /// Builds the message for a change
    fn build(&self, context: MessageContext<'_>) -> Message;
}
