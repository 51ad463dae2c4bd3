//! Job context for an update run
//!
//! A job identifies where an update happens (provider, repo, directory,
//! target branch), the credentials the collaborators will need, and the
//! commit-message configuration to pass through to the message builder.
//! All of it is read-only for this core.

use serde::{Deserialize, Serialize};

/// The originating context of an update cycle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    /// Where the update is happening
    pub source: JobSource,
    /// Credentials forwarded verbatim to collaborators
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub credentials: Vec<Credential>,
    /// Commit-message configuration forwarded verbatim
    #[serde(default)]
    pub commit_message_options: CommitMessageOptions,
}

/// Repository location an update targets
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobSource {
    /// Hosting provider (e.g., `github`)
    pub provider: String,
    /// Repository slug (e.g., `owner/name`)
    pub repo: String,
    /// Directory within the repository holding the manifests
    pub directory: String,
    /// Target branch, when not the repository default
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
}

/// An opaque credential record forwarded to collaborators
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    /// Credential kind (e.g., `git_source`)
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

/// Commit-message configuration passed through to the message builder
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CommitMessageOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix_development: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_scope: Option<bool>,
}

impl Job {
    /// Creates a job with no credentials and default message options
    pub fn new(source: JobSource) -> Self {
        Self {
            source,
            credentials: Vec::new(),
            commit_message_options: CommitMessageOptions::default(),
        }
    }

    /// Sets the credentials (builder pattern)
    pub fn with_credentials(mut self, credentials: Vec<Credential>) -> Self {
        self.credentials = credentials;
        self
    }

    /// Sets the commit-message options (builder pattern)
    pub fn with_commit_message_options(mut self, options: CommitMessageOptions) -> Self {
        self.commit_message_options = options;
        self
    }
}

impl JobSource {
    /// Creates a source for a provider/repo/directory triple
    pub fn new(
        provider: impl Into<String>,
        repo: impl Into<String>,
        directory: impl Into<String>,
    ) -> Self {
        Self {
            provider: provider.into(),
            repo: repo.into(),
            directory: directory.into(),
            branch: None,
        }
    }

    /// Sets the target branch (builder pattern)
    pub fn with_branch(mut self, branch: impl Into<String>) -> Self {
        self.branch = Some(branch.into());
        self
    }
}

impl Credential {
    /// Creates a credential of the given kind
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            host: None,
            token: None,
        }
    }

    /// Sets the host (builder pattern)
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Sets the token (builder pattern)
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_source_new() {
        let source = JobSource::new("github", "owner/repo", "/");
        assert_eq!(source.provider, "github");
        assert_eq!(source.repo, "owner/repo");
        assert_eq!(source.directory, "/");
        assert!(source.branch.is_none());
    }

    #[test]
    fn test_job_source_with_branch() {
        let source = JobSource::new("github", "owner/repo", "/app").with_branch("main");
        assert_eq!(source.branch.as_deref(), Some("main"));
    }

    #[test]
    fn test_job_builders() {
        let job = Job::new(JobSource::new("github", "owner/repo", "/"))
            .with_credentials(vec![Credential::new("git_source")
                .with_host("github.com")
                .with_token("secret")])
            .with_commit_message_options(CommitMessageOptions {
                prefix: Some("chore".to_string()),
                ..Default::default()
            });
        assert_eq!(job.credentials.len(), 1);
        assert_eq!(job.credentials[0].host.as_deref(), Some("github.com"));
        assert_eq!(job.commit_message_options.prefix.as_deref(), Some("chore"));
    }

    #[test]
    fn test_serde_round_trip() {
        let job = Job::new(JobSource::new("github", "owner/repo", "/lib").with_branch("develop"));
        let json = serde_json::to_string(&job).unwrap();
        let parsed: Job = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, job);
    }
}
