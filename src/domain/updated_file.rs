//! Rewritten file contents produced by an update

use serde::{Deserialize, Serialize};

/// What the file writer should do with an updated file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileOperation {
    /// The file did not exist before the update
    Create,
    /// The file existed and its content changed
    Update,
    /// The update removed the file
    Delete,
}

impl FileOperation {
    /// Returns the lowercase wire name of the operation
    pub fn as_str(&self) -> &'static str {
        match self {
            FileOperation::Create => "create",
            FileOperation::Update => "update",
            FileOperation::Delete => "delete",
        }
    }
}

/// A manifest or lockfile rewritten by the update
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdatedFile {
    /// Path of the file within the repository
    pub path: String,
    /// Full new content of the file
    pub content: String,
    /// Operation for the file writer
    pub operation: FileOperation,
}

impl UpdatedFile {
    /// Creates an updated file record
    pub fn new(
        path: impl Into<String>,
        content: impl Into<String>,
        operation: FileOperation,
    ) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            operation,
        }
    }

    /// Creates an update record for an existing file
    pub fn update(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self::new(path, content, FileOperation::Update)
    }

    /// Creates a create record for a new file
    pub fn create(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self::new(path, content, FileOperation::Create)
    }

    /// Creates a delete record; the content is empty
    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(path, "", FileOperation::Delete)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_as_str() {
        assert_eq!(FileOperation::Create.as_str(), "create");
        assert_eq!(FileOperation::Update.as_str(), "update");
        assert_eq!(FileOperation::Delete.as_str(), "delete");
    }

    #[test]
    fn test_constructors() {
        let created = UpdatedFile::create("Gemfile", "gem 'rails'");
        assert_eq!(created.operation, FileOperation::Create);

        let updated = UpdatedFile::update("Gemfile.lock", "GEM\n");
        assert_eq!(updated.operation, FileOperation::Update);

        let deleted = UpdatedFile::delete("old.gemspec");
        assert_eq!(deleted.operation, FileOperation::Delete);
        assert!(deleted.content.is_empty());
    }

    #[test]
    fn test_serde_operation_lowercase() {
        let json = serde_json::to_string(&FileOperation::Update).unwrap();
        assert_eq!(json, "\"update\"");
    }

    #[test]
    fn test_serde_round_trip() {
        let file = UpdatedFile::update("Cargo.toml", "[package]\n");
        let json = serde_json::to_string(&file).unwrap();
        let parsed: UpdatedFile = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, file);
    }
}
