//! Requirement records attached to a dependency
//!
//! A requirement associates a manifest file with a constraint string and
//! optional metadata: the source ref/digest the dependency is pinned to,
//! the manifest property its version lives in, or the dependency set
//! (batched group) it belongs to. Consumed read-only by this core.

use serde::{Deserialize, Serialize};

/// A manifest-scoped constraint on a dependency
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Requirement {
    /// Path of the manifest file declaring the constraint
    pub file: String,
    /// The requirement string (e.g., `>= 1.0, < 2.0`), if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requirement: Option<String>,
    /// Dependency groups the constraint belongs to (e.g., `dev`)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub groups: Vec<String>,
    /// Version-control source pointer, when pinned to a ref or digest
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<RequirementSource>,
    /// Optional ecosystem-specific metadata
    #[serde(default, skip_serializing_if = "RequirementMetadata::is_empty")]
    pub metadata: RequirementMetadata,
}

/// A version-control source pointer for a requirement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct RequirementSource {
    /// Branch, tag, or commit ref
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ref_name: Option<String>,
    /// Content digest (e.g., `sha256:3ab0...`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub digest: Option<String>,
}

/// Ecosystem-specific requirement metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct RequirementMetadata {
    /// Manifest property holding the version (e.g., a Maven property)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property_name: Option<String>,
    /// Name of the dependency set this requirement belongs to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dependency_set: Option<String>,
}

impl Requirement {
    /// Creates a new requirement for a manifest file
    pub fn new(file: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            requirement: None,
            groups: Vec::new(),
            source: None,
            metadata: RequirementMetadata::default(),
        }
    }

    /// Sets the requirement string (builder pattern)
    pub fn with_requirement(mut self, requirement: impl Into<String>) -> Self {
        self.requirement = Some(requirement.into());
        self
    }

    /// Sets the dependency groups (builder pattern)
    pub fn with_groups(mut self, groups: Vec<String>) -> Self {
        self.groups = groups;
        self
    }

    /// Sets the source pointer (builder pattern)
    pub fn with_source(mut self, source: RequirementSource) -> Self {
        self.source = Some(source);
        self
    }

    /// Sets the property-name metadata (builder pattern)
    pub fn with_property_name(mut self, name: impl Into<String>) -> Self {
        self.metadata.property_name = Some(name.into());
        self
    }

    /// Sets the dependency-set metadata (builder pattern)
    pub fn with_dependency_set(mut self, set: impl Into<String>) -> Self {
        self.metadata.dependency_set = Some(set.into());
        self
    }

    /// Returns the property name, if any
    pub fn property_name(&self) -> Option<&str> {
        self.metadata.property_name.as_deref()
    }

    /// Returns the dependency-set name, if any
    pub fn dependency_set(&self) -> Option<&str> {
        self.metadata.dependency_set.as_deref()
    }

    /// Returns the source ref, if any
    pub fn source_ref(&self) -> Option<&str> {
        self.source.as_ref()?.ref_name.as_deref()
    }

    /// Returns the source digest, if any
    pub fn source_digest(&self) -> Option<&str> {
        self.source.as_ref()?.digest.as_deref()
    }
}

impl RequirementSource {
    /// Creates a source pointing at a ref
    pub fn from_ref(ref_name: impl Into<String>) -> Self {
        Self {
            ref_name: Some(ref_name.into()),
            digest: None,
        }
    }

    /// Creates a source pointing at a digest
    pub fn from_digest(digest: impl Into<String>) -> Self {
        Self {
            ref_name: None,
            digest: Some(digest.into()),
        }
    }
}

impl RequirementMetadata {
    /// Returns true if no metadata is present
    pub fn is_empty(&self) -> bool {
        self.property_name.is_none() && self.dependency_set.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requirement_new() {
        let req = Requirement::new("Gemfile");
        assert_eq!(req.file, "Gemfile");
        assert!(req.requirement.is_none());
        assert!(req.groups.is_empty());
        assert!(req.source.is_none());
        assert!(req.metadata.is_empty());
    }

    #[test]
    fn test_requirement_builders() {
        let req = Requirement::new("pom.xml")
            .with_requirement("1.2.3")
            .with_groups(vec!["test".to_string()])
            .with_property_name("spring.version");
        assert_eq!(req.requirement.as_deref(), Some("1.2.3"));
        assert_eq!(req.groups, vec!["test"]);
        assert_eq!(req.property_name(), Some("spring.version"));
        assert!(req.dependency_set().is_none());
    }

    #[test]
    fn test_requirement_source_accessors() {
        let req = Requirement::new("Dockerfile").with_source(RequirementSource {
            ref_name: Some("v2".to_string()),
            digest: Some("sha256:abc123".to_string()),
        });
        assert_eq!(req.source_ref(), Some("v2"));
        assert_eq!(req.source_digest(), Some("sha256:abc123"));
    }

    #[test]
    fn test_requirement_source_constructors() {
        let from_ref = RequirementSource::from_ref("main");
        assert_eq!(from_ref.ref_name.as_deref(), Some("main"));
        assert!(from_ref.digest.is_none());

        let from_digest = RequirementSource::from_digest("sha256:ff00");
        assert!(from_digest.ref_name.is_none());
        assert_eq!(from_digest.digest.as_deref(), Some("sha256:ff00"));
    }

    #[test]
    fn test_metadata_is_empty() {
        assert!(RequirementMetadata::default().is_empty());
        let with_set = Requirement::new("build.gradle").with_dependency_set("protobuf");
        assert!(!with_set.metadata.is_empty());
    }

    #[test]
    fn test_serde_round_trip() {
        let req = Requirement::new("Gemfile")
            .with_requirement("~> 1.2")
            .with_source(RequirementSource::from_ref("v1.2.0"));
        let json = serde_json::to_string(&req).unwrap();
        let parsed: Requirement = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, req);
    }

    #[test]
    fn test_serde_skips_empty_fields() {
        let json = serde_json::to_string(&Requirement::new("Gemfile")).unwrap();
        assert_eq!(json, r#"{"file":"Gemfile"}"#);
    }
}
