//! Dependency information structures

use super::Requirement;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single package and the manifest locations constraining it
///
/// Owned by the update pipeline and immutable once constructed for a
/// given change; this core only reads it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dependency {
    /// Package name
    pub name: String,
    /// Resolved version after the update, if one exists in a lockfile
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Resolved version before the update
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_version: Option<String>,
    /// Requirements after the update, in manifest order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub requirements: Vec<Requirement>,
    /// Requirements before the update, in manifest order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub previous_requirements: Vec<Requirement>,
    /// The ecosystem this dependency belongs to
    pub ecosystem: String,
    /// Whether the update removed this dependency entirely
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub removed: bool,
}

impl Dependency {
    /// Creates a new dependency with no versions or requirements
    pub fn new(name: impl Into<String>, ecosystem: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: None,
            previous_version: None,
            requirements: Vec::new(),
            previous_requirements: Vec::new(),
            ecosystem: ecosystem.into(),
            removed: false,
        }
    }

    /// Sets the new resolved version (builder pattern)
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Sets the previous resolved version (builder pattern)
    pub fn with_previous_version(mut self, version: impl Into<String>) -> Self {
        self.previous_version = Some(version.into());
        self
    }

    /// Sets the updated requirements (builder pattern)
    pub fn with_requirements(mut self, requirements: Vec<Requirement>) -> Self {
        self.requirements = requirements;
        self
    }

    /// Sets the previous requirements (builder pattern)
    pub fn with_previous_requirements(mut self, requirements: Vec<Requirement>) -> Self {
        self.previous_requirements = requirements;
        self
    }

    /// Marks the dependency as removed (builder pattern)
    pub fn removed(mut self) -> Self {
        self.removed = true;
        self
    }

    /// Returns true if this dependency is a library
    ///
    /// A library has no resolved lockfile version; only its requirement
    /// ranges change.
    pub fn library(&self) -> bool {
        self.version.is_none()
    }

    /// Renders the `name ( from a to b )` summary fragment
    pub fn humanized(&self) -> String {
        format!(
            "{} ( from {} to {} )",
            self.name,
            self.previous_version.as_deref().unwrap_or("unknown"),
            self.version.as_deref().unwrap_or("unknown"),
        )
    }
}

impl fmt::Display for Dependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}@{} [{}]",
            self.name,
            self.version.as_deref().unwrap_or("unresolved"),
            self.ecosystem
        )
    }
}
