//! Application error types using thiserror
//!
//! Error hierarchy:
//! - VersionError: malformed version strings (validation)
//! - RegistryError: ecosystem lookup failures
//! - BranchError: branch-naming invariant violations

use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Version parsing related errors
    #[error(transparent)]
    Version(#[from] VersionError),

    /// Version registry related errors
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// Branch naming related errors
    #[error(transparent)]
    Branch(#[from] BranchError),
}

/// Errors raised while parsing a version string
///
/// These are validation errors: the `is_valid` entry points convert them
/// to a plain `false` and never surface them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VersionError {
    /// The raw string could not be decomposed into version segments
    #[error("malformed version '{raw}': {reason}")]
    Malformed { raw: String, reason: String },
}

/// Errors raised when resolving an ecosystem's version scheme
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// No version scheme registered for the ecosystem
    #[error("no version scheme registered for ecosystem '{ecosystem}'")]
    NoVersionScheme { ecosystem: String },
}

/// Errors raised while deriving a branch name
///
/// Both variants signal a broken invariant: the naming rule that selects
/// them has already checked the metadata exists. They are surfaced
/// immediately and never defaulted.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BranchError {
    /// A property-based name was selected but no requirement carries one
    #[error("expected a property name on the requirements of '{dependency}', found none")]
    MissingPropertyName { dependency: String },

    /// A dependency-set name was selected but no requirement carries one
    #[error("expected a dependency set on the requirements of '{dependency}', found none")]
    MissingDependencySet { dependency: String },
}

impl VersionError {
    /// Creates a new Malformed error
    pub fn malformed(raw: impl Into<String>, reason: impl Into<String>) -> Self {
        VersionError::Malformed {
            raw: raw.into(),
            reason: reason.into(),
        }
    }
}

impl RegistryError {
    /// Creates a new NoVersionScheme error
    pub fn no_version_scheme(ecosystem: impl Into<String>) -> Self {
        RegistryError::NoVersionScheme {
            ecosystem: ecosystem.into(),
        }
    }
}

impl BranchError {
    /// Creates a new MissingPropertyName error
    pub fn missing_property_name(dependency: impl Into<String>) -> Self {
        BranchError::MissingPropertyName {
            dependency: dependency.into(),
        }
    }

    /// Creates a new MissingDependencySet error
    pub fn missing_dependency_set(dependency: impl Into<String>) -> Self {
        BranchError::MissingDependencySet {
            dependency: dependency.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_error_malformed() {
        let err = VersionError::malformed("1..2", "empty segment");
        let msg = format!("{}", err);
        assert!(msg.contains("malformed version '1..2'"));
        assert!(msg.contains("empty segment"));
    }

    #[test]
    fn test_registry_error_no_version_scheme() {
        let err = RegistryError::no_version_scheme("hex");
        let msg = format!("{}", err);
        assert!(msg.contains("no version scheme registered"));
        assert!(msg.contains("hex"));
    }

    #[test]
    fn test_branch_error_missing_property_name() {
        let err = BranchError::missing_property_name("org.springframework:spring-core");
        let msg = format!("{}", err);
        assert!(msg.contains("property name"));
        assert!(msg.contains("spring-core"));
    }

    #[test]
    fn test_branch_error_missing_dependency_set() {
        let err = BranchError::missing_dependency_set("com.google.protobuf:protoc");
        let msg = format!("{}", err);
        assert!(msg.contains("dependency set"));
        assert!(msg.contains("protoc"));
    }

    #[test]
    fn test_app_error_from_version_error() {
        let version_err = VersionError::malformed("!!", "illegal character");
        let app_err: AppError = version_err.into();
        let msg = format!("{}", app_err);
        assert!(msg.contains("malformed version"));
    }

    #[test]
    fn test_app_error_from_registry_error() {
        let registry_err = RegistryError::no_version_scheme("pub");
        let app_err: AppError = registry_err.into();
        let msg = format!("{}", app_err);
        assert!(msg.contains("no version scheme"));
    }

    #[test]
    fn test_app_error_from_branch_error() {
        let branch_err = BranchError::missing_property_name("dep");
        let app_err: AppError = branch_err.into();
        let msg = format!("{}", app_err);
        assert!(msg.contains("property name"));
    }

    #[test]
    fn test_error_debug_trait() {
        let err = VersionError::malformed("x", "y");
        let debug = format!("{:?}", err);
        assert!(debug.contains("Malformed"));
    }
}
