//! Registry mapping ecosystem ids to version schemes
//!
//! Each ecosystem plugin registers its scheme once at process startup;
//! the update pipeline looks schemes up many times from parallel workers
//! afterwards. The registry is an explicit object passed by reference,
//! not ambient global state.

use crate::domain::ecosystems;
use crate::error::RegistryError;
use crate::version::{BaseScheme, DockerJavaScheme, VersionScheme};
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

/// Process-wide mapping from ecosystem id to version scheme
///
/// Registration is last-write-wins, which lets tests override a default
/// scheme. There is no removal; entries live as long as the registry.
pub struct VersionRegistry {
    schemes: RwLock<HashMap<String, Arc<dyn VersionScheme>>>,
}

impl VersionRegistry {
    /// Creates an empty registry
    pub fn new() -> Self {
        Self {
            schemes: RwLock::new(HashMap::new()),
        }
    }

    /// Creates a registry with the well-known ecosystems registered
    ///
    /// The base scheme covers the dotted-numeric ecosystems; the composite
    /// scheme covers Docker.
    pub fn with_defaults() -> Self {
        let registry = Self::new();
        let base = Arc::new(BaseScheme);
        for ecosystem in ecosystems::DOTTED_NUMERIC {
            registry.register(*ecosystem, base.clone());
        }
        registry.register(ecosystems::DOCKER, Arc::new(DockerJavaScheme));
        registry
    }

    /// Registers a scheme for an ecosystem; the last registration wins
    pub fn register(&self, ecosystem: impl Into<String>, scheme: Arc<dyn VersionScheme>) {
        self.schemes
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(ecosystem.into(), scheme);
    }

    /// Looks up the scheme registered for an ecosystem
    pub fn get(&self, ecosystem: &str) -> Result<Arc<dyn VersionScheme>, RegistryError> {
        self.schemes
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(ecosystem)
            .cloned()
            .ok_or_else(|| RegistryError::no_version_scheme(ecosystem))
    }

    /// Returns true if a scheme is registered for the ecosystem
    pub fn contains(&self, ecosystem: &str) -> bool {
        self.schemes
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(ecosystem)
    }
}

impl Default for VersionRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
