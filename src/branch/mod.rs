//! Deterministic branch naming for a dependency change
//!
//! Derives the working-branch ref for an update from the change itself:
//! no clock, no randomness, same inputs always give the same name. The
//! name carries prefix, ecosystem, directory, target branch, the updated
//! dependency names, and a version suffix, sanitized to git-ref legality
//! and optionally length-bounded.

mod sanitizer;

pub use sanitizer::{enforce_max_length, sanitize_ref};

use crate::domain::{ecosystems, Dependency, DependencyChange, Requirement};
use crate::error::BranchError;
use regex::Regex;
use std::sync::LazyLock;

// A full-length git object id used as a version
static GIT_SHA_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9a-fA-F]{40}$").unwrap());

// Requirement operators rewritten to filesystem-safe tokens, multi-char
// operators first so e.g. `>=` never decays into `gt-=`
const OPERATOR_REWRITES: &[(&str, &str)] = &[
    ("!=", "neq-"),
    (">=", "gte-"),
    ("<=", "lte-"),
    ("~>", "tw-"),
    ("~=", "approx-"),
    ("==", "eq-"),
    ("||", "or-"),
    ("^", "tw-"),
    ("~", "approx-"),
    (">", "gt-"),
    ("<", "lt-"),
    ("*", "star"),
    (",", "-and-"),
];

/// Derives a deterministic, git-ref-legal branch name from a change
pub struct BranchNamer<'a> {
    dependencies: &'a [Dependency],
    directory: &'a str,
    target_branch: Option<&'a str>,
    separator: String,
    prefix: String,
    max_length: Option<usize>,
}

impl<'a> BranchNamer<'a> {
    /// The default ref prefix identifying the tool
    pub const DEFAULT_PREFIX: &'static str = "dependabot";

    /// Creates a namer for a change with default prefix and separator
    pub fn new(change: &'a DependencyChange) -> Self {
        Self {
            dependencies: change.dependencies(),
            directory: &change.job().source.directory,
            target_branch: change.job().source.branch.as_deref(),
            separator: "/".to_string(),
            prefix: Self::DEFAULT_PREFIX.to_string(),
            max_length: None,
        }
    }

    /// Sets the path separator (builder pattern)
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Sets the ref prefix (builder pattern)
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Bounds the name length (builder pattern)
    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    /// Derives the branch name
    pub fn branch_name(&self) -> Result<String, BranchError> {
        let name_part = self.dependency_name_part()?;
        let leaf = match self.version_suffix() {
            Some(suffix) if !suffix.is_empty() && !name_part.is_empty() => {
                format!("{}-{}", name_part, suffix)
            }
            Some(suffix) if !suffix.is_empty() => suffix,
            _ => name_part,
        };

        let mut parts: Vec<&str> = vec![self.prefix.as_str()];
        if let Some(dep) = self.dependencies.first() {
            parts.push(&dep.ecosystem);
        }
        let directory = self.directory.trim_matches('/');
        if !directory.is_empty() {
            parts.push(directory);
        }
        if let Some(branch) = self.target_branch {
            parts.push(branch);
        }
        if !leaf.is_empty() {
            parts.push(&leaf);
        }

        let composed = parts
            .iter()
            .filter(|p| !p.is_empty())
            .cloned()
            .collect::<Vec<_>>()
            .join("/");
        let composed = if self.separator == "/" {
            composed
        } else {
            composed.replace('/', &self.separator)
        };

        let sanitized = sanitize_ref(&composed);
        Ok(match self.max_length {
            Some(max_length) => enforce_max_length(&sanitized, max_length),
            None => sanitized,
        })
    }

    /// Step 1: the dependency-name segment
    fn dependency_name_part(&self) -> Result<String, BranchError> {
        if self.dependencies.len() > 1 && self.updating_a_property() {
            return self.property_name();
        }
        if self.dependencies.len() > 1 && self.updating_a_dependency_set() {
            return self.dependency_set_name();
        }

        let joined = self
            .dependencies
            .iter()
            .map(|d| d.name.as_str())
            .collect::<Vec<_>>()
            .join("-and-");
        Ok(joined
            .chars()
            .filter(|c| !matches!(c, ':' | '[' | ']' | '@'))
            .collect())
    }

    fn updating_a_property(&self) -> bool {
        self.first_requirements()
            .iter()
            .any(|r| r.property_name().is_some())
    }

    fn updating_a_dependency_set(&self) -> bool {
        self.first_requirements()
            .iter()
            .any(|r| r.dependency_set().is_some())
    }

    fn first_requirements(&self) -> &[Requirement] {
        self.dependencies
            .first()
            .map_or(&[], |d| d.requirements.as_slice())
    }

    // Unreachable given the guard in dependency_name_part, but surfaced
    // rather than defaulted if the metadata vanishes between the check
    // and the lookup
    fn property_name(&self) -> Result<String, BranchError> {
        self.first_requirements()
            .iter()
            .find_map(|r| r.property_name())
            .map(str::to_string)
            .ok_or_else(|| BranchError::missing_property_name(self.first_dependency_name()))
    }

    fn dependency_set_name(&self) -> Result<String, BranchError> {
        self.first_requirements()
            .iter()
            .find_map(|r| r.dependency_set())
            .map(str::to_string)
            .ok_or_else(|| BranchError::missing_dependency_set(self.first_dependency_name()))
    }

    fn first_dependency_name(&self) -> &str {
        self.dependencies.first().map_or("", |d| d.name.as_str())
    }

    /// Step 2: the version suffix, computed from the first dependency only
    fn version_suffix(&self) -> Option<String> {
        let dep = self.dependencies.first()?;

        if dep.removed {
            return Some("removed".to_string());
        }

        match &dep.version {
            // Library: only requirement ranges (or refs) changed
            None => match self.changed_ref(dep) {
                Some(new_ref) => Some(new_ref),
                None => self.sanitized_requirement_string(dep),
            },
            // Pinned version
            Some(version) if GIT_SHA_RE.is_match(version) => match self.changed_ref(dep) {
                Some(new_ref) => Some(new_ref),
                None => Some(version.chars().take(7).collect()),
            },
            Some(version)
                if dep.previous_version.as_deref() == Some(version)
                    && dep.ecosystem == ecosystems::DOCKER =>
            {
                self.digest_suffix(dep).or_else(|| Some(version.clone()))
            }
            Some(version) => Some(version.clone()),
        }
    }

    /// A single unambiguous new ref, when the distinct previous and new
    /// ref sets differ and neither holds more than one value
    fn changed_ref(&self, dep: &Dependency) -> Option<String> {
        let previous_refs = distinct_refs(&dep.previous_requirements);
        let new_refs = distinct_refs(&dep.requirements);
        if previous_refs.len() > 1 || new_refs.len() > 1 {
            return None;
        }
        if previous_refs != new_refs {
            return new_refs.into_iter().next().map(str::to_string);
        }
        None
    }

    /// The new requirement string with operators rewritten
    ///
    /// The new requirement is the one absent from the previous set,
    /// preferring a gemspec-style manifest when several changed.
    fn sanitized_requirement_string(&self, dep: &Dependency) -> Option<String> {
        let updated: Vec<&Requirement> = dep
            .requirements
            .iter()
            .filter(|r| !dep.previous_requirements.contains(r))
            .collect();
        let requirement = updated
            .iter()
            .find(|r| r.file.ends_with(".gemspec"))
            .or_else(|| updated.first())?;
        let raw = requirement.requirement.as_deref()?;
        Some(rewrite_requirement_operators(raw))
    }

    /// First 7 characters of the digest hash in the updated requirements
    fn digest_suffix(&self, dep: &Dependency) -> Option<String> {
        let digest = dep.requirements.iter().find_map(|r| r.source_digest())?;
        let hash = digest.rsplit(':').next().unwrap_or(digest);
        Some(hash.chars().take(7).collect())
    }
}

/// Distinct source refs across a requirement list, in first-seen order
fn distinct_refs(requirements: &[Requirement]) -> Vec<&str> {
    let mut refs = Vec::new();
    for requirement in requirements {
        if let Some(ref_name) = requirement.source_ref() {
            if !refs.contains(&ref_name) {
                refs.push(ref_name);
            }
        }
    }
    refs
}

/// Rewrites symbolic requirement operators to filesystem-safe tokens
fn rewrite_requirement_operators(raw: &str) -> String {
    let mut rewritten: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    for (operator, token) in OPERATOR_REWRITES {
        rewritten = rewritten.replace(operator, token);
    }
    rewritten
}
