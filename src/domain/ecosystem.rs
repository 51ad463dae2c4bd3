//! Well-known package ecosystem identifiers
//!
//! Ecosystem ids are open-ended strings so plugins can register new ones
//! at startup; the constants here are the ids the default registry knows.

/// Ruby / Bundler
pub const BUNDLER: &str = "bundler";
/// Rust / Cargo
pub const CARGO: &str = "cargo";
/// PHP / Composer
pub const COMPOSER: &str = "composer";
/// Docker image tags
pub const DOCKER: &str = "docker";
/// Go modules
pub const GO_MODULES: &str = "go_modules";
/// Java / Gradle
pub const GRADLE: &str = "gradle";
/// Java / Maven
pub const MAVEN: &str = "maven";
/// Node.js / npm and yarn
pub const NPM_AND_YARN: &str = "npm_and_yarn";
/// Python / pip
pub const PIP: &str = "pip";

/// Ecosystems whose versions follow the base dotted-numeric scheme
pub const DOTTED_NUMERIC: &[&str] = &[
    BUNDLER,
    CARGO,
    COMPOSER,
    GO_MODULES,
    GRADLE,
    MAVEN,
    NPM_AND_YARN,
    PIP,
];

/// Returns all well-known ecosystem ids
pub fn all() -> Vec<&'static str> {
    let mut ids = DOTTED_NUMERIC.to_vec();
    ids.push(DOCKER);
    ids
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_includes_docker() {
        assert!(all().contains(&DOCKER));
    }

    #[test]
    fn test_dotted_numeric_excludes_docker() {
        assert!(!DOTTED_NUMERIC.contains(&DOCKER));
    }

    #[test]
    fn test_ids_are_unique() {
        let ids = all();
        let mut deduped = ids.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(ids.len(), deduped.len());
    }
}
