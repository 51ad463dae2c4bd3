//! Property tests for depchange
//!
//! Exercises the laws the core promises:
//! - Version comparison is a total order (antisymmetric, transitive)
//! - Sanitization is idempotent
//! - Length enforcement never exceeds the bound

use depchange::branch::{enforce_max_length, sanitize_ref};
use depchange::version::{BaseScheme, DockerJavaScheme, VersionScheme};
use proptest::prelude::*;
use std::cmp::Ordering;

/// Dotted version strings mixing numeric and text segments
fn version_string() -> impl Strategy<Value = String> {
    proptest::collection::vec(
        prop_oneof![
            (0u64..2000).prop_map(|n| n.to_string()),
            "[a-z]{1,5}".prop_map(|s| s),
        ],
        1..6,
    )
    .prop_map(|segments| segments.join("."))
}

/// Docker/Java tags: numeric release, optional `_<update>` part
fn docker_tag() -> impl Strategy<Value = String> {
    (
        proptest::collection::vec(0u64..500, 1..4),
        proptest::option::of(0u64..100),
    )
        .prop_map(|(release, update)| {
            let release = release
                .iter()
                .map(u64::to_string)
                .collect::<Vec<_>>()
                .join(".");
            match update {
                Some(update) => format!("{}_{}", release, update),
                None => release,
            }
        })
}

proptest! {
    #[test]
    fn base_compare_is_reflexive(raw in version_string()) {
        let a = BaseScheme.parse(&raw).unwrap();
        let b = BaseScheme.parse(&raw).unwrap();
        prop_assert_eq!(a.cmp(&b), Ordering::Equal);
    }

    #[test]
    fn base_compare_is_antisymmetric(x in version_string(), y in version_string()) {
        let a = BaseScheme.parse(&x).unwrap();
        let b = BaseScheme.parse(&y).unwrap();
        prop_assert_eq!(a.cmp(&b), b.cmp(&a).reverse());
    }

    #[test]
    fn base_compare_is_transitive(
        x in version_string(),
        y in version_string(),
        z in version_string(),
    ) {
        let mut versions = vec![
            BaseScheme.parse(&x).unwrap(),
            BaseScheme.parse(&y).unwrap(),
            BaseScheme.parse(&z).unwrap(),
        ];
        versions.sort();
        prop_assert!(versions[0] <= versions[1]);
        prop_assert!(versions[1] <= versions[2]);
        prop_assert!(versions[0] <= versions[2]);
    }

    #[test]
    fn docker_compare_is_antisymmetric(x in docker_tag(), y in docker_tag()) {
        let a = DockerJavaScheme.parse(&x).unwrap();
        let b = DockerJavaScheme.parse(&y).unwrap();
        prop_assert_eq!(a.cmp(&b), b.cmp(&a).reverse());
    }

    #[test]
    fn docker_tags_are_valid(raw in docker_tag()) {
        prop_assert!(DockerJavaScheme.is_valid(&raw));
    }

    #[test]
    fn docker_is_valid_never_panics(raw in "\\PC{0,40}") {
        // Arbitrary input: the predicate returns a bool, never an error
        let _ = DockerJavaScheme.is_valid(&raw);
    }

    #[test]
    fn sanitize_is_idempotent(raw in "\\PC{0,200}") {
        let once = sanitize_ref(&raw);
        prop_assert_eq!(sanitize_ref(&once), once.clone());
    }

    #[test]
    fn sanitized_names_are_ref_legal(raw in "\\PC{0,200}") {
        let name = sanitize_ref(&raw);
        let all_ref_legal = name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "/-_.(){}".contains(c));
        prop_assert!(all_ref_legal);
        prop_assert!(!name.contains("/."));
        prop_assert!(!name.contains(".."));
        prop_assert!(!name.contains("//"));
        prop_assert!(!name.ends_with('.'));
    }

    #[test]
    fn enforced_length_never_exceeds_bound(
        raw in "\\PC{0,300}",
        max_length in 16usize..200,
    ) {
        let name = enforce_max_length(&sanitize_ref(&raw), max_length);
        prop_assert!(name.len() <= max_length);
    }

    #[test]
    fn enforcement_is_deterministic(raw in "\\PC{0,300}") {
        let sanitized = sanitize_ref(&raw);
        prop_assert_eq!(
            enforce_max_length(&sanitized, 64),
            enforce_max_length(&sanitized, 64)
        );
    }
}
