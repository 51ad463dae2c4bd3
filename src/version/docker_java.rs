//! Composite release+update version scheme for Java-style Docker tags
//!
//! Handles tags like:
//! - `8.0.192` (release only)
//! - `8.0.192_12` (release plus trailing update number)
//! - `11.0.18_10-jdk` (hyphenated release variants)
//!
//! The tag is split at the first underscore into a release part and an
//! optional update part. Each part is ordered independently with the base
//! scheme; the release part dominates and the update part only breaks
//! ties. An absent or non-numeric update part is the zero value, so
//! `11.0.18` and `11.0.18_0` compare equal.

use crate::error::VersionError;
use crate::version::{BaseScheme, Segment, Version, VersionScheme};

/// Version scheme for Java-style Docker tags
#[derive(Debug, Clone, Copy, Default)]
pub struct DockerJavaScheme;

impl DockerJavaScheme {
    /// Parses the update part; absent or non-digit-leading means zero
    fn update_segments(update: Option<&str>) -> Result<Vec<Segment>, VersionError> {
        match update {
            Some(part) if part.starts_with(|c: char| c.is_ascii_digit()) => {
                BaseScheme::parse_segments(part)
            }
            _ => Ok(vec![Segment::Number(0)]),
        }
    }

    /// Renders release segments into a canonical SemVer-comparable string
    ///
    /// The first three numeric segments form the core (zero-padded when
    /// fewer), everything after becomes a pre-release suffix:
    /// `8.0` -> `8.0.0`, `1.0.0.alpha` -> `1.0.0-alpha`.
    fn canonical_release(segments: &[Segment]) -> String {
        let numeric_len = segments
            .iter()
            .take_while(|s| matches!(s, Segment::Number(_)))
            .count()
            .min(3);

        let mut core: Vec<String> = segments[..numeric_len]
            .iter()
            .map(|s| s.to_string())
            .collect();
        while core.len() < 3 {
            core.push("0".to_string());
        }

        let rest: Vec<String> = segments[numeric_len..]
            .iter()
            .map(|s| s.to_string())
            .collect();

        if rest.is_empty() {
            core.join(".")
        } else {
            format!("{}-{}", core.join("."), rest.join("."))
        }
    }
}

impl VersionScheme for DockerJavaScheme {
    fn parse(&self, raw: &str) -> Result<Version, VersionError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(VersionError::malformed(raw, "empty version string"));
        }

        let (release_part, update_part) = match trimmed.split_once('_') {
            Some((release, update)) => (release, Some(update)),
            None => (trimmed, None),
        };

        // Docker tags commonly use `-` where SemVer would use `.`
        let release = BaseScheme::parse_segments(&release_part.replace('-', "."))?;
        let update = Self::update_segments(update_part)?;

        Ok(Version::new(trimmed, vec![release, update]))
    }

    /// Validity means the release component alone is plausible: it must
    /// lead with a number and render into a string SemVer accepts. Parse
    /// failures become `false`, never errors.
    fn is_valid(&self, raw: &str) -> bool {
        let Ok(version) = self.parse(raw) else {
            return false;
        };
        let release = &version.components()[0];
        if !matches!(release.first(), Some(Segment::Number(_))) {
            return false;
        }
        semver::Version::parse(&Self::canonical_release(release)).is_ok()
    }
}
