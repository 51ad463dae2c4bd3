//! Base dotted-numeric version scheme
//!
//! Handles the version dialect shared by most ecosystems:
//! - Dotted versions: `1.2.3`, `1.2`, `1.2.3.4`
//! - Pre-release suffixes: `1.0.0-alpha`, `2.0.0-rc1`, `5.0.0.RELEASE`
//! - Optional `v` prefix: `v1.9.0`
//!
//! Numeric segments compare numerically, non-numeric segments lexically,
//! and a shorter version sorts below a longer one sharing its prefix.

use crate::error::VersionError;
use crate::version::{Segment, Version, VersionScheme};

/// The default version scheme for dotted-numeric ecosystems
#[derive(Debug, Clone, Copy, Default)]
pub struct BaseScheme;

impl BaseScheme {
    /// Splits a raw string into ordered segments
    ///
    /// Splits on `.` and `-`; every piece must be non-empty ASCII
    /// alphanumeric. All-digit pieces become numeric segments, the rest
    /// text segments. Permissive on shape (any segment count), strict on
    /// characters.
    pub(crate) fn parse_segments(raw: &str) -> Result<Vec<Segment>, VersionError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(VersionError::malformed(raw, "empty version string"));
        }

        // A leading `v` before a digit is a tag convention, not a segment
        let normalized = match trimmed.strip_prefix('v') {
            Some(rest) if rest.starts_with(|c: char| c.is_ascii_digit()) => rest,
            _ => trimmed,
        };

        let mut segments = Vec::new();
        for piece in normalized.split(['.', '-']) {
            if piece.is_empty() {
                return Err(VersionError::malformed(raw, "empty segment"));
            }
            if !piece.chars().all(|c| c.is_ascii_alphanumeric()) {
                return Err(VersionError::malformed(
                    raw,
                    format!("illegal character in segment '{}'", piece),
                ));
            }
            if piece.chars().all(|c| c.is_ascii_digit()) {
                let number = piece.parse::<u64>().map_err(|_| {
                    VersionError::malformed(raw, format!("numeric segment '{}' out of range", piece))
                })?;
                segments.push(Segment::Number(number));
            } else {
                segments.push(Segment::Text(piece.to_string()));
            }
        }
        Ok(segments)
    }
}

impl VersionScheme for BaseScheme {
    fn parse(&self, raw: &str) -> Result<Version, VersionError> {
        let segments = Self::parse_segments(raw)?;
        Ok(Version::new(raw.trim(), vec![segments]))
    }
}
