//! Version parsing and ordering for package ecosystems
//!
//! This module provides:
//! - Segment and Version types with a uniform total-ordering contract
//! - The VersionScheme trait implemented once per ecosystem dialect
//! - The base dotted-numeric scheme used by most ecosystems
//! - The composite release+update scheme used by Java-style Docker tags
//! - The VersionRegistry mapping ecosystem ids to their scheme

mod base;
mod docker_java;
mod registry;

pub use base::BaseScheme;
pub use docker_java::DockerJavaScheme;
pub use registry::VersionRegistry;

use crate::error::VersionError;
use std::cmp::Ordering;
use std::fmt;

/// A single atom of a parsed version string
///
/// Numeric segments compare numerically, text segments compare lexically,
/// and any text segment sorts below any numeric segment (so a pre-release
/// like `1.0.alpha` sorts below `1.0.0`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    /// Numeric segment (e.g., the `192` in `8.0.192`)
    Number(u64),
    /// Non-numeric segment (e.g., the `alpha` in `1.0.0-alpha`)
    Text(String),
}

impl PartialOrd for Segment {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Segment {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Segment::Number(a), Segment::Number(b)) => a.cmp(b),
            (Segment::Text(a), Segment::Text(b)) => a.cmp(b),
            (Segment::Text(_), Segment::Number(_)) => Ordering::Less,
            (Segment::Number(_), Segment::Text(_)) => Ordering::Greater,
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Number(n) => write!(f, "{}", n),
            Segment::Text(s) => write!(f, "{}", s),
        }
    }
}

/// An opaque comparable version value
///
/// A version is an ordered tuple of components, each component an ordered
/// sequence of segments. The base scheme produces a single component;
/// composite schemes (Docker/Java) produce several, compared
/// lexicographically left to right with the most significant first.
///
/// Two versions produced by the same scheme are totally ordered. Comparing
/// versions across schemes is unsupported; the result is mechanical, not
/// meaningful.
#[derive(Debug, Clone)]
pub struct Version {
    raw: String,
    components: Vec<Vec<Segment>>,
}

impl Version {
    pub(crate) fn new(raw: impl Into<String>, components: Vec<Vec<Segment>>) -> Self {
        Self {
            raw: raw.into(),
            components,
        }
    }

    /// Returns the raw string this version was parsed from
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Returns the ordered components of this version
    pub fn components(&self) -> &[Vec<Segment>] {
        &self.components
    }

    /// Returns the ordered sequence of atoms across all components
    ///
    /// Used by upstream sorting and bucketing logic.
    pub fn segments(&self) -> impl Iterator<Item = &Segment> {
        self.components.iter().flatten()
    }
}

/// Compares two segment sequences, padding the shorter side with a
/// conceptual lowest-possible sentinel so `1.0 < 1.0.1`.
fn compare_segments(a: &[Segment], b: &[Segment]) -> Ordering {
    let len = a.len().max(b.len());
    for i in 0..len {
        let ordering = match (a.get(i), b.get(i)) {
            (Some(x), Some(y)) => x.cmp(y),
            (Some(_), None) => Ordering::Greater,
            (None, Some(_)) => Ordering::Less,
            (None, None) => Ordering::Equal,
        };
        if ordering != Ordering::Equal {
            return ordering;
        }
    }
    Ordering::Equal
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        let len = self.components.len().max(other.components.len());
        for i in 0..len {
            static EMPTY: &[Segment] = &[];
            let a = self.components.get(i).map_or(EMPTY, |c| c.as_slice());
            let b = other.components.get(i).map_or(EMPTY, |c| c.as_slice());
            let ordering = compare_segments(a, b);
            if ordering != Ordering::Equal {
                return ordering;
            }
        }
        Ordering::Equal
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

/// Trait for ecosystem version schemes
///
/// One implementation per version-string dialect. Parsing is permissive by
/// design: upstream data is externally sourced, so unusual but decomposable
/// strings must parse; only strings that cannot be decomposed fail.
pub trait VersionScheme: fmt::Debug + Send + Sync {
    /// Parse a raw version string into a comparable value
    fn parse(&self, raw: &str) -> Result<Version, VersionError>;

    /// Returns true if the raw string is a plausible version
    ///
    /// Never surfaces a parse error; malformed input is simply `false`.
    fn is_valid(&self, raw: &str) -> bool {
        self.parse(raw).is_ok()
    }
}
