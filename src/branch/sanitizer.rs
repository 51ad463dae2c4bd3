//! Git-ref sanitization and length enforcement
//!
//! Branch names must satisfy version-control ref restrictions: only
//! `A-Za-z0-9/-_.(){}`, no `/.` sequence, no runs of `.` or `/`, no
//! trailing `.`. Over-long names are truncated by splicing a content
//! digest over the tail so distinct long inputs stay distinct.

use regex::Regex;
use sha2::{Digest, Sha256};
use std::sync::LazyLock;

// Anything outside the git-ref-legal charset is dropped
static ILLEGAL_CHARS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9/\-_.(){}]").unwrap());

// Runs collapse to a single character
static DOT_RUN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\.{2,}").unwrap());
static SLASH_RUN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"/{2,}").unwrap());

// A path component starting with `.` is rewritten to `dot-`
static SLASH_DOT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"/\.").unwrap());

/// Sanitizes a candidate name into a git-ref-legal one
///
/// Idempotent: sanitizing a sanitized name is a no-op.
pub fn sanitize_ref(name: &str) -> String {
    let name = ILLEGAL_CHARS_RE.replace_all(name, "");
    let name = DOT_RUN_RE.replace_all(&name, ".");
    let name = SLASH_RUN_RE.replace_all(&name, "/");
    let name = SLASH_DOT_RE.replace_all(&name, "/dot-");
    name.trim_end_matches('.').to_string()
}

/// Enforces a maximum name length by hash-splicing the tail
///
/// If the name fits it is returned unchanged. Otherwise the sha256 hex
/// digest of the full name replaces the tail starting at
/// `max_length - digest_length`, keeping the result collision-resistant
/// for distinct long inputs. The result never exceeds `max_length`.
pub fn enforce_max_length(name: &str, max_length: usize) -> String {
    if name.len() <= max_length {
        return name.to_string();
    }

    let mut hasher = Sha256::new();
    hasher.update(name.as_bytes());
    let digest = format!("{:x}", hasher.finalize());
    let digest_len = digest.len().min(max_length);
    let keep = max_length - digest_len;

    // Sanitized names are ASCII, so byte slicing is safe
    format!("{}{}", &name[..keep], &digest[..digest_len])
}
