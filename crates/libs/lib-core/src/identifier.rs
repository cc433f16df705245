//! Identifier validation and path-containment guard (spec §4.1).
//!
//! Every dataset id, document id, classifier name, and model id supplied by
//! a client is validated here before it ever reaches the filesystem.

use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

/// `segment(.segment)*` where `segment` is one or more `[A-Za-z0-9_]`.
///
/// The two-dot rule is intentional: it forbids `..` and empty segments,
/// which eliminates path traversal through identifiers without needing a
/// regex crate.
pub fn validate_identifier(s: &str) -> Result<()> {
    if s.is_empty() {
        return Err(Error::InvalidName(s.to_string()));
    }
    for segment in s.split('.') {
        if segment.is_empty() || !segment.bytes().all(is_ident_byte) {
            return Err(Error::InvalidName(s.to_string()));
        }
    }
    Ok(())
}

fn is_ident_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Resolves `candidate` under `root` after canonicalizing both, and confirms
/// `root` is a strict parent of `candidate`. Called before every filesystem
/// operation derived from client input. A negative result is a programmer
/// error: the identifier guard should have caught it earlier.
pub fn is_subpath(root: &Path, candidate: &Path) -> Result<()> {
    let root = root
        .canonicalize()
        .map_err(|e| Error::Io(e.to_string()))?;
    let candidate_parent = candidate
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| candidate.to_path_buf());
    let resolved_parent = canonicalize_best_effort(&candidate_parent);
    let file_name = candidate.file_name();
    let resolved = match file_name {
        Some(name) => resolved_parent.join(name),
        None => resolved_parent,
    };
    if resolved.starts_with(&root) && resolved != root {
        Ok(())
    } else {
        Err(Error::PathEscape)
    }
}

/// `Path::canonicalize` requires the path to exist; callers may pass a
/// not-yet-created sibling (e.g. a `.tmp` publish target), so fall back to
/// the unresolved path when canonicalization fails.
fn canonicalize_best_effort(p: &Path) -> PathBuf {
    p.canonicalize().unwrap_or_else(|_| p.to_path_buf())
}


// endregion: Unit Test
