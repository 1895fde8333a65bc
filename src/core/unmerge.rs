//! Reconstruct the full view of a variant from its child file and parent.

use std::path::Path;

use super::{document::Document, error::DocumentError, variant};

/// Resolve the document at `path`.
///
/// Files outside a `base-SUFFIX` directory, and child variants whose parent
/// file does not exist, are returned as loaded.
pub fn unmerge(path: &Path) -> Result<Document, DocumentError> {
    match variant::parent_path(path) {
        Some(parent) if parent.is_file() => resolve(path, &parent),
        _ => {
            tracing::debug!("{} has no parent, loading as standalone", path.display());
            Document::load(path)
        }
    }
}

/// Resolve a child file against an explicit parent file.
pub fn resolve(child_path: &Path, parent_path: &Path) -> Result<Document, DocumentError> {
    tracing::debug!(
        "resolving {} against {}",
        child_path.display(),
        parent_path.display()
    );
    let parent = Document::load(parent_path)?;
    let child = Document::load(child_path)?;
    Ok(overlay(parent, child))
}

/// Overlay a child onto its parent; the child wins on every collision.
///
/// The parent's `info` is parent-only metadata and never part of the result.
pub fn overlay(parent: Document, child: Document) -> Document {
    let Document {
        mut entries,
        mut alerts,
        info: _,
    } = parent;

    entries.extend(child.entries);
    alerts.extend(child.alerts);

    Document {
        entries,
        alerts,
        info: child.info,
    }
}
