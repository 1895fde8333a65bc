//! Bring a locale document up to date with the template's key set.

use std::path::Path;

use super::{
    document::{Document, Section},
    error::DocumentError,
    unmerge::unmerge,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    /// The document is a computed parent and was left alone.
    Skipped,
    /// Number of placeholder keys added.
    Synced { added: usize },
}

impl SyncOutcome {
    pub fn added(&self) -> usize {
        match self {
            SyncOutcome::Skipped => 0,
            SyncOutcome::Synced { added } => *added,
        }
    }
}

/// Add every template key missing from `doc` with an empty value.
///
/// Existing values are never touched, empty ones included.
pub fn sync_document(doc: &mut Document, template: &Document) -> SyncOutcome {
    if doc.is_merged() {
        return SyncOutcome::Skipped;
    }
    let added = add_missing(&mut doc.entries, &template.entries)
        + add_missing(&mut doc.alerts, &template.alerts);
    SyncOutcome::Synced { added }
}

fn add_missing(target: &mut Section, template: &Section) -> usize {
    let mut added = 0;
    for key in template.keys() {
        if !target.contains_key(key) {
            target.insert(key.clone(), String::new());
            added += 1;
        }
    }
    added
}

/// Sync the file at `path` against `template`.
///
/// The file is resolved against its parent first so keys the parent already
/// provides are not shadowed by empty placeholders. The resolved, synced view
/// is written back only when keys were added.
pub fn sync_file(path: &Path, template: &Document) -> Result<SyncOutcome, DocumentError> {
    let mut doc = unmerge(path)?;
    let outcome = sync_document(&mut doc, template);
    match outcome {
        SyncOutcome::Skipped => {
            tracing::debug!("skipping merged file {}", path.display());
        }
        SyncOutcome::Synced { added: 0 } => {
            tracing::debug!("{} is up to date", path.display());
        }
        SyncOutcome::Synced { added } => {
            tracing::debug!("added {} key(s) to {}", added, path.display());
            doc.save(path)?;
        }
    }
    Ok(outcome)
}
