//! Factor two sibling variants into a shared parent plus per-variant diffs.
//!
//! Both variants are resolved through [`unmerge`](super::unmerge::unmerge)
//! first, so merging is always done against full views and repeated merges
//! are idempotent. Each key is classified by identity across both variants:
//!
//! - **shared**: equal, non-empty values. Promoted to the parent and removed
//!   from both variants.
//! - **diverged**: different non-empty values. Removed from the parent if it
//!   was previously shared, kept in both variants.
//! - **unresolved**: empty in either variant, or present in only one. The
//!   parent entry is left as it was, and the key stays with the variants.

use std::path::Path;

use super::{
    document::{Document, Section},
    error::{MergeError, OrderingError},
    unmerge::unmerge,
};

/// Section labels used in ordering diagnostics.
const ENTRIES_SECTION: &str = "top-level keys";
const ALERTS_SECTION: &str = "ALERTS";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeOptions {
    /// Fail instead of warning when the variants list keys in different order.
    pub strict_order: bool,
}

/// Key counts from one merge, across both sections.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeStats {
    /// Keys whose value is now held by the parent.
    pub promoted: usize,
    /// Previously shared keys removed from the parent.
    pub reverted: usize,
    /// Keys left with the variants because a value is missing or empty.
    pub unresolved: usize,
}

impl std::ops::AddAssign for MergeStats {
    fn add_assign(&mut self, other: Self) {
        self.promoted += other.promoted;
        self.reverted += other.reverted;
        self.unresolved += other.unresolved;
    }
}

/// The three documents produced by a merge.
#[derive(Debug, Clone, PartialEq)]
pub struct Merged {
    pub first: Document,
    pub second: Document,
    pub parent: Document,
    pub stats: MergeStats,
}

/// Merge the variants at `first` and `second` into the parent at `output`,
/// rewriting all three files.
///
/// Nothing is written when the variants fail the ordering check.
pub fn merge(
    first: &Path,
    second: &Path,
    output: &Path,
    options: MergeOptions,
) -> Result<MergeStats, MergeError> {
    let first_doc = unmerge(first)?;
    let second_doc = unmerge(second)?;
    let previous = Document::load_or_default(output)?;

    let merged = merge_documents(&first_doc, &second_doc, &previous, options)?;

    merged.first.save(first)?;
    merged.second.save(second)?;
    merged.parent.save(output)?;

    tracing::debug!(
        "merged {} and {} into {} ({} promoted, {} reverted, {} unresolved)",
        first.display(),
        second.display(),
        output.display(),
        merged.stats.promoted,
        merged.stats.reverted,
        merged.stats.unresolved
    );

    Ok(merged.stats)
}

/// Merge two resolved variants against the previous parent document.
pub fn merge_documents(
    first: &Document,
    second: &Document,
    previous: &Document,
    options: MergeOptions,
) -> Result<Merged, OrderingError> {
    check_order(&first.entries, &second.entries, ENTRIES_SECTION, options)?;
    check_order(&first.alerts, &second.alerts, ALERTS_SECTION, options)?;

    let entries = reconcile(&first.entries, &second.entries, &previous.entries);
    let alerts = reconcile(&first.alerts, &second.alerts, &previous.alerts);

    let mut parent = Document {
        entries: entries.shared,
        alerts: alerts.shared,
        info: previous.info.clone(),
    };
    parent.mark_merged();

    let mut stats = entries.stats;
    stats += alerts.stats;

    Ok(Merged {
        first: Document {
            entries: entries.first,
            alerts: alerts.first,
            info: first.info.clone(),
        },
        second: Document {
            entries: entries.second,
            alerts: alerts.second,
            info: second.info.clone(),
        },
        parent,
        stats,
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KeyState<'a> {
    Shared(&'a str),
    Diverged,
    Unresolved,
}

fn classify<'a>(first: Option<&'a String>, second: Option<&'a String>) -> KeyState<'a> {
    match (first, second) {
        (Some(a), Some(b)) if a.is_empty() || b.is_empty() => KeyState::Unresolved,
        (Some(a), Some(b)) if a == b => KeyState::Shared(a),
        (Some(_), Some(_)) => KeyState::Diverged,
        _ => KeyState::Unresolved,
    }
}

struct Reconciled {
    shared: Section,
    first: Section,
    second: Section,
    stats: MergeStats,
}

/// Build the new parent and variant sections from read-only inputs.
fn reconcile(first: &Section, second: &Section, previous: &Section) -> Reconciled {
    let mut shared = previous.clone();
    let mut stats = MergeStats::default();

    let keys = first
        .keys()
        .chain(second.keys().filter(|key| !first.contains_key(*key)));

    for key in keys {
        match classify(first.get(key), second.get(key)) {
            KeyState::Shared(value) => {
                shared.insert(key.clone(), value.to_string());
                stats.promoted += 1;
            }
            KeyState::Diverged => {
                if shared.shift_remove(key).is_some() {
                    stats.reverted += 1;
                }
            }
            KeyState::Unresolved => stats.unresolved += 1,
        }
    }

    let is_promoted =
        |key: &String| matches!(classify(first.get(key), second.get(key)), KeyState::Shared(_));
    let retain = |section: &Section| -> Section {
        section
            .iter()
            .filter(|&(key, _)| !is_promoted(key))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    };

    Reconciled {
        first: retain(first),
        second: retain(second),
        shared,
        stats,
    }
}

/// Compare the key sequences of both variants position by position.
fn check_order(
    first: &Section,
    second: &Section,
    section: &'static str,
    options: MergeOptions,
) -> Result<(), OrderingError> {
    let Some(err) = first_order_mismatch(first, second, section) else {
        return Ok(());
    };
    if options.strict_order {
        return Err(err);
    }
    tracing::warn!("{}; reconciling by key instead of position", err);
    Ok(())
}

fn first_order_mismatch(
    first: &Section,
    second: &Section,
    section: &'static str,
) -> Option<OrderingError> {
    let len = first.len().max(second.len());
    (0..len).find_map(|position| {
        let left = first.get_index(position).map(|(key, _)| key.as_str());
        let right = second.get_index(position).map(|(key, _)| key.as_str());
        (left != right).then(|| OrderingError {
            section,
            position,
            left: left.unwrap_or("<end>").to_string(),
            right: right.unwrap_or("<end>").to_string(),
        })
    })
}
