//! Sync → Merge → Annotate over a locale directory tree.
//!
//! The tree holds one subdirectory per language or regional variant
//! (`<root>/<lang>[-<SUFFIX>]/<file>.toml`). Phases run strictly in order and
//! stop at the first error.

use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, anyhow};
use glob::{Pattern, glob};

use crate::core::{
    Document, MergeOptions, MergeStats, SyncOutcome, annotate_file, merge, sync_file,
    variant::{is_same_file, locale_dir_name, split_variant},
};

/// Name of the directory holding the template inside a locale tree.
pub const TEMPLATE_DIR_NAME: &str = "template";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateOptions {
    pub sync: bool,
    pub merge: bool,
    pub comment: bool,
    pub merge_options: MergeOptions,
}

impl Default for UpdateOptions {
    fn default() -> Self {
        Self {
            sync: true,
            merge: true,
            comment: true,
            merge_options: MergeOptions::default(),
        }
    }
}

/// Two sibling variants sharing a base language and file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeJob {
    pub base: String,
    pub first: PathBuf,
    pub second: PathBuf,
    pub parent: PathBuf,
}

/// A base language whose variant count is not exactly two.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedGroup {
    pub base: String,
    pub variants: Vec<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergePlan {
    pub jobs: Vec<MergeJob>,
    pub skipped: Vec<SkippedGroup>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncRecord {
    pub path: PathBuf,
    pub outcome: SyncOutcome,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeRecord {
    pub job: MergeJob,
    pub stats: MergeStats,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotateRecord {
    pub path: PathBuf,
    pub annotated: usize,
}

/// What each phase of an update did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateReport {
    pub synced: Vec<SyncRecord>,
    pub merged: Vec<MergeRecord>,
    pub skipped_groups: Vec<SkippedGroup>,
    pub annotated: Vec<AnnotateRecord>,
}

impl UpdateReport {
    pub fn keys_added(&self) -> usize {
        self.synced.iter().map(|r| r.outcome.added()).sum()
    }

    pub fn lines_annotated(&self) -> usize {
        self.annotated.iter().map(|r| r.annotated).sum()
    }
}

/// All locale files one directory level below `root`, template excluded.
pub fn locale_files(root: &Path, template_path: &Path) -> Result<Vec<PathBuf>> {
    let root_str = root
        .to_str()
        .ok_or_else(|| anyhow!("Locale path is not valid UTF-8: {:?}", root))?;
    let pattern = format!("{}/*/*.toml", Pattern::escape(root_str));

    let mut files = Vec::new();
    for entry in glob(&pattern).with_context(|| format!("Invalid glob pattern: {}", pattern))? {
        let path = entry.context("Failed to read locale directory entry")?;
        if locale_dir_name(&path) == Some(TEMPLATE_DIR_NAME) || is_same_file(&path, template_path)
        {
            continue;
        }
        files.push(path);
    }
    files.sort();
    Ok(files)
}

/// Group child variants by base language and file name.
///
/// Exactly two variants form a merge job whose parent lives at
/// `<root>/<base>/<file>`; other group sizes are reported as skipped.
pub fn plan_merges(files: &[PathBuf]) -> MergePlan {
    let mut groups: BTreeMap<(String, PathBuf), Vec<PathBuf>> = BTreeMap::new();

    for path in files {
        let Some(dir_name) = locale_dir_name(path) else {
            continue;
        };
        let (base, Some(_)) = split_variant(dir_name) else {
            continue;
        };
        let (Some(root), Some(file_name)) = (
            path.parent().and_then(Path::parent),
            path.file_name(),
        ) else {
            continue;
        };
        let parent = root.join(base).join(file_name);
        groups
            .entry((base.to_string(), parent))
            .or_default()
            .push(path.clone());
    }

    let mut plan = MergePlan::default();
    for ((base, parent), variants) in groups {
        if let [first, second] = variants.as_slice() {
            plan.jobs.push(MergeJob {
                base,
                first: first.clone(),
                second: second.clone(),
                parent,
            });
        } else {
            plan.skipped.push(SkippedGroup { base, variants });
        }
    }
    plan
}

/// Run the enabled phases over every locale file under `locale_root`.
pub fn run_update(
    template_path: &Path,
    locale_root: &Path,
    options: UpdateOptions,
) -> Result<UpdateReport> {
    let template = Document::load(template_path)
        .with_context(|| format!("Failed to load template: {}", template_path.display()))?;
    let mut report = UpdateReport::default();

    if options.sync {
        tracing::info!("syncing locale files with {}", template_path.display());
        for path in locale_files(locale_root, template_path)? {
            let outcome = sync_file(&path, &template)
                .with_context(|| format!("Failed to sync {}", path.display()))?;
            report.synced.push(SyncRecord { path, outcome });
        }
    }

    if options.merge {
        tracing::info!("merging regional variants");
        let plan = plan_merges(&locale_files(locale_root, template_path)?);
        for group in &plan.skipped {
            tracing::warn!(
                "skipping `{}`: merging needs exactly two variants, found {}",
                group.base,
                group.variants.len()
            );
        }
        for job in plan.jobs {
            let stats = merge(&job.first, &job.second, &job.parent, options.merge_options)
                .with_context(|| {
                    format!(
                        "Failed to merge {} and {}",
                        job.first.display(),
                        job.second.display()
                    )
                })?;
            report.merged.push(MergeRecord { job, stats });
        }
        report.skipped_groups = plan.skipped;
    }

    if options.comment {
        tracing::info!("annotating locale files");
        for path in locale_files(locale_root, template_path)? {
            let annotated = annotate_file(&path, &template)
                .with_context(|| format!("Failed to annotate {}", path.display()))?;
            report.annotated.push(AnnotateRecord { path, annotated });
        }
    }

    Ok(report)
}
