use std::path::PathBuf;

use super::super::exit_status::ExitStatus;
use crate::{
    core::{MergeStats, SyncOutcome},
    pipeline::{AnnotateRecord, UpdateReport},
};

#[derive(Debug)]
pub enum CommandSummary {
    Sync(SyncSummary),
    Comment(CommentSummary),
    Merge(MergeSummary),
    Unmerge(UnmergeSummary),
    Update(UpdateReport),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct SyncSummary {
    pub path: PathBuf,
    pub outcome: SyncOutcome,
}

#[derive(Debug)]
pub struct CommentSummary {
    pub files: Vec<AnnotateRecord>,
}

#[derive(Debug)]
pub struct MergeSummary {
    pub first: PathBuf,
    pub second: PathBuf,
    pub output: PathBuf,
    pub stats: MergeStats,
}

#[derive(Debug)]
pub struct UnmergeSummary {
    /// Resolved document serialized as TOML.
    pub rendered: String,
}

#[derive(Debug)]
pub struct InitSummary {
    /// False when a config file already existed.
    pub created: bool,
}

/// Result of running langsync commands
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    pub exit_status: ExitStatus,
}

impl CommandResult {
    pub fn success(summary: CommandSummary) -> Self {
        Self {
            summary,
            exit_status: ExitStatus::Success,
        }
    }
}
