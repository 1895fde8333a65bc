use anyhow::{Context, Result};

use super::super::args::MergeCommand;
use super::{CommandResult, CommandSummary, MergeSummary, helper::load_project_config};
use crate::core::{MergeOptions, merge as merge_files};

pub fn merge(cmd: MergeCommand) -> Result<CommandResult> {
    let config = load_project_config()?;
    let options = MergeOptions {
        strict_order: cmd.merge.strict_order || config.config.strict_order,
    };

    let stats = merge_files(&cmd.first, &cmd.second, &cmd.output, options).with_context(|| {
        format!(
            "Failed to merge {} and {}",
            cmd.first.display(),
            cmd.second.display()
        )
    })?;

    Ok(CommandResult::success(CommandSummary::Merge(
        MergeSummary {
            first: cmd.first,
            second: cmd.second,
            output: cmd.output,
            stats,
        },
    )))
}
