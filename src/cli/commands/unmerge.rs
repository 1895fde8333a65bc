use anyhow::{Context, Result};

use super::super::args::UnmergeCommand;
use super::{CommandResult, CommandSummary, UnmergeSummary};
use crate::core::{resolve, unmerge as resolve_by_convention};

pub fn unmerge(cmd: UnmergeCommand) -> Result<CommandResult> {
    let document = match &cmd.parent {
        Some(parent) => resolve(&cmd.file, parent),
        None => resolve_by_convention(&cmd.file),
    }
    .with_context(|| format!("Failed to resolve {}", cmd.file.display()))?;

    let rendered = document.to_toml_string()?;
    Ok(CommandResult::success(CommandSummary::Unmerge(
        UnmergeSummary { rendered },
    )))
}
