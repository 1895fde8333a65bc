use anyhow::{Context, Result};

use super::super::args::SyncCommand;
use super::{
    CommandResult, CommandSummary, SyncSummary,
    helper::{load_project_config, template_path},
};
use crate::core::{Document, sync_file};

pub fn sync(cmd: SyncCommand) -> Result<CommandResult> {
    let config = load_project_config()?;
    let template_path = template_path(cmd.template.template_path, &config);
    let template = Document::load(&template_path)
        .with_context(|| format!("Failed to load template: {}", template_path.display()))?;

    let outcome = sync_file(&cmd.file, &template)
        .with_context(|| format!("Failed to sync {}", cmd.file.display()))?;

    Ok(CommandResult::success(CommandSummary::Sync(SyncSummary {
        path: cmd.file,
        outcome,
    })))
}
