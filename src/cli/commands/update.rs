use anyhow::Result;

use super::super::args::UpdateCommand;
use super::{
    CommandResult, CommandSummary,
    helper::{load_project_config, locale_path, template_path},
};
use crate::{
    core::MergeOptions,
    pipeline::{UpdateOptions, run_update},
};

pub fn update(cmd: UpdateCommand) -> Result<CommandResult> {
    let config = load_project_config()?;
    let template_path = template_path(cmd.template.template_path, &config);
    let locale_path = locale_path(cmd.locale_path, &config);

    let options = UpdateOptions {
        sync: !cmd.no_sync,
        merge: !cmd.no_merge,
        comment: !cmd.no_comment,
        merge_options: MergeOptions {
            strict_order: cmd.merge.strict_order || config.config.strict_order,
        },
    };

    let report = run_update(&template_path, &locale_path, options)?;
    Ok(CommandResult::success(CommandSummary::Update(report)))
}
