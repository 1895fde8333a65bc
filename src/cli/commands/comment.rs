//! Comment command - annotate locale files with the template's strings.
//!
//! Accepts either a locale directory (every `*/*.toml` below it) or a single
//! file. The template itself is never annotated.

use anyhow::{Context, Result};

use super::super::args::CommentCommand;
use super::{
    CommandResult, CommandSummary, CommentSummary,
    helper::{load_project_config, locale_path, template_path},
};
use crate::{
    core::{Document, annotate_file, variant::is_same_file},
    pipeline::{AnnotateRecord, locale_files},
};

pub fn comment(cmd: CommentCommand) -> Result<CommandResult> {
    let config = load_project_config()?;
    let template_path = template_path(cmd.template.template_path, &config);
    let target = locale_path(cmd.path, &config);
    let template = Document::load(&template_path)
        .with_context(|| format!("Failed to load template: {}", template_path.display()))?;

    let paths = if target.is_dir() {
        locale_files(&target, &template_path)?
    } else if is_same_file(&target, &template_path) {
        Vec::new()
    } else {
        vec![target]
    };

    let mut files = Vec::with_capacity(paths.len());
    for path in paths {
        let annotated = annotate_file(&path, &template)
            .with_context(|| format!("Failed to annotate {}", path.display()))?;
        files.push(AnnotateRecord { path, annotated });
    }

    Ok(CommandResult::success(CommandSummary::Comment(
        CommentSummary { files },
    )))
}
