//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `sync`: Add missing template keys to a locale file
//! - `comment`: Annotate locale files with the template's strings
//! - `merge`: Factor two regional variants into a shared parent file
//! - `unmerge`: Print the fully resolved view of a variant
//! - `update`: Sync, merge and comment a whole locale directory
//! - `init`: Initialize langsync configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }
}

/// Template location shared by commands that read the template.
#[derive(Debug, Clone, Args)]
pub struct TemplateArgs {
    /// Template path (overrides config file)
    #[arg(short = 't', long, env = "LANGSYNC_TEMPLATE_PATH")]
    pub template_path: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct SyncCommand {
    /// File to sync
    pub file: PathBuf,

    #[command(flatten)]
    pub template: TemplateArgs,
}

#[derive(Debug, Args)]
pub struct CommentCommand {
    /// Locale directory or single file to comment (defaults to the locale path)
    pub path: Option<PathBuf>,

    #[command(flatten)]
    pub template: TemplateArgs,
}

/// Merge options shared by `merge` and `update`.
#[derive(Debug, Clone, Args)]
pub struct MergeArgs {
    /// Fail when the two variants list their keys in a different order
    #[arg(long)]
    pub strict_order: bool,
}

#[derive(Debug, Args)]
pub struct MergeCommand {
    /// First file to merge
    pub first: PathBuf,
    /// Second file to merge
    pub second: PathBuf,
    /// Where to store the shared parent file
    pub output: PathBuf,

    #[command(flatten)]
    pub merge: MergeArgs,
}

#[derive(Debug, Args)]
pub struct UnmergeCommand {
    /// Variant file to resolve
    pub file: PathBuf,

    /// Parent file to resolve against (defaults to the sibling base-language directory)
    #[arg(long)]
    pub parent: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct UpdateCommand {
    #[command(flatten)]
    pub template: TemplateArgs,

    /// Directory where the locale files are stored (overrides config file)
    #[arg(short = 'l', long, env = "LANGSYNC_LOCALE_PATH")]
    pub locale_path: Option<PathBuf>,

    /// Don't comment the files
    #[arg(long)]
    pub no_comment: bool,

    /// Skip merging
    #[arg(long)]
    pub no_merge: bool,

    /// Skip syncing with the template
    #[arg(long)]
    pub no_sync: bool,

    #[command(flatten)]
    pub merge: MergeArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Add keys missing from a locale file as empty strings
    #[command(visible_alias = "add-string")]
    Sync(SyncCommand),
    /// Comment locale files with the template's strings
    #[command(visible_alias = "comment-langs")]
    Comment(CommentCommand),
    /// Merge two regional variants into a shared parent file
    Merge(MergeCommand),
    /// Print the resolved content of a variant file
    Unmerge(UnmergeCommand),
    /// Sync, merge and comment all locale files with the template
    #[command(visible_alias = "update-translations")]
    Update(UpdateCommand),
    /// Initialize a new .langsyncrc.json configuration file
    Init,
}
