use anyhow::Result;

use super::{
    args::{Arguments, Command},
    commands::{
        CommandResult, comment::comment, init::init, merge::merge, sync::sync, unmerge::unmerge,
        update::update,
    },
};

/// Dispatch to the command handler matching the parsed arguments.
pub fn run(Arguments { command, .. }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Sync(cmd)) => sync(cmd),
        Some(Command::Comment(cmd)) => comment(cmd),
        Some(Command::Merge(cmd)) => merge(cmd),
        Some(Command::Unmerge(cmd)) => unmerge(cmd),
        Some(Command::Update(cmd)) => update(cmd),
        Some(Command::Init) => init(),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
