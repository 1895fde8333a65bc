use std::env;

use anyhow::Result;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

pub mod args;
pub mod commands;
pub mod exit_status;
pub mod report;
mod run;

pub use args::{Arguments, Command};
pub use exit_status::ExitStatus;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    init_logging(args.verbose);

    let Some(args) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success);
    };

    let result = run::run(args)?;
    report::print(&result);

    Ok(result.exit_status)
}

/// Wire the verbose flag to the tracing log level.
fn init_logging(verbose: bool) {
    let directives = log_directives(verbose, env::var(EnvFilter::DEFAULT_ENV).ok());
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::new(directives))
        .try_init();
}

/// A non-empty RUST_LOG replaces the level picked by `--verbose`.
fn log_directives(verbose: bool, rust_log: Option<String>) -> String {
    match rust_log {
        Some(directives) if !directives.trim().is_empty() => directives,
        _ if verbose => "debug".to_string(),
        _ => "warn".to_string(),
    }
}
