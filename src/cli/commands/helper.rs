use std::{env, path::PathBuf};

use anyhow::{Context, Result};

use crate::config::{ConfigLoadResult, load_config};

/// Load the project configuration starting from the working directory.
pub fn load_project_config() -> Result<ConfigLoadResult> {
    let cwd = env::current_dir().context("Failed to read the current directory")?;
    load_config(&cwd)
}

/// Template path from the command line, falling back to the config file.
pub fn template_path(overridden: Option<PathBuf>, config: &ConfigLoadResult) -> PathBuf {
    overridden.unwrap_or_else(|| config.template_path())
}

/// Locale root from the command line, falling back to the config file.
pub fn locale_path(overridden: Option<PathBuf>, config: &ConfigLoadResult) -> PathBuf {
    overridden.unwrap_or_else(|| config.locale_path())
}
