use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".langsyncrc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_template_path")]
    pub template_path: String,
    #[serde(default = "default_locale_path")]
    pub locale_path: String,
    #[serde(default)]
    pub strict_order: bool,
}

fn default_template_path() -> String {
    "./locale/template/translation.toml".to_string()
}

fn default_locale_path() -> String {
    "./locale".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            template_path: default_template_path(),
            locale_path: default_locale_path(),
            strict_order: false,
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// The template must be a TOML file and neither path may be empty.
    pub fn validate(&self) -> Result<()> {
        if self.template_path.trim().is_empty() {
            bail!("'templatePath' must not be empty");
        }
        if self.locale_path.trim().is_empty() {
            bail!("'localePath' must not be empty");
        }
        if Path::new(&self.template_path)
            .extension()
            .is_none_or(|ext| ext != "toml")
        {
            bail!(
                "'templatePath' must point to a .toml file: \"{}\"",
                self.template_path
            );
        }
        Ok(())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Directory of the config file, or `None` when using defaults.
    pub config_dir: Option<PathBuf>,
}

impl ConfigLoadResult {
    pub fn from_file(&self) -> bool {
        self.config_dir.is_some()
    }

    /// Resolve a configured path against the config file's directory.
    ///
    /// Defaults stay relative to the working directory.
    pub fn resolve_path(&self, configured: &str) -> PathBuf {
        match &self.config_dir {
            Some(dir) => dir.join(configured),
            None => PathBuf::from(configured),
        }
    }

    pub fn template_path(&self) -> PathBuf {
        self.resolve_path(&self.config.template_path)
    }

    pub fn locale_path(&self) -> PathBuf {
        self.resolve_path(&self.config.locale_path)
    }
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            tracing::debug!("loaded config from {}", path.display());
            Ok(ConfigLoadResult {
                config,
                config_dir: path.parent().map(Path::to_path_buf),
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            config_dir: None,
        }),
    }
}
