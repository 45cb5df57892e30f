// src/config/app.rs
use super::defaults::*;
use crate::consts::{CONFIG_DIR_NAME, CONFIG_ENV_VAR, CONFIG_FILE_NAME};
use crate::enums::OutputFormat;
use crate::error::Result;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default = "default_output")]
    pub output: Output,
    #[serde(default = "default_logging")]
    pub logging: Logging,
    #[serde(default = "default_prompt")]
    pub prompt: Prompt,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Output {
    #[serde(default)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Logging {
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Prompt {
    #[serde(default = "default_mask_secrets")]
    pub mask_secrets: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            output: default_output(),
            logging: default_logging(),
            prompt: default_prompt(),
        }
    }
}

static CONFIG: OnceLock<Config> = OnceLock::new();

/// Load the process-wide config once
///
/// Lookup order: `$SYMCRYPT_CONFIG`, then `<config dir>/symcrypt/config.toml`,
/// then built-in defaults. A file that exists but fails to parse is an error.
pub fn load() -> Result<&'static Config> {
    if let Some(conf) = CONFIG.get() {
        return Ok(conf);
    }
    let conf = match config_path() {
        Some(path) => load_from(&path)?,
        None => {
            tracing::debug!("no config file found, using built-in defaults");
            Config::default()
        }
    };
    Ok(CONFIG.get_or_init(|| conf))
}

/// Read and parse one config file
pub fn load_from(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)?;
    let conf = parse(&content)?;
    tracing::debug!(path = %path.display(), "loaded config");
    Ok(conf)
}

/// Parse a TOML document; missing sections and keys fall back to defaults
pub fn parse(content: &str) -> Result<Config> {
    Ok(toml::from_str(content)?)
}

fn config_path() -> Option<PathBuf> {
    if let Ok(explicit) = std::env::var(CONFIG_ENV_VAR) {
        return Some(PathBuf::from(explicit));
    }
    dirs::config_dir()
        .map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
        .filter(|path| path.exists())
}
