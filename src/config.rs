//! Configuration - CLI flags, environment, and the optional config file
//!
//! Precedence, highest first: command line, `POSTBOARD_BASE_URL`,
//! `~/.postboard/config.yaml`, built-in defaults.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::Parser;
use serde::Deserialize;
use thiserror::Error;

use crate::constants::{BASE_URL_ENV_VAR, DEFAULT_BASE_URL, DEFAULT_LOG_FILE, DEFAULT_TIMEOUT_SECS};

const CONFIG_DIR: &str = ".postboard";
const CONFIG_FILE: &str = "config.yaml";

/// Command line arguments
#[derive(Debug, Default, Parser)]
#[command(name = "postboard", version, about = "Browse users, their posts, and the comments on them")]
pub struct Cli {
    /// Base URL of the API
    #[arg(long, env = BASE_URL_ENV_VAR)]
    pub base_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// File that receives the log output
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Config file to read instead of ~/.postboard/config.yaml
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// Contents of the yaml config file; every key is optional
#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Resolved runtime configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub base_url: String,
    pub timeout: Duration,
    pub log_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            base_url: String::from(DEFAULT_BASE_URL),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }
}

impl Config {
    /// Load the config file (if any) and merge it with the CLI
    pub fn load(cli: Cli) -> Result<Config, ConfigError> {
        let file = match &cli.config {
            Some(path) => read_file_config(path)?,
            None => match default_config_path() {
                Some(path) if path.exists() => read_file_config(&path)?,
                _ => FileConfig::default(),
            },
        };
        Ok(Config::resolve(cli, file))
    }

    /// Merge CLI values over file values over defaults
    pub fn resolve(cli: Cli, file: FileConfig) -> Config {
        let defaults = Config::default();
        Config {
            base_url: cli.base_url.or(file.base_url).unwrap_or(defaults.base_url),
            timeout: cli
                .timeout_secs
                .or(file.timeout_secs)
                .map(Duration::from_secs)
                .unwrap_or(defaults.timeout),
            log_file: cli.log_file.or(file.log_file).unwrap_or(defaults.log_file),
        }
    }
}

/// `~/.postboard/config.yaml`, when a home directory exists
pub fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(CONFIG_DIR).join(CONFIG_FILE))
}

pub fn read_file_config(path: &Path) -> Result<FileConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    if content.trim().is_empty() {
        return Ok(FileConfig::default());
    }
    serde_yaml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
