//! Config file loading and client settings resolution.
//!
//! Settings come from, in order of precedence: command-line flags (or their
//! environment variables), the TOML config file, then built-in defaults.
//!
//! ```toml
//! server = "http://127.0.0.1:8080"
//! timeout_secs = 30
//! max_retries = 3
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use gsk_core::ClientConfig;
use serde::Deserialize;
use tracing::debug;

use crate::cli::Cli;

/// Contents of the config file
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub server: Option<String>,
    pub timeout_secs: Option<u64>,
    pub max_retries: Option<u32>,
}

impl FileConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }
}

/// Default config file location
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("gsk").join("config.toml"))
}

/// Load the config file named on the command line, or the default one if present.
///
/// An explicitly requested file must exist; the default file is optional.
pub fn load_file_config(explicit: Option<&Path>) -> Result<FileConfig> {
    if let Some(path) = explicit {
        return FileConfig::load(path);
    }

    match default_config_path() {
        Some(path) if path.is_file() => {
            debug!("Loading config from {}", path.display());
            FileConfig::load(path)
        }
        _ => Ok(FileConfig::default()),
    }
}

/// Merge command-line settings over the config file
pub fn resolve_client_config(cli: &Cli, file: &FileConfig) -> Result<ClientConfig> {
    let mut builder = ClientConfig::builder();

    if let Some(server) = cli.server.as_ref().or(file.server.as_ref()) {
        builder = builder.base_url(server.as_str());
    }
    if let Some(secs) = cli.timeout.or(file.timeout_secs) {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    if let Some(attempts) = file.max_retries {
        builder = builder.max_retries(attempts);
    }

    let config = builder.build().context("Invalid client configuration")?;
    debug!("Using server {}", config.base_url);
    Ok(config)
}
