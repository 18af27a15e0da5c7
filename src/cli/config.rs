//! Configuration file
//!
//! ```json
//! {
//!   "server": { "host": "0.0.0.0", "port": 8080, "cors_origins": [] },
//!   "seed_path": "players.json",
//!   "log_filter": "playerbase=debug"
//! }
//! ```
//!
//! Every field is optional.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::http_server::HttpServerConfig;

use super::errors::{CliError, CliResult};

/// Default location of the configuration file
pub const DEFAULT_CONFIG_PATH: &str = "./playerbase.json";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// HTTP bind address and CORS
    #[serde(default)]
    pub server: HttpServerConfig,

    /// JSON array of players loaded at startup
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed_path: Option<PathBuf>,

    /// `tracing` filter directive; `RUST_LOG` overrides it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_filter: Option<String>,
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        let mut config: Config = serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        // A relative seed path is relative to the config file.
        let resolved = match (&config.seed_path, path.parent()) {
            (Some(seed), Some(dir)) if seed.is_relative() => Some(dir.join(seed)),
            _ => None,
        };
        if resolved.is_some() {
            config.seed_path = resolved;
        }

        Ok(config)
    }

    /// Load from `path` if it exists, otherwise use defaults
    pub fn load_or_default(path: &Path) -> CliResult<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    fn validate(&self) -> CliResult<()> {
        if self.server.host.trim().is_empty() {
            return Err(CliError::config_error("server.host must not be empty"));
        }

        if let Some(filter) = &self.log_filter {
            if filter.trim().is_empty() {
                return Err(CliError::config_error("log_filter must not be empty"));
            }
        }

        Ok(())
    }
}
