//! CLI argument definitions using clap
//!
//! Commands:
//! - playerbase init --config <path>
//! - playerbase serve --config <path> [--port <port>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::config::DEFAULT_CONFIG_PATH;

/// playerbase - a filtered, paged REST registry of game characters
#[derive(Parser, Debug)]
#[command(name = "playerbase")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Write a default configuration file
    Init {
        /// Path to configuration file
        #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
        config: PathBuf,
    },

    /// Start the HTTP server
    Serve {
        /// Path to configuration file (defaults apply if it does not exist)
        #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
        config: PathBuf,

        /// Override the configured port
        #[arg(long)]
        port: Option<u16>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serve_defaults() {
        let cli = Cli::try_parse_from(["playerbase", "serve"]).unwrap();
        assert_eq!(
            cli.command,
            Command::Serve {
                config: PathBuf::from(DEFAULT_CONFIG_PATH),
                port: None,
            }
        );
    }

    #[test]
    fn test_serve_with_port() {
        let cli = Cli::try_parse_from([
            "playerbase",
            "serve",
            "--config",
            "/etc/playerbase.json",
            "--port",
            "9000",
        ])
        .unwrap();
        assert_eq!(
            cli.command,
            Command::Serve {
                config: PathBuf::from("/etc/playerbase.json"),
                port: Some(9000),
            }
        );
    }

    #[test]
    fn test_missing_subcommand_is_error() {
        assert!(Cli::try_parse_from(["playerbase"]).is_err());
    }
}
