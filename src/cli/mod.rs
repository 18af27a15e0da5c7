//! CLI module for playerbase
//!
//! Provides command-line interface for:
//! - init: write a default configuration file
//! - serve: load configuration and seed data, then serve HTTP

mod args;
mod commands;
mod config;
mod errors;

pub use args::{Cli, Command};
pub use commands::{build_store, init, run, run_command, serve};
pub use config::{Config, DEFAULT_CONFIG_PATH};
pub use errors::{CliError, CliResult};
