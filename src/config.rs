//! Configuration management for netnotify
//!
//! This module defines the main `Config` struct and its sub-structs. It uses
//! the `figment` crate to layer, from lowest to highest priority: built-in
//! defaults, a `netnotify.toml` file, `NETNOTIFY_` environment variables and
//! command-line arguments.

use crate::cli::Cli;
use crate::provider::ProviderKind;
use anyhow::{Context, Result};
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Config file read when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "netnotify.toml";

/// Message used by the built-in scenarios.
pub const OUTAGE_MESSAGE: &str =
    "We are experiencing a temporary outage. We apologize for the inconvenience.";

/// The main configuration struct for the application.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    /// The logging filter for the application.
    pub log_level: String,
    /// Message broadcast by scenarios that do not set their own.
    pub message: String,
    /// Configuration for delivery output.
    #[serde(default)]
    pub output: OutputConfig,
    /// Provider/user pairs to run, in order.
    pub scenarios: Vec<ScenarioConfig>,
}

/// The format for stdout output.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq, Default)]
pub enum OutputFormat {
    Json,
    #[default]
    PlainText,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Json => f.write_str("Json"),
            OutputFormat::PlainText => f.write_str("PlainText"),
        }
    }
}

/// Configuration for delivery output.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct OutputConfig {
    /// The format to use for stdout output.
    #[serde(default)]
    pub format: OutputFormat,
}

/// One provider, one subscribing user, one broadcast.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ScenarioConfig {
    /// Which provider broadcasts.
    pub provider: ProviderKind,
    /// Overrides the provider's default color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Name of the subscribing user.
    pub user: String,
    /// Overrides `Config::message` for this scenario.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ScenarioConfig {
    pub fn new(provider: ProviderKind, user: impl Into<String>) -> Self {
        Self {
            provider,
            color: None,
            user: user.into(),
            message: None,
        }
    }
}

impl Config {
    /// Loads the configuration, using the file named by `--config` or
    /// `netnotify.toml` in the working directory.
    pub fn load(cli: &Cli) -> Result<Self> {
        let path = cli
            .config
            .clone()
            .unwrap_or_else(|| DEFAULT_CONFIG_FILE.into());
        Self::load_from(&path, cli)
    }

    /// Loads the configuration from an explicit file path. A missing file is
    /// not an error; its layer is simply empty.
    pub fn load_from(path: &Path, cli: &Cli) -> Result<Self> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(path))
            // e.g. NETNOTIFY_LOG_LEVEL=debug, NETNOTIFY_OUTPUT__FORMAT=Json
            .merge(Env::prefixed("NETNOTIFY_").split("__"))
            .merge(cli.clone())
            .extract()
            .with_context(|| format!("failed to load configuration from {}", path.display()))?;
        Ok(config)
    }

    /// The message a given scenario broadcasts.
    pub fn message_for<'a>(&'a self, scenario: &'a ScenarioConfig) -> &'a str {
        scenario.message.as_deref().unwrap_or(&self.message)
    }
}

// Provide a default implementation for tests and easy setup.
impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            message: OUTAGE_MESSAGE.to_string(),
            output: OutputConfig::default(),
            scenarios: vec![
                ScenarioConfig::new(ProviderKind::Telnet, "Gabriel"),
                ScenarioConfig::new(ProviderKind::Mnetwork, "Nikita"),
            ],
        }
    }
}
