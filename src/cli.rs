//! Command-Line Interface (CLI) argument parsing.
//!
//! This module defines the command-line arguments for the application using the
//! `clap` crate. These arguments are parsed at startup and then merged with
//! the configuration from the `netnotify.toml` file and environment variables.

use clap::Parser;
use figment::{
    value::{Dict, Map, Tag, Value},
    Error, Metadata, Profile, Provider,
};
use std::path::PathBuf;

/// Notifies network provider subscribers about outages.
#[derive(Parser, Debug, Clone, Default)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the TOML configuration file.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print deliveries as JSON lines instead of plain text.
    #[arg(long)]
    pub json: bool,

    /// Log filter, e.g. "info" or "netnotify=debug".
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Message broadcast by every scenario that does not set its own.
    #[arg(short, long, value_name = "TEXT")]
    pub message: Option<String>,
}

impl Provider for Cli {
    fn metadata(&self) -> Metadata {
        Metadata::named("Command-Line Arguments")
    }

    fn data(&self) -> Result<Map<Profile, Dict>, Error> {
        let mut dict = Dict::new();

        if let Some(level) = &self.log_level {
            dict.insert("log_level".into(), Value::from(level.clone()));
        }

        if let Some(message) = &self.message {
            dict.insert("message".into(), Value::from(message.clone()));
        }

        // `--json` is a plain switch, so only its presence overrides the file.
        if self.json {
            let mut output = Dict::new();
            output.insert("format".into(), Value::from("Json"));
            dict.insert("output".into(), Value::Dict(Tag::Default, output));
        }

        let mut map = Map::new();
        map.insert(Profile::Default, dict);
        Ok(map)
    }
}
