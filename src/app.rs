//! The main application logic, decoupled from the entry point.

use crate::{
    config::Config,
    core::Output,
    outputs::StdoutOutput,
    provider::NetworkProvider,
    user::User,
};
use anyhow::Result;
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// A configured set of scenarios ready to run.
pub struct App {
    config: Config,
    output: Arc<dyn Output>,
}

impl App {
    /// Creates a new `AppBuilder` to construct an `App`.
    pub fn builder(config: Config) -> AppBuilder {
        AppBuilder::new(config)
    }

    /// Runs every scenario in order: build the provider, sync the user's
    /// color from it, register the user, then broadcast once.
    ///
    /// Returns the number of scenarios that ran.
    #[instrument(skip_all)]
    pub fn run(self) -> Result<usize> {
        if self.config.scenarios.is_empty() {
            warn!("No scenarios configured, nothing to broadcast.");
            return Ok(0);
        }

        for (i, scenario) in self.config.scenarios.iter().enumerate() {
            let mut provider = NetworkProvider::new(scenario.provider);
            if let Some(color) = &scenario.color {
                provider.set_color(color.as_str());
            }

            let mut user = User::new(scenario.user.as_str(), self.output.clone());
            user.set_color(provider.color());
            let user = Arc::new(user);
            provider.register(&user);

            info!(
                scenario = i,
                provider = %provider.kind(),
                color = provider.color(),
                user = %scenario.user,
                "Broadcasting"
            );
            provider.notify_all(self.config.message_for(scenario));
        }

        Ok(self.config.scenarios.len())
    }
}

/// Builder for the main application.
///
/// Lets tests swap the stdout sink for an in-memory one.
pub struct AppBuilder {
    config: Config,
    output_override: Option<Arc<dyn Output>>,
}

impl AppBuilder {
    /// Creates a new `AppBuilder` with the given configuration.
    pub fn new(config: Config) -> Self {
        Self {
            config,
            output_override: None,
        }
    }

    /// Overrides the output sink for testing.
    pub fn output_override(mut self, output: Arc<dyn Output>) -> Self {
        self.output_override = Some(output);
        self
    }

    pub fn build(self) -> App {
        let output = self.output_override.unwrap_or_else(|| {
            Arc::new(StdoutOutput::new(self.config.output.format.clone()))
        });
        info!(output = output.name(), "Output configured");
        App {
            config: self.config,
            output,
        }
    }
}
