//! Users: the subscribing side of the notification system.

use crate::core::{Delivery, Output, Subscriber};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, error};

/// A person subscribed to a network provider's outage notifications.
///
/// Every message a user receives is written to its output sink as one line.
pub struct User {
    name: String,
    color: Option<String>,
    output: Arc<dyn Output>,
}

impl User {
    pub fn new(name: impl Into<String>, output: Arc<dyn Output>) -> Self {
        Self {
            name: name.into(),
            color: None,
            output,
        }
    }

    /// The color of the provider this user follows, once synced.
    pub fn color(&self) -> Option<&str> {
        self.color.as_deref()
    }

    pub fn set_color(&mut self, color: impl Into<String>) {
        self.color = Some(color.into());
    }
}

impl Subscriber for User {
    fn name(&self) -> &str {
        &self.name
    }

    fn receive(&self, message: &str) {
        let delivery = Delivery::new(self.name.as_str(), message);
        debug!(user = %self.name, output = self.output.name(), "Message received");
        if let Err(e) = self.output.write_delivery(&delivery) {
            error!(
                "Failed to write message for {} to output {}: {}",
                self.name,
                self.output.name(),
                e
            );
        }
    }
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("name", &self.name)
            .field("color", &self.color)
            .field("output", &self.output.name())
            .finish()
    }
}
