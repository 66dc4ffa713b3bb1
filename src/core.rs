//! Core domain types and service traits for netnotify
//!
//! This module defines the delivery record and the two trait contracts the
//! rest of the crate is built around: subscribers that receive broadcasts and
//! outputs that render what a subscriber received.

use crate::error::NotifyError;
use serde::{Deserialize, Serialize};

/// A single message as received by a single subscriber.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Delivery {
    /// Name of the subscriber that received the message
    pub subscriber: String,
    /// The message exactly as passed to [`Subscriber::receive`]
    pub message: String,
}

impl Delivery {
    pub fn new(subscriber: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            subscriber: subscriber.into(),
            message: message.into(),
        }
    }
}

// =============================================================================
// Service Traits
// =============================================================================

/// Anything that can be registered with a network provider.
///
/// Providers keep only weak handles, so implementors are shared through `Arc`
/// by their owner and must be `Send + Sync`.
pub trait Subscriber: Send + Sync {
    /// Human-readable name, used in output lines and logs.
    fn name(&self) -> &str;

    /// Handles one message. Always succeeds from the caller's point of view.
    fn receive(&self, message: &str);
}

/// Renders deliveries to some destination (stdout, a buffer, ...).
pub trait Output: Send + Sync {
    /// A unique, descriptive name for the output (e.g., "stdout").
    /// Used for logging.
    fn name(&self) -> &str;

    /// Writes one delivery.
    ///
    /// # Returns
    /// * `Ok(())` if the delivery was written
    /// * `Err` if formatting or the underlying write failed
    fn write_delivery(&self, delivery: &Delivery) -> Result<(), NotifyError>;
}
