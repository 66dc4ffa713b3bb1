//! Typed errors for the notification library.

use thiserror::Error;

/// Errors raised outside the core publish/subscribe path.
///
/// Registering, deregistering and broadcasting never fail. These variants
/// cover parsing provider names and writing deliveries to an output sink.
#[derive(Error, Debug)]
pub enum NotifyError {
    #[error("unknown network provider: {0}")]
    UnknownProvider(String),

    #[error("failed to write delivery: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to serialize delivery: {0}")]
    Serialize(#[from] serde_json::Error),
}
