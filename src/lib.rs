//! netnotify - outage notifications from network providers to their users
//!
//! This library provides a synchronous publish/subscribe core: a
//! [`NetworkProvider`] broadcasts messages to every registered [`Subscriber`],
//! in registration order, and a [`User`] writes each message it receives to
//! an [`Output`].
pub mod app;
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod formatting;
pub mod outputs;
pub mod provider;
pub mod user;

// Re-export core types for convenience
pub use crate::core::*;
pub use error::NotifyError;
pub use provider::{NetworkProvider, ProviderKind};
pub use user::User;
