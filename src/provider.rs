//! Network providers: the publishing side of the notification system.
//!
//! A [`NetworkProvider`] keeps an ordered list of weak subscriber handles and
//! broadcasts messages to them synchronously, in registration order. The
//! four concrete providers differ only in name and default color, so they are
//! modelled as a closed [`ProviderKind`] enum sharing one implementation.

use crate::core::Subscriber;
use crate::error::NotifyError;
use crate::formatting::format_notification;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, Weak};
use tracing::debug;

/// The known network providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum ProviderKind {
    Telnet,
    Vodahouse,
    Mnetwork,
    CMac,
}

impl ProviderKind {
    pub const ALL: [ProviderKind; 4] = [
        ProviderKind::Telnet,
        ProviderKind::Vodahouse,
        ProviderKind::Mnetwork,
        ProviderKind::CMac,
    ];

    /// The name shown in notifications.
    pub fn name(self) -> &'static str {
        match self {
            ProviderKind::Telnet => "Telnet",
            ProviderKind::Vodahouse => "Vodahouse",
            ProviderKind::Mnetwork => "Mnetwork",
            ProviderKind::CMac => "CMac",
        }
    }

    /// The identification color a provider starts with.
    pub fn default_color(self) -> &'static str {
        match self {
            ProviderKind::Telnet => "Blue",
            ProviderKind::Vodahouse => "Red",
            ProviderKind::Mnetwork => "Yellow",
            ProviderKind::CMac => "Black",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ProviderKind {
    type Err = NotifyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| NotifyError::UnknownProvider(s.to_string()))
    }
}

impl TryFrom<String> for ProviderKind {
    type Error = NotifyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// A publisher that notifies its registered subscribers.
///
/// The provider never owns its subscribers: it stores `Weak` handles, so a
/// subscriber dropped by its owner is skipped on the next broadcast.
pub struct NetworkProvider {
    kind: ProviderKind,
    color: String,
    subscribers: Vec<Weak<dyn Subscriber>>,
}

impl NetworkProvider {
    /// Creates a provider with its kind's default color.
    pub fn new(kind: ProviderKind) -> Self {
        Self::with_color(kind, kind.default_color())
    }

    /// Creates a provider with an explicit color.
    pub fn with_color(kind: ProviderKind, color: impl Into<String>) -> Self {
        Self {
            kind,
            color: color.into(),
            subscribers: Vec::new(),
        }
    }

    pub fn kind(&self) -> ProviderKind {
        self.kind
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn set_color(&mut self, color: impl Into<String>) {
        self.color = color.into();
    }

    /// Appends a subscriber. Registering the same subscriber twice makes it
    /// receive every broadcast twice.
    pub fn register<S: Subscriber + 'static>(&mut self, subscriber: &Arc<S>) {
        let handle: Weak<S> = Arc::downgrade(subscriber);
        self.push_handle(handle, subscriber.name());
    }

    /// Like [`register`](Self::register), for subscribers already erased to
    /// `Arc<dyn Subscriber>`.
    pub fn register_dyn(&mut self, subscriber: &Arc<dyn Subscriber>) {
        self.push_handle(Arc::downgrade(subscriber), subscriber.name());
    }

    fn push_handle(&mut self, handle: Weak<dyn Subscriber>, name: &str) {
        self.subscribers.push(handle);
        debug!(
            provider = %self.kind,
            subscriber = name,
            registered = self.subscribers.len(),
            "Subscriber registered"
        );
    }

    /// Removes the first registration of `subscriber`, if any.
    /// Works for both concrete and `dyn Subscriber` handles.
    pub fn deregister<S: Subscriber + ?Sized>(&mut self, subscriber: &Arc<S>) {
        let target = Arc::as_ptr(subscriber) as *const ();
        let position = self
            .subscribers
            .iter()
            .position(|handle| handle.as_ptr() as *const () == target);

        match position {
            Some(index) => {
                self.subscribers.remove(index);
                debug!(
                    provider = %self.kind,
                    subscriber = subscriber.name(),
                    "Subscriber deregistered"
                );
            }
            None => debug!(
                provider = %self.kind,
                subscriber = subscriber.name(),
                "Deregister ignored, subscriber was not registered"
            ),
        }
    }

    /// Delivers `message` to every live subscriber in registration order.
    pub fn notify_all(&self, message: &str) {
        let notification = format_notification(self.kind, &self.color, message);
        let mut delivered = 0usize;
        for subscriber in self.subscribers.iter().filter_map(Weak::upgrade) {
            subscriber.receive(&notification);
            delivered += 1;
        }
        debug!(provider = %self.kind, delivered, "Broadcast finished");
    }

    /// Number of registrations whose subscriber is still alive.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers
            .iter()
            .filter(|handle| handle.strong_count() > 0)
            .count()
    }

    /// Drops registrations whose subscriber no longer exists.
    /// Returns how many were removed.
    pub fn prune(&mut self) -> usize {
        let before = self.subscribers.len();
        self.subscribers.retain(|handle| handle.strong_count() > 0);
        before - self.subscribers.len()
    }
}

impl fmt::Debug for NetworkProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NetworkProvider")
            .field("kind", &self.kind)
            .field("color", &self.color)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
