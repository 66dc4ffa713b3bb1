use netnotify::{Delivery, NotifyError, Output, Subscriber};
use std::sync::{Arc, Mutex};

/// A shared, ordered log of (subscriber name, message) pairs.
pub type ReceiveLog = Arc<Mutex<Vec<(String, String)>>>;

/// A mock Subscriber that appends every message it receives to a log,
/// which may be shared between several subscribers to observe ordering.
#[derive(Debug)]
pub struct RecordingSubscriber {
    pub name: String,
    pub log: ReceiveLog,
}

impl RecordingSubscriber {
    pub fn new(name: &str) -> Arc<Self> {
        Self::with_log(name, ReceiveLog::default())
    }

    pub fn with_log(name: &str, log: ReceiveLog) -> Arc<Self> {
        Arc::new(Self {
            name: name.to_string(),
            log,
        })
    }

    /// Messages received by this subscriber only.
    pub fn messages(&self) -> Vec<String> {
        self.log
            .lock()
            .unwrap()
            .iter()
            .filter(|(name, _)| name == &self.name)
            .map(|(_, message)| message.clone())
            .collect()
    }
}

impl Subscriber for RecordingSubscriber {
    fn name(&self) -> &str {
        &self.name
    }

    fn receive(&self, message: &str) {
        self.log
            .lock()
            .unwrap()
            .push((self.name.clone(), message.to_string()));
    }
}

/// A mock Output that appends deliveries to a shared log, so `User`s can be
/// ordered against `RecordingSubscriber`s in the same broadcast.
#[derive(Debug)]
pub struct LogOutput {
    pub log: ReceiveLog,
}

impl Output for LogOutput {
    fn name(&self) -> &str {
        "log_mock"
    }

    fn write_delivery(&self, delivery: &Delivery) -> Result<(), NotifyError> {
        self.log
            .lock()
            .unwrap()
            .push((delivery.subscriber.clone(), delivery.message.clone()));
        Ok(())
    }
}
