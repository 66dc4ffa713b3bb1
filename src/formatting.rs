//! Text formats for broadcasts and delivery lines.

use crate::core::Delivery;
use crate::provider::ProviderKind;

/// Builds the text a provider broadcasts to each subscriber.
pub fn format_notification(kind: ProviderKind, color: &str, message: &str) -> String {
    format!("Notification from {} (Color: {}): {}", kind, color, message)
}

/// Builds the plain-text console line for a delivery.
pub fn format_delivery_line(delivery: &Delivery) -> String {
    format!(
        "{} received a message: {}",
        delivery.subscriber, delivery.message
    )
}
