//! Output sinks for delivered messages.
//!
//! [`StdoutOutput`] prints one line per delivery in the configured
//! [`OutputFormat`]. [`RecordingOutput`] keeps deliveries in memory and is
//! available to tests through the `test-utils` feature.

use crate::config::OutputFormat;
use crate::core::{Delivery, Output};
use crate::error::NotifyError;
use crate::formatting::format_delivery_line;
use std::io::Write;

/// Renders a delivery as a single line (without the trailing newline).
pub fn render(format: &OutputFormat, delivery: &Delivery) -> Result<String, NotifyError> {
    match format {
        OutputFormat::PlainText => Ok(format_delivery_line(delivery)),
        OutputFormat::Json => Ok(serde_json::to_string(delivery)?),
    }
}

/// Writes deliveries to standard output.
#[derive(Debug, Clone)]
pub struct StdoutOutput {
    format: OutputFormat,
}

impl StdoutOutput {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }
}

impl Output for StdoutOutput {
    fn name(&self) -> &str {
        "stdout"
    }

    fn write_delivery(&self, delivery: &Delivery) -> Result<(), NotifyError> {
        let line = render(&self.format, delivery)?;
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{}", line)?;
        Ok(())
    }
}

#[cfg(any(test, feature = "test-utils"))]
pub use recording::RecordingOutput;

#[cfg(any(test, feature = "test-utils"))]
mod recording {
    use super::*;
    use std::sync::Mutex;

    /// An output that records every delivery it is given.
    #[derive(Debug, Default)]
    pub struct RecordingOutput {
        deliveries: Mutex<Vec<Delivery>>,
    }

    impl RecordingOutput {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn deliveries(&self) -> Vec<Delivery> {
            self.deliveries.lock().unwrap().clone()
        }

        /// Deliveries rendered as plain-text console lines.
        pub fn lines(&self) -> Vec<String> {
            self.deliveries().iter().map(format_delivery_line).collect()
        }
    }

    impl Output for RecordingOutput {
        fn name(&self) -> &str {
            "recording"
        }

        fn write_delivery(&self, delivery: &Delivery) -> Result<(), NotifyError> {
            self.deliveries.lock().unwrap().push(delivery.clone());
            Ok(())
        }
    }
}
