//! ## sniffer-telemetry::logging
//! Structured logging with tracing.
//!
//! Frame reports own stdout, so every diagnostic goes to stderr.

use opentelemetry::KeyValue;
use tracing::{info_span, Instrument};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Clone)]
pub struct EventLogger;

impl EventLogger {
    /// Installs the global subscriber. `RUST_LOG` takes precedence over
    /// `default_level`.
    pub fn init(default_level: &str) {
        fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| EnvFilter::new(default_level)),
            )
            .with_writer(std::io::stderr)
            .with_thread_names(true)
            .init()
    }

    /// Emits a session-level event (capture started, stopped, ...) with
    /// key/value metadata attached.
    #[inline]
    pub async fn log_event(event_type: &str, metadata: Vec<KeyValue>) {
        let span = info_span!(
            "capture_event",
            event_type = event_type,
            otel.kind = "INTERNAL"
        );

        async {
            tracing::info!(
                metadata = ?metadata,
                "Capture event occurred"
            );
        }
        .instrument(span)
        .await
    }
}
