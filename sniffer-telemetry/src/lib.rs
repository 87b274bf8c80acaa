//! # Sniffer Telemetry
//!
//! Diagnostics for the capture pipeline: a `tracing` subscriber that keeps
//! stdout free for frame reports, and Prometheus counters for the session.

pub mod logging;
pub mod metrics;

pub use logging::EventLogger;
pub use metrics::MetricsRecorder;
