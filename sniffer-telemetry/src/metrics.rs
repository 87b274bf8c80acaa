//! ## sniffer-telemetry::metrics
//! Prometheus counters for a capture session.

use prometheus::{IntCounter, Registry};

#[derive(Debug, Clone)]
pub struct MetricsRecorder {
    pub registry: Registry,
    pub frames: IntCounter,
    pub bytes_captured: IntCounter,
    pub truncated_frames: IntCounter,
    pub ipv4_frames: IntCounter,
    pub tcp_segments: IntCounter,
}

impl Default for MetricsRecorder {
    fn default() -> Self {
        Self::new()
    }
}

fn counter(registry: &Registry, name: &str, help: &str) -> IntCounter {
    // Names and help strings are static and unique, so creation and
    // registration can only fail on a programming error.
    let counter = IntCounter::new(name, help).expect("valid counter definition");
    registry
        .register(Box::new(counter.clone()))
        .expect("counter registered once");
    counter
}

impl MetricsRecorder {
    pub fn new() -> Self {
        let registry = Registry::new();
        let frames = counter(&registry, "sniffer_frames_total", "Frames captured");
        let bytes_captured = counter(
            &registry,
            "sniffer_bytes_captured_total",
            "Bytes captured across all frames",
        );
        let truncated_frames = counter(
            &registry,
            "sniffer_truncated_frames_total",
            "Frames cut short by the snapshot length",
        );
        let ipv4_frames = counter(
            &registry,
            "sniffer_ipv4_frames_total",
            "Frames with a decodable IPv4 header",
        );
        let tcp_segments = counter(
            &registry,
            "sniffer_tcp_segments_total",
            "Frames with a decodable TCP header",
        );

        Self {
            registry,
            frames,
            bytes_captured,
            truncated_frames,
            ipv4_frames,
            tcp_segments,
        }
    }

    /// Counts one captured frame.
    pub fn record_frame(&self, captured_len: usize, truncated: bool) {
        self.frames.inc();
        self.bytes_captured.inc_by(captured_len as u64);
        if truncated {
            self.truncated_frames.inc();
        }
    }

    pub fn inc_ipv4(&self) {
        self.ipv4_frames.inc();
    }

    pub fn inc_tcp(&self) {
        self.tcp_segments.inc();
    }

    pub fn gather_metrics(&self) -> Result<String, prometheus::Error> {
        use prometheus::Encoder;
        let encoder = prometheus::TextEncoder::new();
        let mut buffer = Vec::<u8>::new();
        encoder.encode(&self.registry.gather(), &mut buffer)?;
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_frames_and_bytes() {
        let metrics = MetricsRecorder::new();
        metrics.record_frame(60, false);
        metrics.record_frame(1514, true);
        metrics.inc_ipv4();
        metrics.inc_tcp();

        assert_eq!(metrics.frames.get(), 2);
        assert_eq!(metrics.bytes_captured.get(), 1574);
        assert_eq!(metrics.truncated_frames.get(), 1);

        let text = metrics.gather_metrics().unwrap();
        assert!(text.contains("sniffer_frames_total 2"));
        assert!(text.contains("sniffer_tcp_segments_total 1"));
    }

    #[test]
    fn recorders_are_independent() {
        let a = MetricsRecorder::new();
        let b = MetricsRecorder::new();
        a.record_frame(10, false);
        assert_eq!(b.frames.get(), 0);
    }
}
