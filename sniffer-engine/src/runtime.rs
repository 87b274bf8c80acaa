// sniffer-engine/src/runtime.rs

/*!
# Runtime Engine

Wires the capture driver to the decode-and-render pipeline. Frontends (the
CLI today) call [`run_capture_mode`] for a live session and
[`list_interfaces`] for device enumeration.
*/

use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use opentelemetry::KeyValue;
use tokio::task::spawn_blocking;
use tracing::{debug, info, instrument, warn};

use sniffer_capture::{default_device, list_devices, CaptureError, CaptureSession};
use sniffer_config::SnifferConfig;
use sniffer_core::{classify, render, PlatformProfile, RawFrame};
use sniffer_telemetry::{logging::EventLogger, metrics::MetricsRecorder};

use crate::error::EngineError;

/// Classifies one frame, updates the session counters and writes its report.
pub fn process_frame<W: Write>(
    frame: &RawFrame,
    profile: PlatformProfile,
    out: &mut W,
    metrics: &MetricsRecorder,
) -> io::Result<()> {
    let decoded = classify(frame, profile);

    metrics.record_frame(frame.captured_len(), frame.is_truncated());
    if decoded.ipv4.is_some() {
        metrics.inc_ipv4();
    }
    if decoded.tcp.is_some() {
        metrics.inc_tcp();
    }

    render(&decoded, out)
}

/// Runs a live capture session, printing a report for every frame to stdout.
///
/// The session ends on Ctrl-C, after `frame_limit` frames, or when stdout is
/// closed. Returns the number of frames processed.
#[instrument(
    level = "info",
    name = "run_capture_mode",
    skip_all,
    fields(interface = %config.capture.interface)
)]
pub async fn run_capture_mode(
    config: &SnifferConfig,
    metrics: MetricsRecorder,
) -> Result<u64, EngineError> {
    let capture_config = config.capture.clone();
    let mut session = spawn_blocking(move || CaptureSession::open(&capture_config)).await??;
    let profile = session.profile();

    EventLogger::log_event(
        "capture_started",
        vec![
            KeyValue::new("interface", session.interface().to_string()),
            KeyValue::new("link_layer", profile.has_link_layer()),
        ],
    )
    .await;

    let terminate = Arc::new(AtomicBool::new(false));

    let signal_flag = terminate.clone();
    let signal_task = tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Interrupt received, stopping capture");
            signal_flag.store(true, Ordering::Relaxed);
        }
    });

    let frame_limit = config.capture.frame_limit;
    let loop_flag = terminate.clone();
    let loop_metrics = metrics.clone();
    let capture_task = spawn_blocking(move || {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        let mut written = 0u64;

        let result = session.run(&loop_flag, |frame| {
            process_frame(frame, profile, &mut out, &loop_metrics)?;
            out.flush()?;
            written += 1;
            if frame_limit.is_some_and(|limit| written >= limit) {
                debug!(written, "frame limit reached");
                loop_flag.store(true, Ordering::Relaxed);
            }
            Ok(())
        });
        (written, result)
    });

    let (written, result) = capture_task.await?;
    signal_task.abort();

    let frames = frames_processed(written, result)?;

    info!(frames, "Capture session finished");
    EventLogger::log_event(
        "capture_stopped",
        vec![KeyValue::new("frames", frames as i64)],
    )
    .await;

    if config.telemetry.metrics_summary {
        match metrics.gather_metrics() {
            Ok(summary) => info!("Session metrics:\n{summary}"),
            Err(e) => warn!("Failed to gather metrics: {e}"),
        }
    }

    Ok(frames)
}

/// Frames whose report reached stdout. A closed stdout ends the session
/// normally; the frame whose write failed is not counted.
fn frames_processed(written: u64, result: Result<u64, CaptureError>) -> Result<u64, EngineError> {
    match result {
        Ok(_) => Ok(written),
        Err(CaptureError::Output(e)) if e.kind() == io::ErrorKind::BrokenPipe => {
            debug!("stdout closed, stopping capture");
            Ok(written)
        }
        Err(e) => Err(e.into()),
    }
}

/// Writes one line per capture device, with its addresses. The device pcap
/// would choose by default is marked with `*`.
pub fn list_interfaces<W: Write>(out: &mut W) -> Result<usize, EngineError> {
    let devices = list_devices()?;
    let default_name = match default_device() {
        Ok(device) => Some(device.name),
        Err(e) => {
            debug!("No default device: {e}");
            None
        }
    };

    for device in &devices {
        let marker = if default_name.as_deref() == Some(device.name.as_str()) {
            '*'
        } else {
            ' '
        };
        writeln!(out, "{marker} {device}")?;
    }
    Ok(devices.len())
}
