use thiserror::Error;
use tokio::task::JoinError;

use sniffer_capture::CaptureError;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Capture error: {0}")]
    Capture(#[from] CaptureError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Capture task failed: {0}")]
    Task(#[from] JoinError),
}
