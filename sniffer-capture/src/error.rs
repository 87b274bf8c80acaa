use thiserror::Error;

#[derive(Debug, Error)]
pub enum CaptureError {
    #[error("Device '{0}' not found")]
    DeviceNotFound(String),

    #[error("No capture devices available")]
    NoDevices,

    #[error("pcap error: {0}")]
    Pcap(#[from] pcap::Error),

    #[error("Failed to write frame output: {0}")]
    Output(#[source] std::io::Error),
}
