//! sniffer‑capture
//!
//! The live capture driver: device enumeration, opening a pcap handle for
//! one interface, and the blocking receive loop that hands every frame to a
//! callback as a [`sniffer_core::RawFrame`].

pub mod capture;
pub mod device;
pub mod error;

pub use capture::{profile_for_linktype, resolve_profile, CaptureSession};
pub use device::{default_device, list_devices, DeviceInfo};
pub use error::CaptureError;
