//! Live capture session.
//!
//! A [`CaptureSession`] owns the pcap handle for its whole lifetime; the
//! handle is closed when the session is dropped.

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};

use bytes::Bytes;
use pcap::{Active, Capture, Linktype};
use tracing::{debug, info, warn};

use sniffer_config::{CaptureConfig, LinkLayerMode};
use sniffer_core::{PlatformProfile, RawFrame};

use crate::device::find_device;
use crate::error::CaptureError;

/// Maps a pcap datalink type onto a profile, for the types the decoders
/// understand.
pub fn profile_for_linktype(linktype: Linktype) -> Option<PlatformProfile> {
    if linktype == Linktype::ETHERNET {
        Some(PlatformProfile::LINK_LAYER)
    } else if linktype == Linktype::RAW || linktype == Linktype::IPV4 {
        Some(PlatformProfile::NO_LINK_LAYER)
    } else {
        None
    }
}

/// Picks the session profile: explicit configuration wins, otherwise the
/// datalink type decides. Unknown datalink types are treated as carrying no
/// Ethernet header rather than printing bogus MAC addresses.
pub fn resolve_profile(mode: LinkLayerMode, linktype: Linktype) -> PlatformProfile {
    match mode {
        LinkLayerMode::Present => PlatformProfile::LINK_LAYER,
        LinkLayerMode::Absent => PlatformProfile::NO_LINK_LAYER,
        LinkLayerMode::Auto => profile_for_linktype(linktype).unwrap_or_else(|| {
            warn!(
                linktype = linktype.0,
                "unsupported datalink type, decoding buffers as raw IP"
            );
            PlatformProfile::NO_LINK_LAYER
        }),
    }
}

pub struct CaptureSession {
    handle: Capture<Active>,
    interface: String,
    profile: PlatformProfile,
}

impl CaptureSession {
    /// Opens a live capture on the configured interface.
    pub fn open(config: &CaptureConfig) -> Result<Self, CaptureError> {
        let device = find_device(&config.interface)?;

        let handle = Capture::from_device(device)?
            .promisc(config.promiscuous)
            .snaplen(i32::try_from(config.snaplen).unwrap_or(i32::MAX))
            .timeout(i32::try_from(config.timeout_ms).unwrap_or(i32::MAX))
            .open()?;

        let linktype = handle.get_datalink();
        let profile = resolve_profile(config.link_layer, linktype);
        info!(
            interface = %config.interface,
            linktype = linktype.0,
            link_layer = profile.has_link_layer(),
            "capture opened"
        );

        Ok(CaptureSession {
            handle,
            interface: config.interface.clone(),
            profile,
        })
    }

    pub fn interface(&self) -> &str {
        &self.interface
    }

    pub fn profile(&self) -> PlatformProfile {
        self.profile
    }

    /// Receives frames until `terminate` is set, the source runs dry, or
    /// the callback fails. Frames are delivered one at a time, in order.
    ///
    /// Returns the number of frames handed to `callback`.
    pub fn run<F>(&mut self, terminate: &AtomicBool, mut callback: F) -> Result<u64, CaptureError>
    where
        F: FnMut(&RawFrame) -> io::Result<()>,
    {
        let mut delivered = 0u64;

        while !terminate.load(Ordering::Relaxed) {
            match self.handle.next_packet() {
                Ok(packet) => {
                    let frame = RawFrame::with_lengths(
                        Bytes::copy_from_slice(packet.data),
                        packet.header.caplen as usize,
                        packet.header.len as usize,
                    );
                    delivered += 1;
                    callback(&frame).map_err(CaptureError::Output)?;
                }
                Err(pcap::Error::TimeoutExpired) => continue,
                Err(pcap::Error::NoMorePackets) => {
                    debug!(interface = %self.interface, "capture source exhausted");
                    break;
                }
                Err(e) => return Err(e.into()),
            }
        }

        Ok(delivered)
    }
}
