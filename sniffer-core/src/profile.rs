//! Per-session description of what the capture buffers start with.

use sniffer_protocols::ethernet::ETHERNET_HEADER_LEN;

/// Whether frames from a capture session begin with an Ethernet header.
///
/// Resolved once when the session opens and then shared read-only by every
/// frame of that session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PlatformProfile {
    link_layer: bool,
}

impl PlatformProfile {
    /// Buffers start with a 14-byte Ethernet header.
    pub const LINK_LAYER: PlatformProfile = PlatformProfile { link_layer: true };
    /// Buffers start directly with the IP header.
    pub const NO_LINK_LAYER: PlatformProfile = PlatformProfile { link_layer: false };

    pub fn new(link_layer: bool) -> Self {
        PlatformProfile { link_layer }
    }

    pub fn has_link_layer(&self) -> bool {
        self.link_layer
    }

    /// Offset of the network-layer header within every buffer.
    pub fn network_offset(&self) -> usize {
        if self.link_layer {
            ETHERNET_HEADER_LEN
        } else {
            0
        }
    }
}

impl Default for PlatformProfile {
    fn default() -> Self {
        PlatformProfile::LINK_LAYER
    }
}
