//! Frame classification: decides which header decoders apply to a captured
//! buffer and at which offsets, then collects whatever decoded.

use tracing::trace;

use sniffer_protocols::ipv4::IPV4_MIN_HEADER_LEN;
use sniffer_protocols::tcp::TCP_MIN_HEADER_LEN;
use sniffer_protocols::{DecodeError, EthernetHeader, Ipv4Header, TcpHeader};

use crate::frame::RawFrame;
use crate::profile::PlatformProfile;

/// The layers that could be decoded from one frame.
///
/// A layer is only present when the layer beneath it decoded (Ethernet is
/// the exception: it is independent of IPv4 and only gated by the profile).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodedFrame<'a> {
    pub frame: &'a RawFrame,
    pub ethernet: Option<EthernetHeader>,
    pub ipv4: Option<Ipv4Header>,
    pub tcp: Option<TcpHeader>,
}

impl<'a> DecodedFrame<'a> {
    pub fn raw(&self) -> &'a RawFrame {
        self.frame
    }
}

/// Classifies `frame` under `profile`.
///
/// Decode failures are not errors here: the affected layer is left out and
/// classification carries on with whatever else the bytes allow.
pub fn classify(frame: &RawFrame, profile: PlatformProfile) -> DecodedFrame<'_> {
    let buffer = frame.data();
    let captured_len = frame.captured_len();

    let ethernet = if profile.has_link_layer() {
        EthernetHeader::decode(buffer, 0, captured_len)
            .map_err(|e| skipped("ethernet", &e))
            .ok()
    } else {
        None
    };

    // IPv4 is attempted at the profile's offset even when the Ethernet
    // header itself failed to decode.
    let offset = profile.network_offset();
    let ipv4 = if captured_len >= offset + IPV4_MIN_HEADER_LEN {
        Ipv4Header::decode(buffer, offset, captured_len)
            .map_err(|e| skipped("ipv4", &e))
            .ok()
    } else {
        None
    };

    let tcp = ipv4.as_ref().and_then(|ip| {
        if !ip.is_tcp() {
            return None;
        }
        let tcp_offset = offset + ip.header_len();
        if captured_len < tcp_offset + TCP_MIN_HEADER_LEN {
            trace!(tcp_offset, captured_len, "tcp header not fully captured");
            return None;
        }
        TcpHeader::decode(buffer, tcp_offset, captured_len)
            .map_err(|e| skipped("tcp", &e))
            .ok()
    });

    DecodedFrame {
        frame,
        ethernet,
        ipv4,
        tcp,
    }
}

fn skipped(layer: &'static str, err: &DecodeError) {
    trace!(layer, error = %err, "layer not decoded");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv4Addr;

    fn ipv4_tcp() -> Vec<u8> {
        hex::decode(concat!(
            "4500002800004000400600000a0000010a000002",
            "01bbc73800000000000000005002ffff00000000",
        ))
        .unwrap()
    }

    fn with_ethernet(payload: &[u8]) -> Vec<u8> {
        let mut buf = hex::decode("aabbccddeeff0011223344550800").unwrap();
        buf.extend_from_slice(payload);
        buf
    }

    #[test]
    fn ipv4_tcp_without_link_layer() {
        let frame = RawFrame::new(ipv4_tcp());
        let decoded = classify(&frame, PlatformProfile::NO_LINK_LAYER);
        assert!(decoded.ethernet.is_none());
        let ip = decoded.ipv4.unwrap();
        assert_eq!(ip.source, Ipv4Addr::new(10, 0, 0, 1));
        assert_eq!(ip.destination, Ipv4Addr::new(10, 0, 0, 2));
        let tcp = decoded.tcp.unwrap();
        assert_eq!((tcp.source_port, tcp.destination_port), (443, 51000));
    }

    #[test]
    fn ethernet_ipv4_tcp() {
        let frame = RawFrame::new(with_ethernet(&ipv4_tcp()));
        let decoded = classify(&frame, PlatformProfile::LINK_LAYER);
        assert_eq!(
            decoded.ethernet.unwrap().source.to_string(),
            "00:11:22:33:44:55"
        );
        assert!(decoded.ipv4.is_some());
        assert!(decoded.tcp.is_some());
    }

    #[test]
    fn link_layer_profile_ignored_without_flag() {
        // The same bytes read without the link-layer profile put the MACs
        // where the IPv4 version nibble is expected.
        let frame = RawFrame::new(with_ethernet(&ipv4_tcp()));
        let decoded = classify(&frame, PlatformProfile::NO_LINK_LAYER);
        assert!(decoded.ethernet.is_none());
        assert!(decoded.ipv4.is_none());
        assert!(decoded.tcp.is_none());
    }

    #[test]
    fn ethernet_with_non_ip_payload() {
        // ARP request body: starts with hardware type 0x0001.
        let arp = hex::decode("0001080006040001aabbccddeeff0a0000010000000000000a000002").unwrap();
        let frame = RawFrame::new(with_ethernet(&arp));
        let decoded = classify(&frame, PlatformProfile::LINK_LAYER);
        assert!(decoded.ethernet.is_some());
        assert!(decoded.ipv4.is_none());
        assert!(decoded.tcp.is_none());
    }

    #[test]
    fn truncated_ethernet_does_not_block_ipv4_attempt() {
        // 14-byte offset is applied even though the header is unusable; with
        // fewer than 34 bytes nothing further decodes either.
        let frame = RawFrame::new(vec![0u8; 10]);
        let decoded = classify(&frame, PlatformProfile::LINK_LAYER);
        assert_eq!(
            decoded,
            DecodedFrame {
                frame: &frame,
                ethernet: None,
                ipv4: None,
                tcp: None,
            }
        );
    }

    #[test]
    fn non_tcp_protocol_has_no_tcp_layer() {
        let mut buf = ipv4_tcp();
        buf[9] = 17;
        let frame = RawFrame::new(buf);
        let decoded = classify(&frame, PlatformProfile::NO_LINK_LAYER);
        assert_eq!(decoded.ipv4.unwrap().protocol, 17);
        assert!(decoded.tcp.is_none());
    }

    #[test]
    fn tcp_requires_full_minimum_header() {
        let buf = ipv4_tcp();
        let frame = RawFrame::with_lengths(buf, 39, 40);
        let decoded = classify(&frame, PlatformProfile::NO_LINK_LAYER);
        assert!(decoded.ipv4.is_some());
        assert!(decoded.tcp.is_none());
    }

    #[test]
    fn tcp_offset_follows_ip_options() {
        let mut buf = hex::decode("4600002c00004000400600000a0000010a00000201010101").unwrap();
        buf.extend(hex::decode("0050d43100000000000000005002000000000000").unwrap());
        let frame = RawFrame::new(buf);
        let decoded = classify(&frame, PlatformProfile::NO_LINK_LAYER);
        assert_eq!(decoded.ipv4.unwrap().header_len(), 24);
        let tcp = decoded.tcp.unwrap();
        assert_eq!((tcp.source_port, tcp.destination_port), (80, 54321));
    }

    #[test]
    fn zero_ihl_omits_ip_but_keeps_ethernet() {
        let mut ip = ipv4_tcp();
        ip[0] = 0x40;
        let frame = RawFrame::new(with_ethernet(&ip));
        let decoded = classify(&frame, PlatformProfile::LINK_LAYER);
        assert!(decoded.ethernet.is_some());
        assert!(decoded.ipv4.is_none());
        assert!(decoded.tcp.is_none());
    }
}
