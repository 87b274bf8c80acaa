//! ## sniffer-protocols::ethernet
//! Ethernet II header decoder. Only the two MAC addresses are rendered, but
//! the EtherType is kept since it costs nothing once the 14 bytes are known
//! to be present.

use std::fmt;

use bytes::Buf;

use crate::{header_window, DecodeError};

/// Length of an Ethernet II header: destination MAC, source MAC, EtherType.
pub const ETHERNET_HEADER_LEN: usize = 14;

/// Well-known EtherTypes.
pub mod ethertype {
    pub const IPV4: u16 = 0x0800;
}

/// A 48-bit hardware address.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MacAddr(pub [u8; 6]);

impl fmt::Display for MacAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d, e, g] = self.0;
        write!(f, "{a:02x}:{b:02x}:{c:02x}:{d:02x}:{e:02x}:{g:02x}")
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EthernetHeader {
    pub destination: MacAddr,
    pub source: MacAddr,
    pub ether_type: u16,
}

impl EthernetHeader {
    /// Decodes an Ethernet II header starting at `offset`.
    pub fn decode(buffer: &[u8], offset: usize, captured_len: usize) -> Result<Self, DecodeError> {
        let mut window = header_window(buffer, offset, captured_len, ETHERNET_HEADER_LEN)?;

        let mut destination = [0u8; 6];
        window.copy_to_slice(&mut destination);
        let mut source = [0u8; 6];
        window.copy_to_slice(&mut source);
        let ether_type = window.get_u16();

        Ok(EthernetHeader {
            destination: MacAddr(destination),
            source: MacAddr(source),
            ether_type,
        })
    }
}
