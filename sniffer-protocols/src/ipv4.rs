//! ## sniffer-protocols::ipv4
//! IPv4 header decoder.
//!
//! Only the fields the classifier and renderer need are extracted. The
//! header-length nibble is validated here so the classifier can trust
//! [`Ipv4Header::header_len`] for offset arithmetic.

use std::net::Ipv4Addr;

use bytes::Buf;

use crate::{header_window, DecodeError};

/// Minimum (option-less) IPv4 header size in bytes.
pub const IPV4_MIN_HEADER_LEN: usize = 20;

/// Protocol numbers carried in the IPv4 `protocol` field.
pub mod protocol {
    pub const TCP: u8 = 6;
}

const IPV4_VERSION: u8 = 4;
const MIN_IHL: u8 = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ipv4Header {
    pub source: Ipv4Addr,
    pub destination: Ipv4Addr,
    /// Header length in 32-bit words (5..=15).
    pub ihl: u8,
    pub protocol: u8,
}

impl Ipv4Header {
    /// Decodes an IPv4 header starting at `offset`.
    ///
    /// A version other than 4, or a header length below the 5-word minimum,
    /// is reported as [`DecodeError::MalformedField`].
    pub fn decode(buffer: &[u8], offset: usize, captured_len: usize) -> Result<Self, DecodeError> {
        let mut window = header_window(buffer, offset, captured_len, IPV4_MIN_HEADER_LEN)?;

        let version_ihl = window.get_u8();
        let version = version_ihl >> 4;
        if version != IPV4_VERSION {
            return Err(DecodeError::MalformedField {
                field: "version",
                value: version.into(),
            });
        }
        let ihl = version_ihl & 0x0F;
        if ihl < MIN_IHL {
            return Err(DecodeError::MalformedField {
                field: "header length",
                value: ihl.into(),
            });
        }

        // tos, total length, id, flags/fragment offset, ttl
        window.advance(8);
        let protocol = window.get_u8();
        // checksum
        window.advance(2);
        let source = Ipv4Addr::from(window.get_u32());
        let destination = Ipv4Addr::from(window.get_u32());

        Ok(Ipv4Header {
            source,
            destination,
            ihl,
            protocol,
        })
    }

    /// Header length in bytes, including options.
    pub fn header_len(&self) -> usize {
        usize::from(self.ihl) * 4
    }

    pub fn is_tcp(&self) -> bool {
        self.protocol == protocol::TCP
    }
}
