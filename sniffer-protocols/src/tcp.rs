//! ## sniffer-protocols::tcp
//! TCP header decoder. The sniffer only reports the port pair, which lives
//! in the first four bytes of the header.

use bytes::Buf;

use crate::{header_window, DecodeError};

/// Minimum (option-less) TCP header size in bytes.
pub const TCP_MIN_HEADER_LEN: usize = 20;

const TCP_PORTS_LEN: usize = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TcpHeader {
    pub source_port: u16,
    pub destination_port: u16,
}

impl TcpHeader {
    /// Decodes the port pair of a TCP header starting at `offset`.
    pub fn decode(buffer: &[u8], offset: usize, captured_len: usize) -> Result<Self, DecodeError> {
        let mut window = header_window(buffer, offset, captured_len, TCP_PORTS_LEN)?;
        Ok(TcpHeader {
            source_port: window.get_u16(),
            destination_port: window.get_u16(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn decodes_ports() {
        // 443 -> 51000
        let buf = hex::decode("01bbc738").unwrap();
        let tcp = TcpHeader::decode(&buf, 0, buf.len()).unwrap();
        assert_eq!(tcp.source_port, 443);
        assert_eq!(tcp.destination_port, 51000);
    }

    #[test]
    fn three_bytes_is_truncated() {
        let buf = [0x01, 0xbb, 0xc7, 0x38];
        let err = TcpHeader::decode(&buf, 0, 3).unwrap_err();
        assert_eq!(
            err,
            DecodeError::InsufficientLength {
                needed: 4,
                available: 3
            }
        );
    }

    proptest! {
        #[test]
        fn port_round_trip(src in any::<u16>(), dst in any::<u16>(), pad in 0usize..8) {
            let mut buf = vec![0u8; pad];
            buf.extend_from_slice(&src.to_be_bytes());
            buf.extend_from_slice(&dst.to_be_bytes());
            let tcp = TcpHeader::decode(&buf, pad, buf.len()).unwrap();
            prop_assert_eq!(tcp.source_port, src);
            prop_assert_eq!(tcp.destination_port, dst);
        }
    }
}
