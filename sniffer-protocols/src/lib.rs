//! # Sniffer Protocol Decoders
//!
//! Bounds-checked header decoders for the layers the sniffer understands:
//! Ethernet II, IPv4 and TCP.
//!
//! Every decoder has the same shape, `decode(buffer, offset, captured_len)`,
//! and never looks at a byte at or beyond `captured_len` (or the end of the
//! buffer, whichever comes first).

pub mod error;
pub mod ethernet;
pub mod ipv4;
pub mod tcp;

pub use error::DecodeError;
pub use ethernet::{EthernetHeader, MacAddr};
pub use ipv4::Ipv4Header;
pub use tcp::TcpHeader;

/// Returns the `needed` bytes starting at `offset`, provided they lie inside
/// both the buffer and the captured length.
pub(crate) fn header_window(
    buffer: &[u8],
    offset: usize,
    captured_len: usize,
    needed: usize,
) -> Result<&[u8], DecodeError> {
    let bound = captured_len.min(buffer.len());
    let available = bound.saturating_sub(offset);
    if available < needed {
        return Err(DecodeError::InsufficientLength { needed, available });
    }
    Ok(&buffer[offset..offset + needed])
}
