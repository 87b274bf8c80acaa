//! Text rendering of decoded frames.
//!
//! The layout is fixed so that the output for a given frame and profile is
//! byte-for-byte reproducible:
//!
//! ```text
//! ========== Frame Start ==========
//! Captured Length: 40 bytes
//! Source IP: 10.0.0.1
//! Destination IP: 10.0.0.2
//! Source Port: 443
//! Destination Port: 51000
//! Hex Dump:
//! 45 00 00 28 00 00 40 00
//! ...
//! ASCII Dump:
//! E..(..@.@.......
//! =========== Frame End ===========
//! ```

use std::io::{self, Write};

use crate::classify::DecodedFrame;

pub const FRAME_START: &str = "========== Frame Start ==========";
pub const FRAME_END: &str = "=========== Frame End ===========";

const HEX_LINE_WIDTH: usize = 8;

/// Writes the report for one decoded frame.
pub fn render<W: Write>(decoded: &DecodedFrame<'_>, out: &mut W) -> io::Result<()> {
    let frame = decoded.raw();

    writeln!(out, "{FRAME_START}")?;
    writeln!(out, "Captured Length: {} bytes", frame.captured_len())?;
    if frame.is_truncated() {
        writeln!(out, "Original Length: {} bytes", frame.original_len())?;
    }

    if let Some(eth) = &decoded.ethernet {
        writeln!(out, "Source MAC: {}", eth.source)?;
        writeln!(out, "Destination MAC: {}", eth.destination)?;
    }
    if let Some(ip) = &decoded.ipv4 {
        writeln!(out, "Source IP: {}", ip.source)?;
        writeln!(out, "Destination IP: {}", ip.destination)?;
    }
    if let Some(tcp) = &decoded.tcp {
        writeln!(out, "Source Port: {}", tcp.source_port)?;
        writeln!(out, "Destination Port: {}", tcp.destination_port)?;
    }

    write!(out, "Hex Dump:")?;
    write_hex_dump(frame.data(), out)?;
    writeln!(out)?;

    writeln!(out, "ASCII Dump:")?;
    write_ascii_dump(frame.data(), out)?;
    writeln!(out)?;

    writeln!(out, "{FRAME_END}")
}

/// Renders into a `String`.
pub fn render_to_string(decoded: &DecodedFrame<'_>) -> String {
    let mut buf = Vec::with_capacity(256 + decoded.raw().captured_len() * 4);
    render(decoded, &mut buf).expect("writing to a Vec cannot fail");
    String::from_utf8_lossy(&buf).into_owned()
}

/// Hex tokens, eight per line. The break is emitted before every index that
/// is a multiple of eight, index 0 included, so the dump always opens on a
/// fresh line.
pub fn write_hex_dump<W: Write>(data: &[u8], out: &mut W) -> io::Result<()> {
    for (i, byte) in data.iter().enumerate() {
        if i % HEX_LINE_WIDTH == 0 {
            writeln!(out)?;
        }
        write!(out, "{byte:02x} ")?;
    }
    Ok(())
}

/// One character per byte: printable ASCII as-is, everything else as `.`.
pub fn write_ascii_dump<W: Write>(data: &[u8], out: &mut W) -> io::Result<()> {
    let line: String = data.iter().map(|&b| printable(b)).collect();
    out.write_all(line.as_bytes())
}

fn printable(b: u8) -> char {
    if b.is_ascii_graphic() || b == b' ' {
        b as char
    } else {
        '.'
    }
}
