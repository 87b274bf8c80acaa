//! Raw captured frames.

use bytes::Bytes;

/// One captured frame as handed over by the capture driver.
///
/// `captured_len` is the number of bytes actually present and is the only
/// bound decoders may trust. `original_len` is the on-wire length the driver
/// reported, which can be larger when the snapshot length cut the frame short.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawFrame {
    data: Bytes,
    captured_len: usize,
    original_len: usize,
}

impl RawFrame {
    /// Creates a frame whose captured and original lengths equal the data length.
    pub fn new(data: impl Into<Bytes>) -> Self {
        let data = data.into();
        let len = data.len();
        RawFrame {
            data,
            captured_len: len,
            original_len: len,
        }
    }

    /// Creates a frame with driver-reported lengths.
    ///
    /// `captured_len` is clamped to the data actually supplied, and
    /// `original_len` is never allowed to fall below `captured_len`.
    pub fn with_lengths(data: impl Into<Bytes>, captured_len: usize, original_len: usize) -> Self {
        let data = data.into();
        let captured_len = captured_len.min(data.len());
        RawFrame {
            data,
            captured_len,
            original_len: original_len.max(captured_len),
        }
    }

    /// The captured bytes, exactly `captured_len` of them.
    pub fn data(&self) -> &[u8] {
        &self.data[..self.captured_len]
    }

    pub fn captured_len(&self) -> usize {
        self.captured_len
    }

    pub fn original_len(&self) -> usize {
        self.original_len
    }

    /// True when the driver reported more bytes on the wire than it captured.
    pub fn is_truncated(&self) -> bool {
        self.original_len > self.captured_len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_uses_data_length() {
        let frame = RawFrame::new(vec![1, 2, 3]);
        assert_eq!(frame.captured_len(), 3);
        assert_eq!(frame.original_len(), 3);
        assert!(!frame.is_truncated());
    }

    #[test]
    fn captured_len_is_clamped_to_data() {
        let frame = RawFrame::with_lengths(vec![1, 2, 3], 10, 10);
        assert_eq!(frame.captured_len(), 3);
        assert_eq!(frame.data(), &[1, 2, 3]);
    }

    #[test]
    fn shorter_captured_len_hides_tail() {
        let frame = RawFrame::with_lengths(vec![1, 2, 3, 4], 2, 1500);
        assert_eq!(frame.data(), &[1, 2]);
        assert!(frame.is_truncated());
    }

    #[test]
    fn original_len_never_below_captured() {
        let frame = RawFrame::with_lengths(vec![0; 8], 8, 4);
        assert_eq!(frame.original_len(), 8);
    }
}
