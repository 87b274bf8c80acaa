use thiserror::Error;

/// Reasons a header could not be extracted from a captured buffer.
///
/// Neither variant is fatal: the classifier simply omits the layer.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("insufficient captured data: need {needed} bytes, have {available}")]
    InsufficientLength { needed: usize, available: usize },
    #[error("malformed {field} field: {value:#x}")]
    MalformedField { field: &'static str, value: u32 },
}

impl DecodeError {
    /// True when the layer is absent because the capture was too short,
    /// as opposed to present but carrying a bogus field.
    pub fn is_truncation(&self) -> bool {
        matches!(self, DecodeError::InsufficientLength { .. })
    }
}
