// Tue Jan 13 2026 - Alex

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CodecError>;

#[derive(Error, Debug)]
pub enum CodecError {
    #[error("Duplicate field: {0}")]
    DuplicateField(String),
    #[error("Unknown scalar type: {0}")]
    UnknownScalarType(String),
    #[error("Invalid field name: {0:?}")]
    InvalidFieldName(String),
    #[error("Layout too large: {0} bytes")]
    LayoutTooLarge(u64),
    #[error("Layout mismatch: {0}")]
    LayoutMismatch(String),
    #[error("Buffer too small: need {needed} bytes, got {len}")]
    BufferTooSmall { needed: usize, len: usize },
    #[error("Out of bounds: {width} bytes at offset {offset}, buffer is {len} bytes")]
    OutOfBounds { offset: usize, width: usize, len: usize },
    #[error("Missing field: {0}")]
    MissingField(String),
    #[error("Cannot synthesize {name:?}: {reason}")]
    Synthesis { name: String, reason: String },
    #[error("Descriptor error: {0}")]
    Descriptor(#[from] serde_json::Error),
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

impl CodecError {
    pub fn is_schema_error(&self) -> bool {
        matches!(
            self,
            Self::DuplicateField(_)
                | Self::UnknownScalarType(_)
                | Self::InvalidFieldName(_)
                | Self::LayoutTooLarge(_)
                | Self::LayoutMismatch(_)
        )
    }

    pub fn is_bounds_error(&self) -> bool {
        matches!(self, Self::BufferTooSmall { .. } | Self::OutOfBounds { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_classification() {
        assert!(CodecError::DuplicateField("id".into()).is_schema_error());
        assert!(CodecError::BufferTooSmall { needed: 18, len: 4 }.is_bounds_error());
        assert!(!CodecError::MissingField("type".into()).is_bounds_error());
    }

    #[test]
    fn test_error_display() {
        let err = CodecError::OutOfBounds { offset: 16, width: 4, len: 18 };
        assert_eq!(err.to_string(), "Out of bounds: 4 bytes at offset 16, buffer is 18 bytes");
    }
}
