//! Error types for GUID parsing and encoding.

use thiserror::Error;

/// Errors that can occur when parsing or encoding a GUID.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GuidError {
    /// The text is not exactly 36 characters long.
    #[error("GUID must be 36 characters, got {actual}")]
    InvalidLength { actual: usize },

    /// A group separator is missing or misplaced.
    #[error("expected '-' at offset {offset}, got {found:?}")]
    MissingSeparator { offset: usize, found: char },

    /// A digit position holds something other than `0-9A-F`.
    #[error("invalid hex digit {found:?} at offset {offset}")]
    InvalidDigit { offset: usize, found: char },

    /// Rendering produced the wrong number of characters.
    #[error("encoded GUID has {actual} characters, expected 36")]
    EncodeLength { actual: usize },
}

impl GuidError {
    /// Returns true if this error is about the overall length of the text.
    pub fn is_length_error(&self) -> bool {
        matches!(
            self,
            GuidError::InvalidLength { .. } | GuidError::EncodeLength { .. }
        )
    }

    /// Returns true if this error points at a specific bad character.
    pub fn is_character_error(&self) -> bool {
        matches!(
            self,
            GuidError::MissingSeparator { .. } | GuidError::InvalidDigit { .. }
        )
    }

    /// Offset of the offending character, if any.
    pub fn offset(&self) -> Option<usize> {
        match self {
            GuidError::MissingSeparator { offset, .. } | GuidError::InvalidDigit { offset, .. } => {
                Some(*offset)
            }
            _ => None,
        }
    }
}
