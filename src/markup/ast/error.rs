//! Error types for strict parsing
//!
//! Lenient parsing never fails. Strict parsing reports the first structural problem it
//! meets, with the byte offset of the tag that caused it.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MalformedMarkupError {
    #[error("unterminated tag '{name}' at byte {offset}")]
    UnterminatedTag { name: String, offset: usize },

    #[error("end tag </{name}> at byte {offset} has no open element to close")]
    StrayEndTag { name: String, offset: usize },

    #[error("end tag </{found}> at byte {offset} does not match open element <{expected}>")]
    NameMismatch {
        expected: String,
        found: String,
        offset: usize,
    },
}

impl MalformedMarkupError {
    /// Byte offset of the offending tag in the source
    pub fn offset(&self) -> usize {
        match self {
            MalformedMarkupError::UnterminatedTag { offset, .. }
            | MalformedMarkupError::StrayEndTag { offset, .. }
            | MalformedMarkupError::NameMismatch { offset, .. } => *offset,
        }
    }
}
