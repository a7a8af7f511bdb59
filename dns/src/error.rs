use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("message too short for a header: {len} bytes, need 12")]
    TruncatedMessage { len: usize },

    #[error("label at offset {offset} declares {length} bytes but only {available} remain")]
    InvalidLabelLength {
        offset: usize,
        length: usize,
        available: usize,
    },

    #[error("question truncated at offset {offset}")]
    TruncatedQuestion { offset: usize },

    #[error("resource record truncated at offset {offset}")]
    TruncatedRecord { offset: usize },
}
