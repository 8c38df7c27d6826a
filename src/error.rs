//! Error types for binary blob access.

use thiserror::Error;

/// Errors produced while loading or reading a [`BinaryBlob`](crate::BinaryBlob).
#[derive(Debug, Error)]
pub enum BlobError {
    /// A read would run past the end of the buffer.
    #[error("Read of {needed} bytes at offset {offset:#x} exceeds blob length {len:#x}")]
    OutOfBounds {
        offset: usize,
        needed: usize,
        len: usize,
    },

    /// File is larger than the configured limit
    #[error("File size of {found} bytes exceeds the maximum allowed size of {limit} bytes.")]
    FileTooLarge { limit: u64, found: u64 },

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for blob operations
pub type Result<T> = std::result::Result<T, BlobError>;
