//! Codec error types
//!
//! Only malformed input is reported here. Offsets or lengths that reach past
//! the end of the supplied buffer are caller bugs and panic through ordinary
//! slice indexing.

use thiserror::Error;

/// Recoverable encoding/decoding errors
#[derive(Debug, Error)]
pub enum CodecError {
    /// Payload of a length-prefixed string is not valid UTF-8
    #[error("invalid UTF-8 in string payload: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    /// Length prefix decoded to a negative value
    #[error("negative length prefix: {0}")]
    NegativeLength(i32),

    /// Not enough data for an embedded length-prefixed value
    #[error("buffer underflow: needed {needed} bytes, have {have}")]
    BufferUnderflow { needed: usize, have: usize },

    /// Recorded buffer size disagrees with the bytes that follow it
    #[error("buffer size mismatch: recorded {recorded}, actual {actual}")]
    BufferSizeMismatch { recorded: i32, actual: usize },

    /// Payload does not fit in a 32-bit signed length prefix
    #[error("payload too large: {len} bytes exceeds maximum {max}")]
    PayloadTooLarge { len: usize, max: usize },
}

/// Result type for codec operations
pub type Result<T> = std::result::Result<T, CodecError>;
