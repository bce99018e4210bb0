//! Reusable string slot
//!
//! [`StringBuffer`] keeps a length-prefixed string at offset 0 of its own
//! backing buffer. Overwriting it with a string that still fits reuses the
//! allocation; the buffer only ever grows. Bytes left over from a longer
//! previous value stay in place but are never read, since the prefix bounds
//! every read.
//!
//! The embedded prefix uses the host byte order. [`write_string_buffer`]
//! copies the backing bytes verbatim, so a serialized buffer should only be
//! read back on a host with the same native order.

use tracing::trace;

use crate::composite::{encoded_len, read_length_prefix, read_string, write_bytes_ordered, write_string};
use crate::composite::{LENGTH_PREFIX_SIZE, MAX_PAYLOAD_LEN};
use crate::scalar::{read_i32, read_i32_ordered, write_i32_ordered};
use crate::{ByteOrder, CodecError, Result};

/// Byte buffer holding one length-prefixed UTF-8 string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringBuffer {
    buffer_size: i32,
    buffer: Vec<u8>,
}

impl StringBuffer {
    /// Capacity used when no positive size is requested
    pub const DEFAULT_BUFFER_SIZE: i32 = 128;

    /// Empty buffer with the default capacity
    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_BUFFER_SIZE)
    }

    /// Empty buffer preallocated to `buffer_size` bytes.
    ///
    /// Non-positive sizes fall back to [`Self::DEFAULT_BUFFER_SIZE`]; positive
    /// sizes are raised to at least the prefix size. A fresh buffer is
    /// zero-filled, so it reads back as the empty string.
    pub fn with_capacity(buffer_size: i32) -> Self {
        let buffer_size = if buffer_size > 0 {
            buffer_size.max(LENGTH_PREFIX_SIZE as i32)
        } else {
            Self::DEFAULT_BUFFER_SIZE
        };
        Self {
            buffer_size,
            buffer: vec![0; buffer_size as usize],
        }
    }

    /// Buffer sized exactly for `value` and its prefix.
    ///
    /// Fails with [`CodecError::PayloadTooLarge`] when the encoded form does
    /// not fit an `i32` size.
    pub fn from_string(value: &str) -> Result<Self> {
        let buffer_size = Self::required_size(value)?;
        let mut buffer = vec![0; buffer_size as usize];
        write_string(&mut buffer, 0, value)?;
        Ok(Self { buffer_size, buffer })
    }

    fn required_size(value: &str) -> Result<i32> {
        i32::try_from(encoded_len(value.len())).map_err(|_| CodecError::PayloadTooLarge {
            len: value.len(),
            max: MAX_PAYLOAD_LEN - LENGTH_PREFIX_SIZE,
        })
    }

    /// Replace the stored string.
    ///
    /// Allocates a new buffer of exactly the encoded size only when the
    /// current one is too small; otherwise overwrites in place.
    pub fn set_string(&mut self, value: &str) -> Result<()> {
        let required = Self::required_size(value)?;
        if self.buffer.len() < required as usize {
            trace!(from = self.buffer.len(), to = required, "growing string buffer");
            self.buffer_size = required;
            self.buffer = vec![0; required as usize];
        }
        write_string(&mut self.buffer, 0, value)?;
        Ok(())
    }

    /// Decode the stored string
    pub fn read_string(&self) -> Result<String> {
        read_string(&self.buffer, 0).map(|(value, _)| value)
    }

    /// Size of the backing buffer in bytes
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// Recorded buffer size, as carried on the wire
    pub fn buffer_size(&self) -> i32 {
        self.buffer_size
    }

    /// Raw backing bytes, prefix included
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }
}

impl Default for StringBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl TryFrom<&str> for StringBuffer {
    type Error = CodecError;

    fn try_from(value: &str) -> Result<Self> {
        Self::from_string(value)
    }
}

impl TryFrom<&StringBuffer> for String {
    type Error = CodecError;

    fn try_from(value: &StringBuffer) -> Result<Self> {
        value.read_string()
    }
}

/// Write a string buffer in host byte order.
pub fn write_string_buffer(bytes: &mut [u8], offset: usize, value: &StringBuffer) -> Result<usize> {
    write_string_buffer_ordered(bytes, offset, value, ByteOrder::native())
}

/// Write a string buffer as its `i32` size followed by its backing bytes as
/// a length-prefixed byte array.
///
/// Returns `8 + capacity`.
pub fn write_string_buffer_ordered(
    bytes: &mut [u8],
    offset: usize,
    value: &StringBuffer,
    order: ByteOrder,
) -> Result<usize> {
    let mut cursor = offset;
    cursor += write_i32_ordered(bytes, cursor, value.buffer_size, order);
    cursor += write_bytes_ordered(bytes, cursor, &value.buffer, order)?;
    Ok(cursor - offset)
}

/// Read a string buffer in host byte order.
pub fn read_string_buffer(bytes: &[u8], offset: usize, value: &mut StringBuffer) -> Result<usize> {
    read_string_buffer_ordered(bytes, offset, value, ByteOrder::native())
}

/// Read a string buffer written by [`write_string_buffer_ordered`] into
/// `value`, reusing its allocation where possible.
///
/// The backing bytes are checked before `value` is touched: the recorded
/// size must equal the array length, and the embedded string prefix must lie
/// within the array. `value` is left unchanged on error.
pub fn read_string_buffer_ordered(
    bytes: &[u8],
    offset: usize,
    value: &mut StringBuffer,
    order: ByteOrder,
) -> Result<usize> {
    let mut cursor = offset;
    let (buffer_size, n) = read_i32_ordered(bytes, cursor, order);
    if buffer_size < 0 {
        return Err(CodecError::NegativeLength(buffer_size));
    }
    cursor += n;

    let (len, prefix) = read_length_prefix(bytes, cursor, order)?;
    cursor += prefix;
    let backing = &bytes[cursor..cursor + len];
    validate_backing(buffer_size, backing)?;
    cursor += len;

    value.buffer.clear();
    value.buffer.extend_from_slice(backing);
    value.buffer_size = buffer_size;
    Ok(cursor - offset)
}

/// Check that `backing` can serve as a string buffer of `buffer_size` bytes
fn validate_backing(buffer_size: i32, backing: &[u8]) -> Result<()> {
    if buffer_size as usize != backing.len() {
        return Err(CodecError::BufferSizeMismatch {
            recorded: buffer_size,
            actual: backing.len(),
        });
    }
    if backing.len() < LENGTH_PREFIX_SIZE {
        return Err(CodecError::BufferUnderflow {
            needed: LENGTH_PREFIX_SIZE,
            have: backing.len(),
        });
    }

    // embedded prefix is always host order
    let (inner, _) = read_i32(backing, 0);
    if inner < 0 {
        return Err(CodecError::NegativeLength(inner));
    }
    let needed = encoded_len(inner as usize);
    if needed > backing.len() {
        trace!(needed, have = backing.len(), "string buffer prefix past end of backing bytes");
        return Err(CodecError::BufferUnderflow {
            needed,
            have: backing.len(),
        });
    }
    Ok(())
}
