//! Length-prefixed byte arrays and strings
//!
//! Wire format:
//! ```text
//! length: i32        # payload size in bytes, in the requested byte order
//! payload[length]    # raw bytes, or UTF-8 for strings
//! ```
//!
//! String prefixes count encoded UTF-8 bytes, not characters. The decoder
//! trusts the prefix: a prefix that runs past the end of the buffer panics
//! like any other out-of-bounds access, while a negative prefix or a payload
//! that is not UTF-8 is reported as a [`CodecError`].

use bytes::Bytes;
use tracing::debug;

use crate::scalar::{read_i32_ordered, write_i32_ordered};
use crate::{ByteOrder, CodecError, Result};

/// Size of the length prefix in bytes
pub const LENGTH_PREFIX_SIZE: usize = 4;

/// Largest payload a prefix can describe
pub const MAX_PAYLOAD_LEN: usize = i32::MAX as usize;

/// Total encoded size of a payload of `payload_len` bytes
#[inline]
pub const fn encoded_len(payload_len: usize) -> usize {
    LENGTH_PREFIX_SIZE + payload_len
}

fn length_prefix(len: usize) -> Result<i32> {
    i32::try_from(len).map_err(|_| CodecError::PayloadTooLarge {
        len,
        max: MAX_PAYLOAD_LEN,
    })
}

/// Read a length prefix, returning the payload length and the prefix size
pub(crate) fn read_length_prefix(bytes: &[u8], offset: usize, order: ByteOrder) -> Result<(usize, usize)> {
    let (len, consumed) = read_i32_ordered(bytes, offset, order);
    if len < 0 {
        debug!(offset, len, "rejected negative length prefix");
        return Err(CodecError::NegativeLength(len));
    }
    Ok((len as usize, consumed))
}

/// Write a length-prefixed byte array in host byte order.
pub fn write_bytes(bytes: &mut [u8], offset: usize, value: &[u8]) -> Result<usize> {
    write_bytes_ordered(bytes, offset, value, ByteOrder::native())
}

/// Write a length-prefixed byte array.
///
/// Returns `4 + value.len()`.
///
/// # Panics
///
/// Panics if the encoded form does not fit in `bytes` from `offset`.
pub fn write_bytes_ordered(bytes: &mut [u8], offset: usize, value: &[u8], order: ByteOrder) -> Result<usize> {
    let prefix = length_prefix(value.len())?;
    let mut cursor = offset;

    cursor += write_i32_ordered(bytes, cursor, prefix, order);
    bytes[cursor..cursor + value.len()].copy_from_slice(value);
    cursor += value.len();

    Ok(cursor - offset)
}

/// Read a length-prefixed byte array in host byte order.
pub fn read_bytes(bytes: &[u8], offset: usize, value: &mut Vec<u8>) -> Result<usize> {
    read_bytes_ordered(bytes, offset, value, ByteOrder::native())
}

/// Read a length-prefixed byte array into `value`.
///
/// `value` is replaced by exactly the decoded payload. Its allocation is
/// reused when large enough, so a long-lived destination stops allocating
/// once it has seen the largest payload.
///
/// Returns `4 + payload length`.
///
/// # Panics
///
/// Panics if the prefix or payload extends past the end of `bytes`.
pub fn read_bytes_ordered(bytes: &[u8], offset: usize, value: &mut Vec<u8>, order: ByteOrder) -> Result<usize> {
    let (len, prefix) = read_length_prefix(bytes, offset, order)?;
    let start = offset + prefix;
    let payload = &bytes[start..start + len];

    value.clear();
    value.extend_from_slice(payload);

    Ok(prefix + len)
}

/// Read a length-prefixed byte array in host byte order without copying.
pub fn read_bytes_shared(bytes: &Bytes, offset: usize) -> Result<(Bytes, usize)> {
    read_bytes_shared_ordered(bytes, offset, ByteOrder::native())
}

/// Read a length-prefixed byte array as a slice sharing `bytes`' storage.
pub fn read_bytes_shared_ordered(bytes: &Bytes, offset: usize, order: ByteOrder) -> Result<(Bytes, usize)> {
    let (len, prefix) = read_length_prefix(bytes, offset, order)?;
    let start = offset + prefix;
    Ok((bytes.slice(start..start + len), prefix + len))
}

/// Write a length-prefixed UTF-8 string in host byte order.
pub fn write_string(bytes: &mut [u8], offset: usize, value: &str) -> Result<usize> {
    write_string_ordered(bytes, offset, value, ByteOrder::native())
}

/// Write a length-prefixed UTF-8 string.
///
/// Returns `4 + value.len()`, where `value.len()` is the UTF-8 byte length.
///
/// # Panics
///
/// Panics if the encoded form does not fit in `bytes` from `offset`.
pub fn write_string_ordered(bytes: &mut [u8], offset: usize, value: &str, order: ByteOrder) -> Result<usize> {
    write_bytes_ordered(bytes, offset, value.as_bytes(), order)
}

/// Read a length-prefixed UTF-8 string in host byte order.
pub fn read_string(bytes: &[u8], offset: usize) -> Result<(String, usize)> {
    read_string_ordered(bytes, offset, ByteOrder::native())
}

/// Read a length-prefixed UTF-8 string.
///
/// Returns the string and `4 + payload length`. A payload that is not valid
/// UTF-8 yields [`CodecError::InvalidUtf8`]; nothing is replaced or dropped.
///
/// # Panics
///
/// Panics if the prefix or payload extends past the end of `bytes`.
pub fn read_string_ordered(bytes: &[u8], offset: usize, order: ByteOrder) -> Result<(String, usize)> {
    let (len, prefix) = read_length_prefix(bytes, offset, order)?;
    let start = offset + prefix;
    let payload = bytes[start..start + len].to_vec();

    let value = String::from_utf8(payload).map_err(|e| {
        debug!(offset, len, "rejected string payload: {}", e.utf8_error());
        CodecError::from(e)
    })?;

    Ok((value, prefix + len))
}
