//! Flat binary codec
//!
//! Primitives for writing fixed-width scalars, length-prefixed byte arrays
//! and UTF-8 strings into a caller-owned byte buffer, with an explicitly
//! chosen byte order.
//!
//! # Wire Format
//!
//! - `i16`/`u16` take 2 bytes, `i32`/`u32`/`f32` take 4, `u8` takes 1
//! - Variable-length values carry an `i32` byte-length prefix
//! - The byte order is never recorded in the data
//!
//! Every function takes a buffer and an offset and returns the number of
//! bytes it consumed; the caller adds that to its own cursor:
//!
//! ```
//! use flatcodec::{ByteOrder, Codec};
//!
//! let ctx = Codec::new(ByteOrder::Big);
//! let mut buf = [0u8; 32];
//! let mut pos = 0;
//! pos += ctx.write_i32(&mut buf, pos, 42);
//! pos += ctx.write_string(&mut buf, pos, "hi").unwrap();
//! assert_eq!(pos, 10);
//! ```
//!
//! Offsets and lengths outside the buffer panic. Malformed input that can
//! be detected (a negative prefix, invalid UTF-8) is returned as a
//! [`CodecError`].

mod byte_order;
mod composite;
mod context;
mod error;
mod scalar;
mod string_buffer;

pub use byte_order::ByteOrder;
pub use composite::{
    encoded_len, read_bytes, read_bytes_ordered, read_bytes_shared, read_bytes_shared_ordered,
    read_string, read_string_ordered, write_bytes, write_bytes_ordered, write_string,
    write_string_ordered, LENGTH_PREFIX_SIZE, MAX_PAYLOAD_LEN,
};
pub use context::Codec;
pub use error::{CodecError, Result};
pub use scalar::{
    read_f32, read_f32_ordered, read_i16, read_i16_ordered, read_i32, read_i32_ordered,
    read_scalar, read_u16, read_u16_ordered, read_u32, read_u32_ordered, read_u8, write_f32,
    write_f32_ordered, write_i16, write_i16_ordered, write_i32, write_i32_ordered, write_scalar,
    write_u16, write_u16_ordered, write_u32, write_u32_ordered, write_u8, Scalar,
};
pub use string_buffer::{
    read_string_buffer, read_string_buffer_ordered, write_string_buffer,
    write_string_buffer_ordered, StringBuffer,
};

/// Re-export bytes for convenience
pub use bytes::{Bytes, BytesMut};
