//! Codec context
//!
//! The context fixes the byte order once and exposes every primitive as a
//! method, so code that speaks a cross-machine format never picks up the host
//! order by omission.

use bytes::Bytes;

use crate::composite::{
    read_bytes_ordered, read_bytes_shared_ordered, read_string_ordered, write_bytes_ordered,
    write_string_ordered,
};
use crate::scalar::{read_scalar, read_u8, write_scalar, write_u8};
use crate::string_buffer::{read_string_buffer_ordered, write_string_buffer_ordered, StringBuffer};
use crate::{ByteOrder, Result};

/// Encoding/decoding context carrying the agreed byte order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Codec {
    pub order: ByteOrder,
}

impl Codec {
    /// Create a context with the given byte order
    pub fn new(order: ByteOrder) -> Self {
        Self { order }
    }

    /// Create a context with little-endian byte order
    pub fn little_endian() -> Self {
        Self::new(ByteOrder::Little)
    }

    /// Create a context with big-endian byte order
    pub fn big_endian() -> Self {
        Self::new(ByteOrder::Big)
    }

    /// Context using the host order. Only suitable for data that never
    /// leaves the machine.
    pub fn native() -> Self {
        Self::new(ByteOrder::native())
    }

    // Scalars

    /// Write a u8
    #[inline]
    pub fn write_u8(&self, bytes: &mut [u8], offset: usize, value: u8) -> usize {
        write_u8(bytes, offset, value)
    }

    /// Read a u8
    #[inline]
    pub fn read_u8(&self, bytes: &[u8], offset: usize) -> (u8, usize) {
        read_u8(bytes, offset)
    }

    /// Write an i16
    #[inline]
    pub fn write_i16(&self, bytes: &mut [u8], offset: usize, value: i16) -> usize {
        write_scalar(bytes, offset, value, self.order)
    }

    /// Read an i16
    #[inline]
    pub fn read_i16(&self, bytes: &[u8], offset: usize) -> (i16, usize) {
        read_scalar(bytes, offset, self.order)
    }

    /// Write a u16
    #[inline]
    pub fn write_u16(&self, bytes: &mut [u8], offset: usize, value: u16) -> usize {
        write_scalar(bytes, offset, value, self.order)
    }

    /// Read a u16
    #[inline]
    pub fn read_u16(&self, bytes: &[u8], offset: usize) -> (u16, usize) {
        read_scalar(bytes, offset, self.order)
    }

    /// Write an i32
    #[inline]
    pub fn write_i32(&self, bytes: &mut [u8], offset: usize, value: i32) -> usize {
        write_scalar(bytes, offset, value, self.order)
    }

    /// Read an i32
    #[inline]
    pub fn read_i32(&self, bytes: &[u8], offset: usize) -> (i32, usize) {
        read_scalar(bytes, offset, self.order)
    }

    /// Write a u32
    #[inline]
    pub fn write_u32(&self, bytes: &mut [u8], offset: usize, value: u32) -> usize {
        write_scalar(bytes, offset, value, self.order)
    }

    /// Read a u32
    #[inline]
    pub fn read_u32(&self, bytes: &[u8], offset: usize) -> (u32, usize) {
        read_scalar(bytes, offset, self.order)
    }

    /// Write an f32
    #[inline]
    pub fn write_f32(&self, bytes: &mut [u8], offset: usize, value: f32) -> usize {
        write_scalar(bytes, offset, value, self.order)
    }

    /// Read an f32
    #[inline]
    pub fn read_f32(&self, bytes: &[u8], offset: usize) -> (f32, usize) {
        read_scalar(bytes, offset, self.order)
    }

    // Length-prefixed values

    /// Write a length-prefixed byte array
    pub fn write_bytes(&self, bytes: &mut [u8], offset: usize, value: &[u8]) -> Result<usize> {
        write_bytes_ordered(bytes, offset, value, self.order)
    }

    /// Read a length-prefixed byte array into `value`
    pub fn read_bytes(&self, bytes: &[u8], offset: usize, value: &mut Vec<u8>) -> Result<usize> {
        read_bytes_ordered(bytes, offset, value, self.order)
    }

    /// Read a length-prefixed byte array without copying
    pub fn read_bytes_shared(&self, bytes: &Bytes, offset: usize) -> Result<(Bytes, usize)> {
        read_bytes_shared_ordered(bytes, offset, self.order)
    }

    /// Write a length-prefixed UTF-8 string
    pub fn write_string(&self, bytes: &mut [u8], offset: usize, value: &str) -> Result<usize> {
        write_string_ordered(bytes, offset, value, self.order)
    }

    /// Read a length-prefixed UTF-8 string
    pub fn read_string(&self, bytes: &[u8], offset: usize) -> Result<(String, usize)> {
        read_string_ordered(bytes, offset, self.order)
    }

    /// Write a string buffer
    pub fn write_string_buffer(&self, bytes: &mut [u8], offset: usize, value: &StringBuffer) -> Result<usize> {
        write_string_buffer_ordered(bytes, offset, value, self.order)
    }

    /// Read a string buffer into `value`
    pub fn read_string_buffer(&self, bytes: &[u8], offset: usize, value: &mut StringBuffer) -> Result<usize> {
        read_string_buffer_ordered(bytes, offset, value, self.order)
    }
}
