//! Typed fields for the command line encoder/decoder
//!
//! Fields are written as `TYPE:VALUE`:
//!
//! | Type | Value                      |
//! |------|----------------------------|
//! | u8   | 0..=255                    |
//! | i16  | signed 16-bit              |
//! | u16  | unsigned 16-bit            |
//! | i32  | signed 32-bit              |
//! | u32  | unsigned 32-bit            |
//! | f32  | float, or `0x` + raw bits  |
//! | str  | UTF-8 text (rest of arg)   |
//! | hex  | raw bytes as hex digits    |

use std::fmt;
use std::str::FromStr;

use flatcodec::{encoded_len, Codec};

use crate::error::{CliError, Result};
use crate::hex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    U8,
    I16,
    U16,
    I32,
    U32,
    F32,
    Str,
    Bytes,
}

impl FieldType {
    pub fn name(self) -> &'static str {
        match self {
            FieldType::U8 => "u8",
            FieldType::I16 => "i16",
            FieldType::U16 => "u16",
            FieldType::I32 => "i32",
            FieldType::U32 => "u32",
            FieldType::F32 => "f32",
            FieldType::Str => "str",
            FieldType::Bytes => "hex",
        }
    }

    /// Size of fixed-width types, `None` for length-prefixed ones
    pub fn fixed_width(self) -> Option<usize> {
        match self {
            FieldType::U8 => Some(1),
            FieldType::I16 | FieldType::U16 => Some(2),
            FieldType::I32 | FieldType::U32 | FieldType::F32 => Some(4),
            FieldType::Str | FieldType::Bytes => None,
        }
    }

    /// Decode one field at `offset`, checking the input length first so a
    /// short or corrupt image is reported instead of panicking.
    pub fn decode(self, ctx: &Codec, bytes: &[u8], offset: usize) -> Result<(FieldValue, usize)> {
        let needed = match self.fixed_width() {
            Some(width) => width,
            None => {
                ensure_available(bytes, offset, 4)?;
                let (len, _) = ctx.read_i32(bytes, offset);
                // negative prefixes are left for the codec to reject
                encoded_len(usize::try_from(len).unwrap_or(0))
            }
        };
        ensure_available(bytes, offset, needed)?;

        let decoded = match self {
            FieldType::U8 => {
                let (v, n) = ctx.read_u8(bytes, offset);
                (FieldValue::U8(v), n)
            }
            FieldType::I16 => {
                let (v, n) = ctx.read_i16(bytes, offset);
                (FieldValue::I16(v), n)
            }
            FieldType::U16 => {
                let (v, n) = ctx.read_u16(bytes, offset);
                (FieldValue::U16(v), n)
            }
            FieldType::I32 => {
                let (v, n) = ctx.read_i32(bytes, offset);
                (FieldValue::I32(v), n)
            }
            FieldType::U32 => {
                let (v, n) = ctx.read_u32(bytes, offset);
                (FieldValue::U32(v), n)
            }
            FieldType::F32 => {
                let (v, n) = ctx.read_f32(bytes, offset);
                (FieldValue::F32(v), n)
            }
            FieldType::Str => {
                let (v, n) = ctx.read_string(bytes, offset)?;
                (FieldValue::Str(v), n)
            }
            FieldType::Bytes => {
                let mut v = Vec::new();
                let n = ctx.read_bytes(bytes, offset, &mut v)?;
                (FieldValue::Bytes(v), n)
            }
        };
        Ok(decoded)
    }
}

fn ensure_available(bytes: &[u8], offset: usize, needed: usize) -> Result<()> {
    let have = bytes.len().saturating_sub(offset);
    if have < needed {
        return Err(CliError::Truncated { offset, needed, have });
    }
    Ok(())
}

impl FromStr for FieldType {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "u8" | "byte" => Ok(FieldType::U8),
            "i16" => Ok(FieldType::I16),
            "u16" => Ok(FieldType::U16),
            "i32" => Ok(FieldType::I32),
            "u32" => Ok(FieldType::U32),
            "f32" => Ok(FieldType::F32),
            "str" | "string" => Ok(FieldType::Str),
            "hex" | "bytes" => Ok(FieldType::Bytes),
            other => Err(CliError::UnknownType(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    U8(u8),
    I16(i16),
    U16(u16),
    I32(i32),
    U32(u32),
    F32(f32),
    Str(String),
    Bytes(Vec<u8>),
}

impl FieldValue {
    pub fn field_type(&self) -> FieldType {
        match self {
            FieldValue::U8(_) => FieldType::U8,
            FieldValue::I16(_) => FieldType::I16,
            FieldValue::U16(_) => FieldType::U16,
            FieldValue::I32(_) => FieldType::I32,
            FieldValue::U32(_) => FieldType::U32,
            FieldValue::F32(_) => FieldType::F32,
            FieldValue::Str(_) => FieldType::Str,
            FieldValue::Bytes(_) => FieldType::Bytes,
        }
    }

    pub fn encoded_len(&self) -> usize {
        match self {
            FieldValue::Str(s) => encoded_len(s.len()),
            FieldValue::Bytes(b) => encoded_len(b.len()),
            other => other.field_type().fixed_width().unwrap_or(0),
        }
    }

    pub fn encode(&self, ctx: &Codec, bytes: &mut [u8], offset: usize) -> Result<usize> {
        let written = match self {
            FieldValue::U8(v) => ctx.write_u8(bytes, offset, *v),
            FieldValue::I16(v) => ctx.write_i16(bytes, offset, *v),
            FieldValue::U16(v) => ctx.write_u16(bytes, offset, *v),
            FieldValue::I32(v) => ctx.write_i32(bytes, offset, *v),
            FieldValue::U32(v) => ctx.write_u32(bytes, offset, *v),
            FieldValue::F32(v) => ctx.write_f32(bytes, offset, *v),
            FieldValue::Str(v) => ctx.write_string(bytes, offset, v)?,
            FieldValue::Bytes(v) => ctx.write_bytes(bytes, offset, v)?,
        };
        Ok(written)
    }
}

fn invalid(ty: FieldType, value: &str) -> CliError {
    CliError::InvalidValue {
        ty: ty.name(),
        value: value.to_string(),
    }
}

fn parse_f32(value: &str) -> Option<f32> {
    match value.strip_prefix("0x") {
        Some(bits) => u32::from_str_radix(bits, 16).ok().map(f32::from_bits),
        None => value.parse().ok(),
    }
}

impl FromStr for FieldValue {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self> {
        let (ty, value) = s
            .split_once(':')
            .ok_or_else(|| CliError::InvalidField(s.to_string()))?;
        let ty: FieldType = ty.parse()?;

        let parsed = match ty {
            FieldType::U8 => value.parse().ok().map(FieldValue::U8),
            FieldType::I16 => value.parse().ok().map(FieldValue::I16),
            FieldType::U16 => value.parse().ok().map(FieldValue::U16),
            FieldType::I32 => value.parse().ok().map(FieldValue::I32),
            FieldType::U32 => value.parse().ok().map(FieldValue::U32),
            FieldType::F32 => parse_f32(value).map(FieldValue::F32),
            FieldType::Str => Some(FieldValue::Str(value.to_string())),
            FieldType::Bytes => return hex::decode(value).map(FieldValue::Bytes),
        };
        parsed.ok_or_else(|| invalid(ty, value))
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ty = self.field_type().name();
        match self {
            FieldValue::U8(v) => write!(f, "{} {}", ty, v),
            FieldValue::I16(v) => write!(f, "{} {}", ty, v),
            FieldValue::U16(v) => write!(f, "{} {}", ty, v),
            FieldValue::I32(v) => write!(f, "{} {}", ty, v),
            FieldValue::U32(v) => write!(f, "{} {}", ty, v),
            FieldValue::F32(v) => write!(f, "{} {} (0x{:08x})", ty, v, v.to_bits()),
            FieldValue::Str(v) => write!(f, "{} {:?}", ty, v),
            FieldValue::Bytes(v) => write!(f, "{} {}", ty, hex::encode(v)),
        }
    }
}
