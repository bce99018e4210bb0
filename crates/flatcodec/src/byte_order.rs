//! Byte order selection
//!
//! The wire format never records which order was used. Encoder and decoder
//! agree on it out of band, so protocol code should always name an order
//! explicitly instead of relying on [`ByteOrder::native`].

use std::fmt;
use std::str::FromStr;

/// Byte order of multi-byte scalars in the buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ByteOrder {
    /// Least-significant byte first
    Little,
    /// Most-significant byte first
    Big,
}

impl ByteOrder {
    /// The byte order of the executing host
    #[inline]
    pub const fn native() -> Self {
        if cfg!(target_endian = "little") {
            ByteOrder::Little
        } else {
            ByteOrder::Big
        }
    }

    /// Whether this order matches the host, i.e. no byte reversal is needed
    #[inline]
    pub fn is_native(self) -> bool {
        self == Self::native()
    }

    /// Build from a little-endian flag
    #[inline]
    pub fn from_little_endian(little_endian: bool) -> Self {
        if little_endian {
            ByteOrder::Little
        } else {
            ByteOrder::Big
        }
    }
}

impl Default for ByteOrder {
    fn default() -> Self {
        Self::native()
    }
}

impl fmt::Display for ByteOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ByteOrder::Little => f.write_str("little"),
            ByteOrder::Big => f.write_str("big"),
        }
    }
}

impl FromStr for ByteOrder {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "little" | "le" => Ok(ByteOrder::Little),
            "big" | "be" => Ok(ByteOrder::Big),
            "native" => Ok(ByteOrder::native()),
            other => Err(format!("unknown byte order: {}", other)),
        }
    }
}
