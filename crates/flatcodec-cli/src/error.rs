//! Error types for the command line tool

use flatcodec::CodecError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("invalid field '{0}': expected TYPE:VALUE")]
    InvalidField(String),

    #[error("unknown field type: {0}")]
    UnknownType(String),

    #[error("invalid {ty} value: {value}")]
    InvalidValue { ty: &'static str, value: String },

    #[error("invalid hex: {0}")]
    InvalidHex(String),

    #[error("input truncated at offset {offset}: needed {needed} bytes, have {have}")]
    Truncated { offset: usize, needed: usize, have: usize },

    #[error(transparent)]
    Codec(#[from] CodecError),
}

pub type Result<T> = std::result::Result<T, CliError>;
