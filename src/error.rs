//! The flat error taxonomy shared by [`crate::encode`] and [`crate::decode`].

use thiserror::Error;

/// Everything that can go wrong encoding or decoding a [`crate::Value`].
///
/// No kind is ever recovered internally: a parse failure discards whatever
/// partial tree had been built and returns immediately — decode never
/// hands back a half-built value.
#[derive(Error, Debug, PartialEq, Clone)]
pub enum BosError {
    #[error("truncated input at offset {offset}: needed {needed} more byte(s)")]
    TruncatedInput { offset: usize, needed: usize },

    #[error("unknown type code {code:#04x} at offset {offset}")]
    UnknownTypeCode { code: u8, offset: usize },

    #[error("container too large: {actual} exceeds the 255-element/key limit")]
    ContainerTooLarge { actual: usize },

    #[error("object key too long: {actual} bytes exceeds the 255-byte limit")]
    KeyTooLong { actual: usize },

    #[error("duplicate object key {key:?} at offset {offset}")]
    DuplicateKey { key: String, offset: usize },

    #[error("nesting depth exceeded {limit} at offset {offset}")]
    DepthExceeded { limit: usize, offset: usize },

    #[error("integer value {value} cannot be represented by this encoding")]
    Overflow { value: i128 },

    #[error("invalid boolean byte {byte:#04x} at offset {offset}")]
    InvalidBoolean { byte: u8, offset: usize },

    #[error("invalid UTF-8 in string/key payload at offset {offset}")]
    InvalidUtf8 { offset: usize },

    #[error("{consumed} trailing byte(s) after the root value (declared size {declared})")]
    TrailingBytes { consumed: usize, declared: usize },
}

pub type Result<T> = std::result::Result<T, BosError>;
