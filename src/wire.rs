//! Wire-level constants: type codes (§3.1) and the varlen size-prefix
//! encoding (§4.2) shared by the [`crate::writer`] and [`crate::reader`].

pub const TYPE_NULL: u8 = 0x00;
pub const TYPE_BOOL: u8 = 0x01;
pub const TYPE_INT8: u8 = 0x02;
pub const TYPE_INT16: u8 = 0x03;
pub const TYPE_INT32: u8 = 0x04;
pub const TYPE_INT64: u8 = 0x05;
pub const TYPE_UINT8: u8 = 0x06;
pub const TYPE_UINT16: u8 = 0x07;
pub const TYPE_UINT32: u8 = 0x08;
pub const TYPE_UINT64: u8 = 0x09;
pub const TYPE_FLOAT32: u8 = 0x0A;
pub const TYPE_FLOAT64: u8 = 0x0B;
pub const TYPE_STRING: u8 = 0x0C;
pub const TYPE_BYTES: u8 = 0x0D;
pub const TYPE_ARRAY: u8 = 0x0E;
pub const TYPE_OBJECT: u8 = 0x0F;

/// The highest valid type code; anything greater is `UnknownTypeCode`.
pub const TYPE_MAX: u8 = TYPE_OBJECT;

/// Sentinel bytes that introduce a wider varlen size field (§4.2).
pub const VARLEN_U16: u8 = 0xFD;
pub const VARLEN_U32: u8 = 0xFE;
pub const VARLEN_U64: u8 = 0xFF;

/// Largest size representable as a single varlen byte.
pub const VARLEN_INLINE_MAX: usize = 0xFC;

/// Maximum elements in an `Array` or keys in an `Object` (§3.2); shares
/// the single-byte count field used by both container headers.
pub const MAX_CONTAINER_LEN: usize = 0xFF;

/// Maximum length, in bytes, of an object key (§3.2).
pub const MAX_KEY_LEN: usize = 0xFF;

/// Recommended recursion depth limit (§4.5).
pub const DEFAULT_MAX_DEPTH: usize = 128;
